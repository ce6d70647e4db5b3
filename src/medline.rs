//! MEDLINE (PubMed `.nbib`) export parser.
//!
//! Splits a concatenated export into records on the `PMID- ` marker and
//! extracts the identifier, publication date, title, abstract and DOI of each.
//! A record that lacks one of the required fields is skipped; the rest of the
//! batch is unaffected.
//!
//! # Example
//!
//! ```
//! use pubwatch::MedlineParser;
//!
//! let input = r#"PMID- 12345678
//! DP  - 2024 Mar
//! TI  - Example Title
//! FAU - Smith, John
//!
//! "#;
//!
//! let parser = MedlineParser::new();
//! let records = parser.parse(input);
//! assert_eq!(records[0].title, "Example Title");
//! ```

mod parse;
mod split;
mod structure;
pub mod tags;

use crate::ArticleRecord;
use crate::error::ParseError;
use crate::medline::parse::parse_record;
use crate::utils::preview;
use either::{Left, Right};
use itertools::Itertools;

pub use split::{RecordBody, split_records};

/// Parser for MEDLINE formatted exports.
#[derive(Debug, Clone, Default)]
pub struct MedlineParser {}

impl MedlineParser {
    /// Creates a new MEDLINE parser instance.
    ///
    /// # Examples
    ///
    /// ```
    /// use pubwatch::MedlineParser;
    /// let parser = MedlineParser::new();
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses every record of `input`, keeping the reason each failed record
    /// was skipped. Outcomes are in source order.
    pub fn parse_outcomes(&self, input: &str) -> Vec<Result<ArticleRecord, ParseError>> {
        split_records(input).iter().map(parse_record).collect()
    }

    /// Parses the complete records of `input`, in source order.
    ///
    /// Incomplete or malformed records are logged and dropped, so this never
    /// fails: at worst it returns fewer records than the input holds.
    pub fn parse(&self, input: &str) -> Vec<ArticleRecord> {
        let outcomes = self.parse_outcomes(input);
        let total = outcomes.len();
        let (records, skipped): (Vec<_>, Vec<_>) =
            outcomes.into_iter().partition_map(|outcome| match outcome {
                Ok(record) => Left(record),
                Err(err) => Right(err),
            });

        for record in &records {
            tracing::debug!(
                pmid = %record.identifier,
                date = %record.publication_date,
                title = preview(&record.title, 50),
                "parsed article"
            );
        }
        for err in &skipped {
            tracing::warn!(line = err.line, "{err}");
        }
        tracing::info!(
            parsed = records.len(),
            skipped = skipped.len(),
            "parsed {} of {} records",
            records.len(),
            total
        );
        records
    }
}

/// Parses the complete records of a MEDLINE export with a default [`MedlineParser`].
pub fn parse_records(input: &str) -> Vec<ArticleRecord> {
    MedlineParser::new().parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ValueError, fields};
    use pretty_assertions::assert_eq;

    const EXPORT: &str = r#"PMID- 41014576
OWN - NLM
STAT- Publisher
LR  - 20250927
IS  - 2163-8306 (Electronic)
IS  - 2163-8306 (Linking)
DP  - 2025 Sep 26
TI  - Model-Informed Dose Selection for a Pediatric Population: A Physiologically
      Based Pharmacokinetic Case Study.
LID - 10.1002/psp4.70112 [doi]
AB  - Physiologically based pharmacokinetic (PBPK) modeling was used to support
      dose selection in children.
CI  - (c) 2025 The Author(s). CPT: Pharmacometrics & Systems Pharmacology published by
      Wiley Periodicals LLC on behalf of American Society for Clinical Pharmacology and
      Therapeutics.
FAU - Doe, Jane
AU  - Doe J
AD  - Department of Pharmacy, Example University, Boston, Massachusetts,
      USA.
LA  - eng
PT  - Journal Article
DEP - 20250926
PL  - United States
TA  - CPT Pharmacometrics Syst Pharmacol
JT  - CPT: pharmacometrics & systems pharmacology
JID - 101580011
SB  - IM
OTO - NOTNLM
OT  - PBPK
EDAT- 2025/09/27 06:42
MHDA- 2025/09/27 06:42
CRDT- 2025/09/27 01:03
PHST- 2025/08/01 00:00 [received]
AID - 10.1002/psp4.70112 [doi]
PST - aheadofprint
SO  - CPT Pharmacometrics Syst Pharmacol. 2025 Sep 26. doi: 10.1002/psp4.70112.

PMID- 41014577
DP  - 2025 Sep 25
TI  - Population Pharmacokinetics of an Antibody.
LID - S2163-8306(25)00001-X [pii]
FAU - Roe, Richard
SO  - CPT Pharmacometrics Syst Pharmacol. 2025 Sep 25.
"#;

    #[test]
    fn test_parse_realistic_export() {
        let records = MedlineParser::new().parse(EXPORT);
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.identifier, "41014576");
        assert_eq!(first.publication_date, "2025 Sep 26");
        assert_eq!(
            first.title,
            "Model-Informed Dose Selection for a Pediatric Population: A Physiologically Based Pharmacokinetic Case Study."
        );
        assert_eq!(
            first.abstract_text.as_deref(),
            Some(
                "Physiologically based pharmacokinetic (PBPK) modeling was used to support dose selection in children."
            )
        );
        assert_eq!(first.external_object_id.as_deref(), Some("10.1002/psp4.70112"));

        let second = &records[1];
        assert_eq!(second.identifier, "41014577");
        assert_eq!(second.abstract_text, None);
        assert_eq!(
            second.external_object_id.as_deref(),
            Some("S2163-8306(25)00001-X")
        );
    }

    #[test]
    fn test_parse_three_records() {
        let input = r#"PMID- 123
DP  - 2024
TI  - One

PMID- 456
DP  - 2024
TI  - Two

PMID- 789
DP  - 2024
TI  - Three
"#;
        let records = parse_records(input);
        let titles = records.iter().map(|r| r.title.as_str()).collect_vec();
        assert_eq!(titles, &["One", "Two", "Three"]);
        let pmids = records.iter().map(|r| r.identifier.as_str()).collect_vec();
        assert_eq!(pmids, &["123", "456", "789"]);
    }

    #[test]
    fn test_malformed_record_is_skipped() {
        let input = r#"PMID- 1
DP  - 2024
TI  - One

PMID- 2
TI  - Missing its date

PMID- 3
DP  - 2024
TI  - Three
"#;
        let parser = MedlineParser::new();
        let outcomes = parser.parse_outcomes(input);
        assert_eq!(outcomes.len(), 3);
        let err = outcomes[1].as_ref().unwrap_err();
        assert_eq!(err.line, Some(5));
        assert_eq!(err.identifier.as_deref(), Some("2"));
        assert_eq!(
            err.error,
            ValueError::MissingValue {
                field: fields::DATE,
                key: "DP"
            }
        );

        let pmids = parser
            .parse(input)
            .into_iter()
            .map(|r| r.identifier)
            .collect_vec();
        assert_eq!(pmids, ["1", "3"]);
    }

    #[test]
    fn test_example_record() {
        let input = "PMID- 123\nDP  - 2024/01/01\nTI  - Example\n      Title\nAB  - Some\n      abstract text\nLID - 10.1/x [doi]\n";
        assert_eq!(
            parse_records(input),
            vec![ArticleRecord {
                identifier: "123".to_string(),
                publication_date: "2024/01/01".to_string(),
                title: "Example Title".to_string(),
                abstract_text: Some("Some abstract text".to_string()),
                external_object_id: Some("10.1/x".to_string()),
            }]
        );
    }

    #[test]
    fn test_no_marker_yields_nothing() {
        assert!(parse_records("").is_empty());
        assert!(parse_records("   \n  \t  ").is_empty());
        assert!(parse_records("<html>No results</html>").is_empty());
    }

    #[test]
    fn test_trailing_marker_is_malformed() {
        let outcomes = MedlineParser::new().parse_outcomes("PMID- 1\nDP  - 2024\nTI  - One\nPMID- ");
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[0].is_ok());
        assert!(matches!(
            outcomes[1].as_ref().unwrap_err().error,
            ValueError::Syntax(_)
        ));
    }
}
