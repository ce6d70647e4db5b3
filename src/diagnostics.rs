//! Pretty reporting of skipped records using [ariadne].
//!
//! Only compiled when the `diagnostics` Cargo feature is enabled:
//!
//! ```toml
//! [dependencies]
//! pubwatch = { version = "0.1", features = ["diagnostics"] }
//! ```
//!
//! # Example
//!
//! ```rust
//! use pubwatch::MedlineParser;
//!
//! let source = "PMID- 1\nTI  - No date\n";
//! for outcome in MedlineParser::new().parse_outcomes(source) {
//!     if let Err(e) = outcome {
//!         eprintln!("{}", e.to_diagnostic("export.nbib", source));
//!     }
//! }
//! ```

use crate::error::ParseError;
use ariadne::{Color, Label, Report, ReportKind, Source};

impl ParseError {
    /// Render this error as a pretty Ariadne diagnostic pointing at the record.
    ///
    /// The returned `String` contains ANSI colour codes.
    ///
    /// # Arguments
    ///
    /// * `filename` – Label shown in the report header (e.g. `"export.nbib"`).
    /// * `source`   – The export text that was parsed.
    pub fn to_diagnostic(&self, filename: &str, source: &str) -> String {
        let mut buf = Vec::new();
        let primary_range = self.primary_byte_range(source);

        let report = Report::build(ReportKind::Warning, (filename, primary_range.clone()))
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, primary_range))
                    .with_message(self.error.to_string())
                    .with_color(Color::Yellow),
            )
            .finish();

        if let Err(err) = report.write((filename, Source::from(source)), &mut buf) {
            return format!("{self} ({err})");
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Byte range of `source` to underline.
    ///
    /// Priority: explicit `span` > line-derived range > start of file.
    fn primary_byte_range(&self, source: &str) -> std::ops::Range<usize> {
        if let Some(ref span) = self.span {
            let end = span.end.min(source.len());
            return span.start.min(end)..end;
        }
        if let Some(line) = self.line {
            let line_start: usize = source
                .split_inclusive('\n')
                .take(line.saturating_sub(1))
                .map(str::len)
                .sum();
            let line_len = source
                .lines()
                .nth(line.saturating_sub(1))
                .map(str::len)
                .unwrap_or(0);
            return line_start..line_start + line_len;
        }
        0..0
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{ParseError, SourceSpan, ValueError};

    #[test]
    fn test_to_diagnostic_with_span() {
        let source = "PMID- 1\nTI  - No date\n";
        let err = ParseError::at_line(
            1,
            ValueError::MissingValue {
                field: "publication_date",
                key: "DP",
            },
        )
        .with_span(SourceSpan::new(0, source.len()));

        let diag = err.to_diagnostic("export.nbib", source);
        assert!(diag.contains("export.nbib"));
        assert!(diag.contains("Missing value for DP"));
    }

    #[test]
    fn test_to_diagnostic_line_only() {
        let source = "PMID- 1\nDP  - 2024\nPMID- \n";
        let err = ParseError::at_line(3, ValueError::Syntax("empty record".into()));
        assert_eq!(err.primary_byte_range(source), 19..25);
        assert!(err.to_diagnostic("export.nbib", source).contains("export.nbib"));
    }

    #[test]
    fn test_to_diagnostic_no_position() {
        let err = ParseError::new(None, ValueError::Syntax("bad input".into()));
        let diag = err.to_diagnostic("export.nbib", "some content\n");
        assert!(diag.contains("export.nbib"));
    }
}
