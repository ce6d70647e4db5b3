use crate::ArticleRecord;
use crate::error::{ParseError, SourceSpan, ValueError, fields};
use crate::medline::tags::MedlineTag;
use crate::utils::leading_token;

/// Field values collected from one MEDLINE record, before validation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawMedlineData {
    /// First line of the record, trimmed.
    pub(crate) identifier: String,
    /// Last `DP` value seen.
    pub(crate) publication_date: Option<String>,
    /// Last `TI` value seen, continuation lines joined.
    pub(crate) title: Option<String>,
    /// Last `AB` value seen, continuation lines joined.
    pub(crate) abstract_text: Option<String>,
    /// Last `LID` value seen.
    pub(crate) location_id: Option<String>,
    /// Starting line number of this record in the source text (1-based).
    pub(crate) start_line: usize,
    /// Byte-offset span of the record in the source text.
    pub(crate) record_span: SourceSpan,
}

impl RawMedlineData {
    pub(crate) fn new(identifier: String, start_line: usize, record_span: SourceSpan) -> Self {
        Self {
            identifier,
            publication_date: None,
            title: None,
            abstract_text: None,
            location_id: None,
            start_line,
            record_span,
        }
    }

    fn missing(&self, field: &'static str, tag: MedlineTag) -> ParseError {
        ParseError::at_line(
            self.start_line,
            ValueError::MissingValue {
                field,
                key: tag.code(),
            },
        )
        .with_span(self.record_span.clone())
        .with_identifier(&self.identifier)
    }
}

impl TryFrom<RawMedlineData> for ArticleRecord {
    type Error = ParseError;

    fn try_from(raw: RawMedlineData) -> Result<Self, Self::Error> {
        if raw.identifier.is_empty() {
            return Err(raw.missing(fields::IDENTIFIER, MedlineTag::PubmedId));
        }
        let publication_date = match non_empty(raw.publication_date.clone()) {
            Some(date) => date,
            None => return Err(raw.missing(fields::DATE, MedlineTag::PublicationDate)),
        };
        let title = match non_empty(raw.title.clone()) {
            Some(title) => title,
            None => return Err(raw.missing(fields::TITLE, MedlineTag::Title)),
        };
        let external_object_id = raw
            .location_id
            .as_deref()
            .and_then(leading_token)
            .map(str::to_string);

        Ok(Self {
            identifier: raw.identifier,
            publication_date,
            title,
            abstract_text: non_empty(raw.abstract_text),
            external_object_id,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
