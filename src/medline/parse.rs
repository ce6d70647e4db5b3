//! Field extraction for a single MEDLINE record.

use crate::ArticleRecord;
use crate::error::{ParseError, ValueError};
use crate::medline::split::RecordBody;
use crate::medline::structure::RawMedlineData;
use crate::medline::tags::{CONTINUATION_INDENT, ContinuedField, MedlineTag};
use itertools::Itertools;

/// Parse one record body into an article, or the reason it was skipped.
pub(crate) fn parse_record(body: &RecordBody<'_>) -> Result<ArticleRecord, ParseError> {
    collect_fields(body)?.try_into()
}

/// Scan the record once, top to bottom, collecting the fields of interest.
///
/// Lines are matched against tags after trimming. `TI` and `AB` values also
/// absorb the indented continuation lines that follow them.
fn collect_fields(body: &RecordBody<'_>) -> Result<RawMedlineData, ParseError> {
    let lines: Vec<&str> = body.lines().collect();
    let Some((first, rest)) = lines.split_first() else {
        return Err(
            ParseError::at_line(body.start_line, ValueError::Syntax("empty record".to_string()))
                .with_span(body.span.clone()),
        );
    };

    let mut raw = RawMedlineData::new(first.trim().to_string(), body.start_line, body.span.clone());
    for (cursor, line) in rest.iter().enumerate() {
        let line = line.trim();
        let following = &rest[cursor + 1..];
        if let Some(value) = MedlineTag::PublicationDate.value_of(line) {
            raw.publication_date = Some(value.to_string());
        } else if let Some(value) = ContinuedField::Title.tag().value_of(line) {
            raw.title = Some(join_continued(ContinuedField::Title, value, following));
        } else if let Some(value) = ContinuedField::Abstract.tag().value_of(line) {
            raw.abstract_text = Some(join_continued(ContinuedField::Abstract, value, following));
        } else if let Some(value) = MedlineTag::LocationId.value_of(line) {
            raw.location_id = Some(value.to_string());
        }
    }
    Ok(raw)
}

/// Join the first value of a multi-line field with its continuation lines.
///
/// Per line: the field's boundary tag stops the scan; a line indented by six
/// spaces is a continuation; any tag of the field's stop set stops the scan;
/// anything else is passed over.
fn join_continued(field: ContinuedField, first: &str, following: &[&str]) -> String {
    let mut parts = vec![first.trim()];
    for line in following {
        let trimmed = line.trim();
        if field.boundary().starts(trimmed) {
            break;
        } else if line.starts_with(CONTINUATION_INDENT) {
            parts.push(trimmed);
        } else if field.is_stopped_by(trimmed) {
            break;
        }
    }
    parts.into_iter().filter(|part| !part.is_empty()).join(" ")
}
