use crate::error::SourceSpan;
use crate::medline::tags::RECORD_MARKER;

/// The text of one MEDLINE record, following its `PMID- ` marker.
///
/// The first line of `text` holds the record's PMID; the rest holds its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordBody<'a> {
    /// Record text after the marker, up to the next marker or the end of input.
    pub text: &'a str,
    /// Line of the source on which the marker appears (1-based).
    pub start_line: usize,
    /// Byte span of the record in the source, marker included.
    pub span: SourceSpan,
}

impl<'a> RecordBody<'a> {
    /// The physical lines of the record, line terminators removed.
    pub fn lines(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.text.lines()
    }
}

/// Split a MEDLINE export into record bodies on the `PMID- ` marker.
///
/// Text before the first marker is discarded. An input without any marker
/// produces no records.
pub fn split_records(text: &str) -> Vec<RecordBody<'_>> {
    let starts: Vec<usize> = text
        .match_indices(RECORD_MARKER)
        .map(|(start, _)| start)
        .collect();

    let mut line = 1;
    let mut counted_to = 0;
    starts
        .iter()
        .enumerate()
        .map(|(n, &start)| {
            line += text[counted_to..start].matches('\n').count();
            counted_to = start;
            let end = starts.get(n + 1).copied().unwrap_or(text.len());
            RecordBody {
                text: &text[start + RECORD_MARKER.len()..end],
                start_line: line,
                span: SourceSpan::new(start, end),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_marker() {
        assert!(split_records("").is_empty());
        assert!(split_records("TI  - No identifier\nDP  - 2024").is_empty());
        assert!(split_records("PMID-123 marker without its space").is_empty());
    }

    #[test]
    fn test_preamble_discarded() {
        let text = "Search results\n\nPMID- 1\nTI  - One\n";
        let records = split_records(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "1\nTI  - One\n");
        assert_eq!(records[0].start_line, 3);
        assert_eq!(&text[records[0].span.start..records[0].span.end], "PMID- 1\nTI  - One\n");
    }

    #[test]
    fn test_records_in_order() {
        let text = "PMID- 1\nTI  - One\n\nPMID- 2\nTI  - Two\n\nPMID- 3\nTI  - Three";
        let records = split_records(text);
        let first_lines: Vec<_> = records.iter().filter_map(|r| r.lines().next()).collect();
        assert_eq!(first_lines, ["1", "2", "3"]);
        let start_lines: Vec<_> = records.iter().map(|r| r.start_line).collect();
        assert_eq!(start_lines, [1, 4, 7]);
    }

    #[test]
    fn test_crlf_lines() {
        let records = split_records("PMID- 9\r\nTI  - Windows\r\n");
        let lines: Vec<_> = records[0].lines().collect();
        assert_eq!(lines, ["9", "TI  - Windows"]);
    }

    #[test]
    fn test_marker_at_end() {
        let records = split_records("PMID- 1\nTI  - One\nPMID- ");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].text, "");
        assert_eq!(records[1].lines().count(), 0);
    }
}
