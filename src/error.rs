//! Error types for parsing, fetching and command handling.
//!
//! Record-level parse failures carry the line and byte span of the record in
//! the original export so that skipped records can be reported precisely.

use thiserror::Error;

/// A byte-offset span into the original source text.
///
/// Both `start` and `end` are byte offsets (not character indices) from the
/// beginning of the source string.  `start` is inclusive, `end` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpan {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl SourceSpan {
    /// Create a new `SourceSpan`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Field name constants for consistent error reporting.
pub mod fields {
    pub const IDENTIFIER: &str = "identifier";
    pub const DATE: &str = "publication_date";
    pub const TITLE: &str = "title";
}

/// Top-level error type for the binary and other whole-program operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[cfg(feature = "fetch")]
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A MEDLINE record that could not be turned into an article.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Skipped record{}{}: {error}", describe_identifier(.identifier), describe_line(.line))]
pub struct ParseError {
    /// Line where the record starts (1-based, None if not available)
    pub line: Option<usize>,
    /// Byte-offset span of the record in the source text.
    pub span: Option<SourceSpan>,
    /// Identifier of the record, when one was found.
    pub identifier: Option<String>,
    /// The specific error that occurred
    pub error: ValueError,
}

fn describe_identifier(identifier: &Option<String>) -> String {
    match identifier {
        Some(id) => format!(" PMID {id}"),
        None => String::new(),
    }
}

fn describe_line(line: &Option<usize>) -> String {
    match line {
        Some(l) => format!(" at line {l}"),
        None => String::new(),
    }
}

impl ParseError {
    /// Create a new ParseError.
    pub fn new(line: Option<usize>, error: ValueError) -> Self {
        Self {
            line,
            span: None,
            identifier: None,
            error,
        }
    }

    /// Create a ParseError with just line information.
    pub fn at_line(line: usize, error: ValueError) -> Self {
        Self::new(Some(line), error)
    }

    /// Attach a byte-offset span to this error, returning `self` (builder style).
    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach the record identifier, ignoring blank ones.
    pub fn with_identifier<S: AsRef<str>>(mut self, identifier: S) -> Self {
        let identifier = identifier.as_ref().trim();
        if !identifier.is_empty() {
            self.identifier = Some(identifier.to_string());
        }
        self
    }
}

/// Specific value-level errors that can occur during parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("Bad syntax: {0}")]
    Syntax(String),

    #[error("Missing value for {key}")]
    MissingValue {
        field: &'static str,
        key: &'static str,
    },
}

/// Failure of the single request made per fetch.
#[cfg(feature = "fetch")]
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),
}

/// Errors raised while interpreting chat input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("Expected a range in the form YYYY-MM-DD to YYYY-MM-DD")]
    RangeFormat,

    #[error("Invalid date \"{value}\": {reason}")]
    BadDate { value: String, reason: String },
}
