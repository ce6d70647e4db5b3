//! Watch a journal's PubMed listing and turn new articles into chat messages.
//!
//! `pubwatch` retrieves the recently published articles of one journal from the
//! PubMed listing, parses the MEDLINE plain-text export embedded in the page and
//! renders the records as chat replies. The interesting part is the MEDLINE
//! parser in [`medline`]: it splits a concatenated export into records and
//! extracts the fields each record needs, joining multi-line titles and
//! abstracts and tolerating partial or malformed records.
//!
//! # Features
//!
//! - `regex` - Use the `regex` crate for command matching (enabled by default)
//! - `lite` - Use `regex-lite` instead of `regex`
//! - `fetch` - HTTP client, listing page extraction and the chat bot (enabled by default)
//! - `diagnostics` - Pretty reports for skipped records via `ariadne`
//!
//! # Basic Usage
//!
//! ```rust
//! use pubwatch::parse_records;
//!
//! let input = "PMID- 123
//! DP  - 2024/01/01
//! TI  - Example
//!       Title
//! AB  - Some
//!       abstract text
//! LID - 10.1/x [doi]
//! ";
//!
//! let records = parse_records(input);
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].title, "Example Title");
//! assert_eq!(records[0].abstract_text.as_deref(), Some("Some abstract text"));
//! assert_eq!(records[0].external_object_id.as_deref(), Some("10.1/x"));
//! ```
//!
//! # Error Handling
//!
//! Parsing a batch never fails. Each record is parsed into a
//! `Result<ArticleRecord, ParseError>`; records that fail are logged and
//! dropped by [`parse_records`], and can be inspected with
//! [`MedlineParser::parse_outcomes`]:
//!
//! ```rust
//! use pubwatch::MedlineParser;
//!
//! let outcomes = MedlineParser::new().parse_outcomes("PMID- 1\nTI  - No date\n");
//! assert!(outcomes[0].is_err());
//! ```

use serde::{Deserialize, Serialize};

#[cfg(feature = "fetch")]
pub mod bot;
pub mod config;
#[cfg(feature = "diagnostics")]
pub mod diagnostics;
pub mod error;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod medline;
#[cfg(feature = "fetch")]
pub mod page;
pub mod query;
pub mod render;

// Reexports
#[cfg(feature = "fetch")]
pub use bot::{Bot, Command};
pub use crate::config::{Settings, load_settings};
pub use error::{CommandError, Error, ParseError, SourceSpan, ValueError};
#[cfg(feature = "fetch")]
pub use error::FetchError;
#[cfg(feature = "fetch")]
pub use fetch::{ArticleSource, PubMedClient};
pub use medline::{MedlineParser, RecordBody, parse_records, split_records};
pub use query::DateRange;
pub use render::Reply;

mod regex;
mod utils;

/// A journal article extracted from one MEDLINE record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// PubMed identifier (PMID)
    pub identifier: String,
    /// Publication date, verbatim from the `DP` field
    pub publication_date: String,
    /// Title, with continuation lines joined by single spaces
    pub title: String,
    /// Abstract, with continuation lines joined by single spaces
    pub abstract_text: Option<String>,
    /// Leading token of the location identifier, usually a DOI
    pub external_object_id: Option<String>,
}
