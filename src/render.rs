//! Rendering of articles as chat messages.
//!
//! Messages use the chat platform's legacy Markdown: `_italic_`, `**bold**`
//! and `[text](url)` links.

use crate::ArticleRecord;

/// Base URL of an article's PubMed page.
pub const PUBMED_ARTICLE_URL: &str = "https://pubmed.ncbi.nlm.nih.gov/";

/// One outgoing chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// Whether `text` should be sent with Markdown formatting.
    pub markdown: bool,
}

impl Reply {
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            markdown: false,
        }
    }

    pub fn markdown<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            markdown: true,
        }
    }
}

/// Render a listing as messages of at most `per_message` articles each.
///
/// The first message opens with a heading naming the journal and `label`;
/// articles are numbered from 1 across all messages.
pub fn listing_messages(
    journal: &str,
    label: &str,
    records: &[ArticleRecord],
    per_message: usize,
) -> Vec<Reply> {
    records
        .chunks(per_message.max(1))
        .scan(0, |numbered, chunk| {
            let mut text = if *numbered == 0 {
                format!("📚 {journal} Articles ({label})\n\n")
            } else {
                String::new()
            };
            for record in chunk {
                *numbered += 1;
                text.push_str(&listing_entry(*numbered, record));
            }
            Some(Reply::markdown(text))
        })
        .collect()
}

fn listing_entry(number: usize, record: &ArticleRecord) -> String {
    format!(
        "{number}. PMID: {pmid}\nDate: {date}\nTitle: _{title}_\nAbstract: /abstract {pmid}\n\n",
        pmid = record.identifier,
        date = record.publication_date,
        title = record.title,
    )
}

/// Render the abstract of `record`, with links to PubMed and, when the record
/// has a DOI, to the publisher's page.
///
/// Returns `None` when the record has no abstract.
pub fn abstract_message(record: &ArticleRecord, publisher_doi_base: &str) -> Option<Reply> {
    let abstract_text = record.abstract_text.as_deref()?;
    let pmid = &record.identifier;
    let mut text = format!(
        "📄 **Abstract for PMID {pmid}**\n\n**Title:** _{title}_\n\n**Date:** {date}\n\n**Abstract:**\n{abstract_text}\n\n🔗 [View on PubMed]({PUBMED_ARTICLE_URL}{pmid}/)",
        title = record.title,
        date = record.publication_date,
    );
    if let Some(doi) = &record.external_object_id {
        text.push_str(&format!("\n🔗 [View Full Article]({publisher_doi_base}{doi})"));
    }
    Some(Reply::markdown(text))
}
