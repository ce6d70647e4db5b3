//! Extraction of the MEDLINE export from a PubMed listing page.

use scraper::{Html, Selector};

/// Element holding the export when the listing is requested with `format=pubmed`.
const RESULTS_SELECTOR: &str = "pre.search-results-chunk";

/// Returns the text of the listing's export block, entities decoded, or
/// `None` when the page carries no results.
pub fn extract_export(html: &str) -> Option<String> {
    let selector = Selector::parse(RESULTS_SELECTOR).ok()?;
    let document = Html::parse_document(html);
    let chunk = document.select(&selector).next()?;
    Some(chunk.text().collect())
}
