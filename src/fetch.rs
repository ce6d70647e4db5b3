//! Retrieval of a journal's recent articles from the PubMed listing.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::ArticleRecord;
use crate::config::Settings;
use crate::error::FetchError;
use crate::medline::parse_records;
use crate::page::extract_export;
use crate::query::{DateRange, search_url};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Something that can list the articles published in a date range.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch the articles published within `range`, newest first.
    async fn fetch(&self, range: &DateRange) -> Result<Vec<ArticleRecord>, FetchError>;
}

/// PubMed listing client.
///
/// Each fetch is a single GET bounded by the configured timeout; there are no
/// retries.
#[derive(Debug, Clone)]
pub struct PubMedClient {
    client: Client,
    settings: Settings,
}

impl PubMedClient {
    /// Create a client for the journal described by `settings`.
    pub fn new(settings: Settings) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self { client, settings })
    }

    /// Create with a custom HTTP client
    pub fn with_client(client: Client, settings: Settings) -> Self {
        Self { client, settings }
    }
}

#[async_trait]
impl ArticleSource for PubMedClient {
    async fn fetch(&self, range: &DateRange) -> Result<Vec<ArticleRecord>, FetchError> {
        let url = search_url(&self.settings, range);
        tracing::debug!(%url, "requesting journal listing");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let html = response.text().await?;

        let Some(export) = extract_export(&html) else {
            tracing::warn!("No search results found in response");
            return Ok(Vec::new());
        };
        tracing::info!(length = export.len(), "found search results");
        Ok(parse_records(&export))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        )
    }

    fn settings_for(server: &mockito::Server) -> Settings {
        Settings {
            base_url: format!("{}/", server.url()),
            timeout_secs: 5,
            ..Settings::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_parses_listing() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("format".into(), "pubmed".into()),
                Matcher::UrlEncoded("size".into(), "200".into()),
                Matcher::UrlEncoded("filter".into(), "dates.2025/01/01-2025/01/31".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"<html><pre class="search-results-chunk">PMID- 1
DP  - 2025 Jan 3
TI  - First &amp; foremost
LID - 10.1002/psp4.1 [doi]

PMID- 2
TI  - No date, skipped
</pre></html>"#,
            )
            .create_async()
            .await;

        let client = PubMedClient::new(settings_for(&server)).unwrap();
        let records = client.fetch(&range()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].identifier, "1");
        assert_eq!(records[0].title, "First & foremost");
        assert_eq!(records[0].external_object_id.as_deref(), Some("10.1002/psp4.1"));
    }

    #[tokio::test]
    async fn test_fetch_without_results_block() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html><p>No results were found.</p></html>")
            .create_async()
            .await;

        let client = PubMedClient::new(settings_for(&server)).unwrap();
        assert!(client.fetch(&range()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let client = PubMedClient::with_client(Client::new(), settings_for(&server));
        let err = client.fetch(&range()).await.unwrap_err();
        assert!(matches!(err, FetchError::Status(503)));
    }
}
