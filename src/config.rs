//! Configuration management.
//!
//! Settings come from built-in defaults, an optional TOML file and
//! `PUBWATCH_*` environment variables, in increasing order of precedence.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix of the environment variables that override settings,
/// e.g. `PUBWATCH_DAYS_BACK=14`.
pub const ENV_PREFIX: &str = "PUBWATCH";

/// Bot and listing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// PubMed listing endpoint
    pub base_url: String,

    /// Journal search term, as used in the `[Journal]` filter
    pub journal_term: String,

    /// Journal name shown in message headings
    pub journal_name: String,

    /// Size of the default look-back window, in days
    pub days_back: u32,

    /// Result-size cap sent with each request
    pub max_articles: u32,

    /// Request timeout, in seconds
    pub timeout_secs: u64,

    /// Articles per listing message
    pub articles_per_message: usize,

    /// Prefix joined with a DOI to link to the publisher's article page
    pub publisher_doi_base: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "https://pubmed.ncbi.nlm.nih.gov/".to_string(),
            journal_term: "CPT Pharmacometrics Syst Pharmacol".to_string(),
            journal_name: "CPT Pharmacometrics & Systems Pharmacology".to_string(),
            days_back: 30,
            max_articles: 200,
            timeout_secs: 30,
            articles_per_message: 5,
            publisher_doi_base: "https://ascpt.onlinelibrary.wiley.com/doi/".to_string(),
        }
    }
}

/// Load settings from an optional file, overridden by the environment.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, config::ConfigError> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path));
    }
    builder
        .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.days_back, 30);
        assert_eq!(settings.max_articles, 200);
        assert_eq!(settings.articles_per_message, 5);
        assert!(settings.base_url.ends_with('/'));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = std::env::temp_dir().join(format!("pubwatch-test-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "days_back = 7").unwrap();
        writeln!(file, "journal_name = \"Test Journal\"").unwrap();
        drop(file);

        let settings = load_settings(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.days_back, 7);
        assert_eq!(settings.journal_name, "Test Journal");
        assert_eq!(settings.max_articles, 200);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = Path::new("/nonexistent/pubwatch.toml");
        assert!(load_settings(Some(path)).is_err());
    }
}
