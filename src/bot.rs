//! Chat command routing.
//!
//! [`Command::parse`] turns an incoming chat message into a command and
//! [`Bot::handle`] answers it with the replies to send, in order. A failed or
//! empty fetch is reported to the user as "no articles found", never as an
//! error.

use chrono::{Local, NaiveDate};
use std::sync::LazyLock;

use crate::ArticleRecord;
use crate::config::Settings;
use crate::error::CommandError;
use crate::fetch::ArticleSource;
use crate::query::DateRange;
use crate::regex::Regex;
use crate::render::{Reply, abstract_message, listing_messages};

/// `/name`, an optional `@botname` suffix, then the arguments.
static COMMAND_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/([A-Za-z0-9_]+)(?:@[A-Za-z0-9_]+)?(?:\s+(.*))?$").unwrap());

const EXAMPLE_PMID: &str = "41014576";

/// An incoming chat message, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/start`: introduce the bot
    Start,
    /// `/articles`: list the articles of the default window
    Articles,
    /// `/custom`: ask for a date range
    Custom,
    /// `/abstract <PMID>`: show one article's abstract
    Abstract(Option<String>),
    /// Plain text, read as a `YYYY-MM-DD to YYYY-MM-DD` range
    Range(String),
    /// A command the bot does not know; ignored
    Unknown(String),
}

impl Command {
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if !text.starts_with('/') {
            return Command::Range(text.to_string());
        }
        let Some(captures) = COMMAND_REGEX.captures(text) else {
            return Command::Unknown(text.to_string());
        };
        let argument = captures
            .get(2)
            .and_then(|m| m.as_str().split_whitespace().next())
            .map(str::to_string);
        match &captures[1] {
            "start" => Command::Start,
            "articles" => Command::Articles,
            "custom" => Command::Custom,
            "abstract" => Command::Abstract(argument),
            name => Command::Unknown(name.to_string()),
        }
    }
}

/// Chat front-end for one journal's listing.
pub struct Bot<S> {
    source: S,
    settings: Settings,
}

impl<S: ArticleSource> Bot<S> {
    pub fn new(source: S, settings: Settings) -> Self {
        Self { source, settings }
    }

    /// Answer a chat message, using the local date for relative windows.
    pub async fn handle_text(&self, text: &str) -> Vec<Reply> {
        self.handle(Command::parse(text), Local::now().date_naive())
            .await
    }

    /// Answer `command` as of `today`.
    pub async fn handle(&self, command: Command, today: NaiveDate) -> Vec<Reply> {
        match command {
            Command::Start => vec![self.welcome()],
            Command::Articles => self.recent_articles(today).await,
            Command::Custom => vec![range_prompt()],
            Command::Abstract(None) => vec![abstract_usage()],
            Command::Abstract(Some(pmid)) => self.abstract_of(&pmid, today).await,
            Command::Range(text) => self.articles_in_range(&text).await,
            Command::Unknown(name) => {
                tracing::debug!(command = %name, "ignoring unknown command");
                Vec::new()
            }
        }
    }

    fn welcome(&self) -> Reply {
        Reply::plain(format!(
            "🔬 {} Bot\n\n\
             Available Commands:\n\
             • /articles - Get articles from the {}\n\
             • /custom - Get articles from custom date range\n\
             • /abstract <PMID> - Get abstract for specific article\n\n\
             Example: /abstract {EXAMPLE_PMID}",
            self.settings.journal_name,
            self.window_name()
        ))
    }

    /// "past month" for the default 30-day window, "past N days" otherwise.
    fn window_name(&self) -> String {
        match self.settings.days_back {
            30 => "past month".to_string(),
            1 => "past day".to_string(),
            n => format!("past {n} days"),
        }
    }

    fn default_window(&self, today: NaiveDate) -> DateRange {
        DateRange::past_days(today, self.settings.days_back)
    }

    /// Fetch `range`, treating a failed request as an empty listing.
    async fn fetch_or_empty(&self, range: &DateRange) -> Vec<ArticleRecord> {
        match self.source.fetch(range).await {
            Ok(records) => records,
            Err(err) => {
                tracing::error!(range = %range.label(), "Error fetching PubMed data: {err}");
                Vec::new()
            }
        }
    }

    async fn recent_articles(&self, today: NaiveDate) -> Vec<Reply> {
        let window = self.window_name();
        let mut replies = vec![Reply::plain(format!("🔄 Fetching articles from the {window}..."))];
        let records = self.fetch_or_empty(&self.default_window(today)).await;
        if records.is_empty() {
            replies.push(Reply::plain(format!("❌ No articles found for the {window}.")));
        } else {
            replies.extend(self.listing(&title_case(&window), &records));
        }
        replies
    }

    async fn articles_in_range(&self, text: &str) -> Vec<Reply> {
        let range = match DateRange::parse(text) {
            Ok(range) => range,
            Err(err) => {
                tracing::debug!("rejected date range {text:?}: {err}");
                return vec![range_error(&err)];
            }
        };
        let (start, end) = (range.start, range.end);
        let mut replies = vec![Reply::plain(format!(
            "🔄 Fetching articles from {start} to {end}..."
        ))];
        let records = self.fetch_or_empty(&range).await;
        if records.is_empty() {
            replies.push(Reply::plain(format!(
                "❌ No articles found for the period {start} to {end}."
            )));
        } else {
            replies.extend(self.listing(&range.label(), &records));
        }
        replies
    }

    /// Look `pmid` up among the articles of the default window.
    async fn abstract_of(&self, pmid: &str, today: NaiveDate) -> Vec<Reply> {
        let mut replies = vec![Reply::plain(format!("🔄 Fetching abstract for PMID {pmid}..."))];
        let records = self.fetch_or_empty(&self.default_window(today)).await;
        let reply = match records.iter().find(|r| r.identifier == pmid) {
            None => Reply::plain(format!(
                "❌ Article with PMID {pmid} not found in recent articles."
            )),
            Some(record) => abstract_message(record, &self.settings.publisher_doi_base)
                .unwrap_or_else(|| {
                    Reply::plain(format!("❌ No abstract available for PMID {pmid}."))
                }),
        };
        replies.push(reply);
        replies
    }

    fn listing(&self, label: &str, records: &[ArticleRecord]) -> Vec<Reply> {
        listing_messages(
            &self.settings.journal_name,
            label,
            records,
            self.settings.articles_per_message,
        )
    }
}

fn range_prompt() -> Reply {
    Reply::plain(
        "📅 Custom Date Range\n\n\
         Please send the date range in the format:\n\
         YYYY-MM-DD to YYYY-MM-DD\n\n\
         Example: 2025-01-01 to 2025-01-31",
    )
}

fn abstract_usage() -> Reply {
    Reply::plain(format!(
        "📄 Abstract Lookup\n\n\
         Please provide a PMID to get the abstract.\n\
         Usage: /abstract <PMID>\n\n\
         Example: /abstract {EXAMPLE_PMID}"
    ))
}

fn range_error(err: &CommandError) -> Reply {
    let problem = match err {
        CommandError::RangeFormat => "Invalid format",
        CommandError::BadDate { .. } => "Invalid date format",
    };
    Reply::plain(format!(
        "❌ {problem}. Please use: YYYY-MM-DD to YYYY-MM-DD\n\
         Example: 2025-01-01 to 2025-01-31"
    ))
}

fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
