//! Date windows and the listing URL for one journal.

use crate::config::Settings;
use crate::error::CommandError;
use crate::regex::Regex;
use chrono::{Days, NaiveDate};
use itertools::Itertools;
use std::sync::LazyLock;

static RANGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?s)(.*?) to (.*)$").unwrap());

/// Inclusive range of publication dates to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The `days` days up to and including `today`.
    pub fn past_days(today: NaiveDate, days: u32) -> Self {
        let start = today
            .checked_sub_days(Days::new(days.into()))
            .unwrap_or(NaiveDate::MIN);
        Self::new(start, today)
    }

    /// Parse chat input of the form `YYYY-MM-DD to YYYY-MM-DD`.
    ///
    /// The order of the two dates is not checked.
    pub fn parse(text: &str) -> Result<Self, CommandError> {
        let captures = RANGE_REGEX
            .captures(text.trim())
            .ok_or(CommandError::RangeFormat)?;
        let start = parse_date(captures[1].trim())?;
        let end = parse_date(captures[2].trim())?;
        Ok(Self::new(start, end))
    }

    /// Human-readable form, e.g. `2025-01-01 to 2025-01-31`.
    pub fn label(&self) -> String {
        format!("{} to {}", self.start, self.end)
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| CommandError::BadDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Listing URL for the configured journal over `range`, sorted by date and
/// requesting the MEDLINE export format.
pub fn search_url(settings: &Settings, range: &DateRange) -> String {
    let journal = settings
        .journal_term
        .split_whitespace()
        .map(urlencoding::encode)
        .join("+");
    format!(
        "{}?term=%22{}%22%5BJournal%5D&filter=dates.{}-{}&sort=date&format=pubmed&size={}",
        settings.base_url,
        journal,
        url_date(range.start),
        url_date(range.end),
        settings.max_articles
    )
}

fn url_date(date: NaiveDate) -> String {
    urlencoding::encode(&date.format("%Y/%m/%d").to_string()).into_owned()
}
