//! Date range used by session queries
//!
//! Query strings carry dates as `YYYY-Mon-DD` (`2022-Sep-19`). A missing
//! start falls back to [`DEFAULT_START_DATE`], a missing end to today. Both
//! ends are inclusive.

use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;

/// Layout of dates on the command line and in query strings
pub const DATE_LAYOUT: &str = "%Y-%b-%d";

/// Start of the default range, in [`DATE_LAYOUT`]
pub const DEFAULT_START_DATE: &str = "2022-Sep-19";

/// Error raised when a supplied date does not follow [`DATE_LAYOUT`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field} '{value}': expected a date like 2022-Sep-19")]
pub struct DateParseError {
    pub field: &'static str,
    pub value: String,
}

/// Closed interval of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Resolve optional start/end strings into a concrete range.
    ///
    /// Empty strings count as missing.
    pub fn resolve(
        start: Option<&str>,
        end: Option<&str>,
        today: NaiveDate,
    ) -> Result<Self, DateParseError> {
        let start = match non_empty(start) {
            Some(value) => parse_date("start-date", value)?,
            None => default_start_date(),
        };
        let end = match non_empty(end) {
            Some(value) => parse_date("end-date", value)?,
            None => today,
        };
        Ok(Self { start, end })
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..={}",
            self.start.format(DATE_LAYOUT),
            self.end.format(DATE_LAYOUT)
        )
    }
}

/// `start-date` / `end-date` query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DateRangeQuery {
    #[serde(rename = "start-date", default)]
    pub start_date: Option<String>,
    #[serde(rename = "end-date", default)]
    pub end_date: Option<String>,
}

impl DateRangeQuery {
    pub fn resolve(&self, today: NaiveDate) -> Result<DateRange, DateParseError> {
        DateRange::resolve(self.start_date.as_deref(), self.end_date.as_deref(), today)
    }
}

/// The fixed start of the default range
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 9, 19).unwrap_or_default()
}

/// Parse a date in [`DATE_LAYOUT`]
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_LAYOUT).map_err(|_| DateParseError {
        field,
        value: value.to_string(),
    })
}

/// Render a date in [`DATE_LAYOUT`]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_LAYOUT).to_string()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
