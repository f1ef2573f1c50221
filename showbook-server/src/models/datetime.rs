//! Parsing and display of show start times

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Layout used when pre-filling the start time of a new show.
pub const FORM_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Accepted naive layouts, tried in order. Naive times are taken as UTC.
const NAIVE_LAYOUTS: &[&str] = &[
    FORM_LAYOUT,
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse a submitted start time: RFC 3339, or one of the naive layouts.
pub fn parse_start_time(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(value, layout).ok())
        .map(|naive| naive.and_utc())
}

/// Parse a day/month/year date such as `25/12/2024`.
pub fn parse_day_month_year(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%d/%m/%Y").ok()
}

/// Display styles for start times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    /// `Monday May, 21, 2035 at 9:30PM`
    Full,
    /// `Mon 05, 21, 2035 9:30PM`
    #[default]
    Medium,
}

impl DateFormat {
    fn layout(self) -> &'static str {
        match self {
            Self::Full => "%A %B, %-d, %Y at %-I:%M%p",
            Self::Medium => "%a %m, %d, %Y %-I:%M%p",
        }
    }
}

pub fn format_datetime(value: &DateTime<Utc>, format: DateFormat) -> String {
    value.format(format.layout()).to_string()
}
