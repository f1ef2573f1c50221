//! Search term parsing for venue, artist and show search

use chrono::{DateTime, Duration, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use super::datetime::parse_day_month_year;
use super::ValidationError;

/// Tokens shaped like `d/m/Y`. Other text containing `/` is part of a name.
static DATE_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").expect("invalid date token regex"));

/// Venue and artist search: `city, state` or part of a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTerm {
    /// Exact, case-insensitive match on both city and state.
    Location { city: String, state: String },
    /// Case-insensitive substring of the name.
    Name(String),
}

impl SearchTerm {
    pub fn parse(term: &str) -> Self {
        match term.split_once(',') {
            Some((city, state)) => Self::Location {
                city: city.trim().to_owned(),
                state: state.trim().to_owned(),
            },
            None => Self::Name(term.trim().to_owned()),
        }
    }
}

/// Show search: an optional `d/m/Y` day and an optional name fragment.
/// When both are given a show must satisfy both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowSearch {
    pub day: Option<NaiveDate>,
    /// Matched against artist name or venue name.
    pub name: Option<String>,
}

impl ShowSearch {
    pub fn parse(term: &str) -> Result<Self, ValidationError> {
        let mut day = None;
        let mut words = Vec::new();

        for token in term.split_whitespace() {
            if DATE_TOKEN_RE.is_match(token) {
                let date = parse_day_month_year(token).ok_or(ValidationError::InvalidFormat {
                    field: "search_term",
                    reason: "dates must be written day/month/year",
                })?;
                if day.replace(date).is_some() {
                    return Err(ValidationError::InvalidFormat {
                        field: "search_term",
                        reason: "only one date may be searched at a time",
                    });
                }
            } else {
                words.push(token);
            }
        }

        let name = if words.is_empty() {
            None
        } else {
            Some(words.join(" "))
        };

        Ok(Self { day, name })
    }

    /// Half-open UTC window `[day, day + 1)` for the date part.
    pub fn window(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        self.day.map(|day| {
            let start = day.and_time(chrono::NaiveTime::MIN).and_utc();
            (start, start + Duration::days(1))
        })
    }
}

/// Build an `ILIKE` pattern matching `term` anywhere, with the wildcard
/// characters of the term itself escaped.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
