//! Show form: books an artist into a venue at a start time

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::datetime::{parse_start_time, FORM_LAYOUT};
use super::form::FormFields;
use super::{FormErrors, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

/// Show fields that passed validation. Whether the referenced venue and
/// artist exist is checked when the show is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowInput {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime<Utc>,
}

impl ShowForm {
    /// Empty form with the start time pre-filled to `now`.
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            start_time: now.format(FORM_LAYOUT).to_string(),
            ..Default::default()
        }
    }

    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            artist_id: fields.text("artist_id"),
            venue_id: fields.text("venue_id"),
            start_time: fields.text("start_time"),
        }
    }

    pub fn validate(&self) -> Result<ShowInput, FormErrors> {
        let mut errors = FormErrors::new();

        let artist_id = errors.check(parse_id("artist_id", &self.artist_id));
        let venue_id = errors.check(parse_id("venue_id", &self.venue_id));
        let start_time = errors.check(parse_time(&self.start_time));

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) if errors.is_empty() => {
                Ok(ShowInput {
                    artist_id,
                    venue_id,
                    start_time,
                })
            }
            _ => Err(errors),
        }
    }
}

fn parse_id(field: &'static str, value: &str) -> Result<i32, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    value
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or(ValidationError::InvalidFormat {
            field,
            reason: "must be a positive whole number",
        })
}

fn parse_time(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field: "start_time" });
    }
    parse_start_time(value).ok_or(ValidationError::InvalidFormat {
        field: "start_time",
        reason: "must look like 2035-04-01 20:00:00",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn valid_show() {
        let form = ShowForm {
            artist_id: "4".into(),
            venue_id: " 1 ".into(),
            start_time: "2035-04-01 20:00:00".into(),
        };
        let input = form.validate().unwrap();
        assert_eq!(input.artist_id, 4);
        assert_eq!(input.venue_id, 1);
        assert_eq!(
            input.start_time,
            Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap()
        );
    }

    #[test]
    fn every_bad_field_is_reported() {
        let form = ShowForm {
            artist_id: "".into(),
            venue_id: "abc".into(),
            start_time: "soon".into(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.has("artist_id"));
        assert!(errors.has("venue_id"));
        assert!(errors.has("start_time"));
    }

    #[test]
    fn rejects_non_positive_ids() {
        let form = ShowForm {
            artist_id: "0".into(),
            venue_id: "-3".into(),
            start_time: "2035-04-01 20:00:00".into(),
        };
        assert_eq!(form.validate().unwrap_err().len(), 2);
    }

    #[test]
    fn new_form_prefills_start_time() {
        let now = Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(ShowForm::starting_at(now).start_time, "2030-01-02 03:04:05");
    }
}
