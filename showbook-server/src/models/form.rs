//! Raw form submissions and per-field checks
//!
//! Submissions arrive as `application/x-www-form-urlencoded` pairs so that
//! multi-select fields (`genres=Jazz&genres=Folk`) keep every value.

use once_cell::sync::Lazy;
use regex::Regex;

use super::choices::canonical_state;
use super::ValidationError;

/// Column width shared by city, state, address, phone and facebook link.
pub const MAX_SHORT_LEN: usize = 120;

/// Column width of image links.
pub const MAX_IMAGE_LINK_LEN: usize = 500;

/// Loose phone pattern: digits with common separators, 7 to 20 characters.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 ().-]{5,18}[0-9]$").expect("invalid phone regex"));

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("invalid url regex"));

/// Decoded form body, in submission order.
#[derive(Debug, Clone, Default)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// First value submitted for `name`, trimmed; empty when absent.
    pub fn text(&self, name: &str) -> String {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.trim().to_owned())
            .unwrap_or_default()
    }

    /// Every value submitted for `name`.
    pub fn all(&self, name: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
            .collect()
    }

    /// Checkbox semantics: present with a truthy value.
    pub fn flag(&self, name: &str) -> bool {
        self.0.iter().any(|(k, v)| {
            k == name
                && matches!(
                    v.trim().to_ascii_lowercase().as_str(),
                    "y" | "yes" | "on" | "true" | "1"
                )
        })
    }
}

impl From<Vec<(String, String)>> for FormFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::new(pairs)
    }
}

/// Non-empty text no longer than `max` characters.
pub fn required(field: &'static str, value: &str, max: Option<usize>) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    check_len(field, value, max)?;
    Ok(value.to_owned())
}

/// Optional text: empty becomes `None`.
pub fn optional(
    field: &'static str,
    value: &str,
    max: Option<usize>,
) -> Result<Option<String>, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    check_len(field, value, max)?;
    Ok(Some(value.to_owned()))
}

/// Optional http(s) link.
pub fn optional_url(
    field: &'static str,
    value: &str,
    max: Option<usize>,
) -> Result<Option<String>, ValidationError> {
    let value = optional(field, value, max)?;
    match value {
        Some(v) if !URL_RE.is_match(&v) => Err(ValidationError::InvalidFormat {
            field,
            reason: "must be an http or https URL",
        }),
        other => Ok(other),
    }
}

/// Optional phone number.
pub fn optional_phone(value: &str) -> Result<Option<String>, ValidationError> {
    let value = optional("phone", value, Some(MAX_SHORT_LEN))?;
    match value {
        Some(v) if !PHONE_RE.is_match(&v) => Err(ValidationError::InvalidFormat {
            field: "phone",
            reason: "must be a phone number such as 123-456-7890",
        }),
        other => Ok(other),
    }
}

/// Required US state code, normalized to upper case.
pub fn state(value: &str) -> Result<String, ValidationError> {
    let value = required("state", value, Some(MAX_SHORT_LEN))?;
    canonical_state(&value)
        .map(str::to_owned)
        .ok_or(ValidationError::InvalidVariant {
            field: "state",
            value,
        })
}

fn check_len(field: &'static str, value: &str, max: Option<usize>) -> Result<(), ValidationError> {
    match max {
        Some(max) if value.chars().count() > max => Err(ValidationError::TooLong { field, max }),
        _ => Ok(()),
    }
}
