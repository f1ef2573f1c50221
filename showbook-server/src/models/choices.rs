//! Fixed choice lists offered by the venue and artist forms

use serde::Serialize;

/// Genres a venue or artist may list.
pub const GENRE_CHOICES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// US state and district codes accepted in the `state` field.
pub const STATE_CHOICES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Case-insensitive lookup returning the canonical spelling of a genre.
pub fn canonical_genre(value: &str) -> Option<&'static str> {
    GENRE_CHOICES
        .iter()
        .copied()
        .find(|g| g.eq_ignore_ascii_case(value.trim()))
}

/// Case-insensitive lookup returning the canonical (upper-case) state code.
pub fn canonical_state(value: &str) -> Option<&'static str> {
    STATE_CHOICES
        .iter()
        .copied()
        .find(|s| s.eq_ignore_ascii_case(value.trim()))
}

/// Choice lists sent along with empty and pre-populated forms.
#[derive(Debug, Clone, Serialize)]
pub struct FormChoices {
    pub genres: &'static [&'static str],
    pub states: &'static [&'static str],
}

impl Default for FormChoices {
    fn default() -> Self {
        Self {
            genres: GENRE_CHOICES,
            states: STATE_CHOICES,
        }
    }
}
