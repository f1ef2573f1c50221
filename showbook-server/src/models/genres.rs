//! Genre list stored on venues and artists
//!
//! Stored as a `TEXT[]` column, so individual names never need to be
//! split out of a delimited string.

use serde::{Deserialize, Serialize};

use super::choices::canonical_genre;
use super::ValidationError;

/// Validated, de-duplicated list of genre names in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Genres(Vec<String>);

impl Genres {
    /// Validate submitted genre names against the genre choice list.
    ///
    /// Blank entries are skipped and names are normalized to their
    /// canonical spelling; a repeated genre is kept once.
    pub fn parse<I, S>(values: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut genres: Vec<String> = Vec::new();

        for value in values {
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }
            let genre = canonical_genre(value).ok_or_else(|| ValidationError::InvalidVariant {
                field: "genres",
                value: value.to_owned(),
            })?;
            if !genres.iter().any(|g| g == genre) {
                genres.push(genre.to_owned());
            }
        }

        Ok(Self(genres))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_and_drops_duplicates() {
        let genres = Genres::parse(["Jazz", "folk", "Jazz", ""]).unwrap();
        assert_eq!(genres.as_slice(), ["Jazz", "Folk"]);
    }

    #[test]
    fn rejects_unknown_genre() {
        let err = Genres::parse(["Jazz", "Yodel"]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidVariant {
                field: "genres",
                value: "Yodel".into()
            }
        );
    }

    #[test]
    fn serializes_as_plain_array() {
        let genres = Genres::parse(["Blues"]).unwrap();
        assert_eq!(serde_json::to_string(&genres).unwrap(), r#"["Blues"]"#);
    }
}
