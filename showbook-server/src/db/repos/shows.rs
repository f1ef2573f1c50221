//! Show repository
//!
//! Shows are listed joined to both their venue and artist, ordered by
//! start time. They are created but never edited or deleted here.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use crate::db::DbError;
use crate::models::search::contains_pattern;
use crate::models::{ShowInput, ShowSearch};

/// Default foreign key constraint names of the `shows` table.
const VENUE_FKEY: &str = "shows_venue_id_fkey";
const ARTIST_FKEY: &str = "shows_artist_id_fkey";

const LISTING_SELECT: &str = r#"
    SELECT
        s.id,
        s.start_time,
        v.id AS venue_id,
        v.name AS venue_name,
        v.image_link AS venue_image_link,
        a.id AS artist_id,
        a.name AS artist_name,
        a.image_link AS artist_image_link
    FROM shows s
    JOIN venues v ON v.id = s.venue_id
    JOIN artists a ON a.id = s.artist_id
"#;

/// Show joined to its venue and artist for display
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ShowListing {
    pub id: i32,
    pub start_time: DateTime<Utc>,
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
}

/// Show repository
pub struct ShowRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ShowRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All shows, earliest first.
    pub async fn list(&self) -> Result<Vec<ShowListing>, DbError> {
        let mut query: QueryBuilder<Postgres> = QueryBuilder::new(LISTING_SELECT);
        query.push(" ORDER BY s.start_time, s.id");

        let shows = query
            .build_query_as::<ShowListing>()
            .fetch_all(self.pool)
            .await?;

        Ok(shows)
    }

    /// Shows on the searched day AND whose artist or venue name contains
    /// the searched text; either part may be absent.
    pub async fn search(&self, search: &ShowSearch) -> Result<Vec<ShowListing>, DbError> {
        let mut query: QueryBuilder<Postgres> = QueryBuilder::new(LISTING_SELECT);
        query.push(" WHERE TRUE");

        if let Some((start, end)) = search.window() {
            query.push(" AND s.start_time >= ");
            query.push_bind(start);
            query.push(" AND s.start_time < ");
            query.push_bind(end);
        }

        if let Some(name) = &search.name {
            let pattern = contains_pattern(name);
            query.push(" AND (a.name ILIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR v.name ILIKE ");
            query.push_bind(pattern);
            query.push(")");
        }

        query.push(" ORDER BY s.start_time, s.id");

        let shows = query
            .build_query_as::<ShowListing>()
            .fetch_all(self.pool)
            .await?;

        Ok(shows)
    }

    /// Insert a show, returning its id. A missing venue or artist is
    /// reported as `NotFound` for that resource.
    pub async fn create(&self, input: &ShowInput) -> Result<i32, DbError> {
        let mut tx = self.pool.begin().await?;

        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO shows (start_time, venue_id, artist_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(input.start_time)
        .bind(input.venue_id)
        .bind(input.artist_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| missing_reference(DbError::from(e), input))?;

        tx.commit().await?;
        Ok(id)
    }
}

fn missing_reference(error: DbError, input: &ShowInput) -> DbError {
    match error {
        DbError::ConstraintViolated { constraint } if constraint == VENUE_FKEY => {
            DbError::not_found("venue", input.venue_id)
        }
        DbError::ConstraintViolated { constraint } if constraint == ARTIST_FKEY => {
            DbError::not_found("artist", input.artist_id)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ShowInput {
        ShowInput {
            artist_id: 4,
            venue_id: 1,
            start_time: Utc::now(),
        }
    }

    #[test]
    fn foreign_key_violations_name_the_missing_record() {
        let err = missing_reference(
            DbError::ConstraintViolated {
                constraint: VENUE_FKEY.into(),
            },
            &input(),
        );
        assert!(matches!(err, DbError::NotFound { resource: "venue", ref id } if id == "1"));

        let err = missing_reference(
            DbError::ConstraintViolated {
                constraint: ARTIST_FKEY.into(),
            },
            &input(),
        );
        assert!(matches!(err, DbError::NotFound { resource: "artist", ref id } if id == "4"));
    }

    #[test]
    fn other_errors_pass_through() {
        let err = missing_reference(
            DbError::ConstraintViolated {
                constraint: "something_else".into(),
            },
            &input(),
        );
        assert!(matches!(err, DbError::ConstraintViolated { .. }));
    }
}
