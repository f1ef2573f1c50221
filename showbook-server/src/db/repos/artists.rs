//! Artist repository
//!
//! Same shape as the venue repository, with a flat listing instead of
//! location groups.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use super::split_upcoming;
use crate::db::DbError;
use crate::models::search::contains_pattern;
use crate::models::{ArtistForm, ArtistInput, SearchTerm};

/// Artist record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Artist with its upcoming show count
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ArtistSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// A show by an artist, joined to the hosting venue
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ArtistShow {
    pub show_id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// Artist with its shows split around `now`
#[derive(Debug, Clone)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows: Vec<ArtistShow>,
}

impl From<Artist> for ArtistForm {
    fn from(a: Artist) -> Self {
        Self {
            name: a.name,
            city: a.city,
            state: a.state,
            phone: a.phone.unwrap_or_default(),
            genres: a.genres,
            image_link: a.image_link.unwrap_or_default(),
            facebook_link: a.facebook_link.unwrap_or_default(),
            website_link: a.website_link.unwrap_or_default(),
            seeking_venue: a.seeking_venue,
            seeking_description: a.seeking_description.unwrap_or_default(),
        }
    }
}

/// Artist repository
pub struct ArtistRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ArtistRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All artists in insertion order with upcoming show counts.
    pub async fn list(&self, now: DateTime<Utc>) -> Result<Vec<ArtistSummary>, DbError> {
        let artists = sqlx::query_as::<_, ArtistSummary>(
            r#"
            SELECT
                a.id,
                a.name,
                COUNT(s.id) FILTER (WHERE s.start_time >= $1) AS num_upcoming_shows
            FROM artists a
            LEFT JOIN shows s ON s.artist_id = a.id
            GROUP BY a.id
            ORDER BY a.id
            "#,
        )
        .bind(now)
        .fetch_all(self.pool)
        .await?;

        Ok(artists)
    }

    /// Artists matching `term`, each with its upcoming show count.
    pub async fn search(
        &self,
        term: &SearchTerm,
        now: DateTime<Utc>,
    ) -> Result<Vec<ArtistSummary>, DbError> {
        let mut query: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT a.id, a.name, COUNT(s.id) FILTER (WHERE s.start_time >= ",
        );
        query.push_bind(now);
        query.push(") AS num_upcoming_shows FROM artists a LEFT JOIN shows s ON s.artist_id = a.id WHERE ");

        match term {
            SearchTerm::Location { city, state } => {
                query.push("LOWER(a.city) = LOWER(");
                query.push_bind(city.as_str());
                query.push(") AND LOWER(a.state) = LOWER(");
                query.push_bind(state.as_str());
                query.push(")");
            }
            SearchTerm::Name(name) => {
                query.push("a.name ILIKE ");
                query.push_bind(contains_pattern(name));
            }
        }

        query.push(" GROUP BY a.id, a.name ORDER BY a.id");

        let artists = query
            .build_query_as::<ArtistSummary>()
            .fetch_all(self.pool)
            .await?;

        Ok(artists)
    }

    /// Get a single artist by id.
    pub async fn get(&self, id: i32) -> Result<Artist, DbError> {
        sqlx::query_as::<_, Artist>(
            r#"
            SELECT id, name, city, state, phone, genres, image_link,
                   facebook_link, website_link, seeking_venue, seeking_description
            FROM artists
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("artist", id))
    }

    /// Artist with its shows, split into upcoming and past around `now`.
    pub async fn detail(&self, id: i32, now: DateTime<Utc>) -> Result<ArtistDetail, DbError> {
        let artist = self.get(id).await?;

        let shows = sqlx::query_as::<_, ArtistShow>(
            r#"
            SELECT
                s.id AS show_id,
                v.id AS venue_id,
                v.name AS venue_name,
                v.image_link AS venue_image_link,
                s.start_time
            FROM shows s
            JOIN venues v ON v.id = s.venue_id
            WHERE s.artist_id = $1
            ORDER BY s.start_time, s.id
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        let (upcoming_shows, past_shows) = split_upcoming(shows, &now, |s| &s.start_time);

        Ok(ArtistDetail {
            artist,
            upcoming_shows,
            past_shows,
        })
    }

    /// Insert an artist, returning its id.
    pub async fn create(&self, input: &ArtistInput) -> Result<i32, DbError> {
        let mut tx = self.pool.begin().await?;

        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO artists (
                name, city, state, phone, genres, image_link, facebook_link,
                website_link, seeking_venue, seeking_description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.phone)
        .bind(input.genres.as_slice())
        .bind(&input.image_link)
        .bind(&input.facebook_link)
        .bind(&input.website_link)
        .bind(input.seeking_venue)
        .bind(&input.seeking_description)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(id)
    }

    /// Replace every mutable field of an existing artist.
    pub async fn update(&self, id: i32, input: &ArtistInput) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let updated: Option<(i32,)> = sqlx::query_as(
            r#"
            UPDATE artists SET
                name = $2,
                city = $3,
                state = $4,
                phone = $5,
                genres = $6,
                image_link = $7,
                facebook_link = $8,
                website_link = $9,
                seeking_venue = $10,
                seeking_description = $11
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.phone)
        .bind(input.genres.as_slice())
        .bind(&input.image_link)
        .bind(&input.facebook_link)
        .bind(&input.website_link)
        .bind(input.seeking_venue)
        .bind(&input.seeking_description)
        .fetch_optional(&mut *tx)
        .await?;

        if updated.is_none() {
            return Err(DbError::not_found("artist", id));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Delete an artist. Fails with `ConstraintViolated` while shows still
    /// reference it.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("artist", id));
        }

        tx.commit().await?;
        Ok(())
    }
}
