//! Venue repository
//!
//! - list_by_area: one LEFT JOIN query, grouped by (city, state) in Rust
//! - detail: venue row plus its shows joined to artists
//! - create/update/delete: one transaction each

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use super::split_upcoming;
use crate::db::DbError;
use crate::models::search::contains_pattern;
use crate::models::{SearchTerm, VenueForm, VenueInput};

/// Venue record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Venue with its upcoming show count, for listings and search results
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Venues sharing one (city, state) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// A show at a venue, joined to the performing artist
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct VenueShow {
    pub show_id: i32,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// Venue with its shows split around `now`
#[derive(Debug, Clone)]
pub struct VenueDetail {
    pub venue: Venue,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows: Vec<VenueShow>,
}

#[derive(FromRow)]
struct AreaRow {
    id: i32,
    name: String,
    city: String,
    state: String,
    num_upcoming_shows: i64,
}

impl From<Venue> for VenueForm {
    fn from(v: Venue) -> Self {
        Self {
            name: v.name,
            city: v.city,
            state: v.state,
            address: v.address,
            phone: v.phone.unwrap_or_default(),
            image_link: v.image_link.unwrap_or_default(),
            genres: v.genres,
            facebook_link: v.facebook_link.unwrap_or_default(),
            website_link: v.website_link.unwrap_or_default(),
            seeking_talent: v.seeking_talent,
            seeking_description: v.seeking_description.unwrap_or_default(),
        }
    }
}

/// Group rows (already ordered by id) by exact (city, state) pair. Areas
/// appear in order of their first venue.
fn group_by_area(rows: Vec<AreaRow>) -> Vec<VenueArea> {
    let mut areas: Vec<VenueArea> = Vec::new();

    for row in rows {
        let summary = VenueSummary {
            id: row.id,
            name: row.name,
            num_upcoming_shows: row.num_upcoming_shows,
        };
        match areas
            .iter_mut()
            .find(|a| a.city == row.city && a.state == row.state)
        {
            Some(area) => area.venues.push(summary),
            None => areas.push(VenueArea {
                city: row.city,
                state: row.state,
                venues: vec![summary],
            }),
        }
    }

    areas
}

/// Venue repository
pub struct VenueRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> VenueRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All venues grouped by location, each with its upcoming show count.
    pub async fn list_by_area(&self, now: DateTime<Utc>) -> Result<Vec<VenueArea>, DbError> {
        let rows: Vec<AreaRow> = sqlx::query_as(
            r#"
            SELECT
                v.id,
                v.name,
                v.city,
                v.state,
                COUNT(s.id) FILTER (WHERE s.start_time >= $1) AS num_upcoming_shows
            FROM venues v
            LEFT JOIN shows s ON s.venue_id = v.id
            GROUP BY v.id
            ORDER BY v.id
            "#,
        )
        .bind(now)
        .fetch_all(self.pool)
        .await?;

        Ok(group_by_area(rows))
    }

    /// Venues matching `term`, each with its upcoming show count.
    pub async fn search(
        &self,
        term: &SearchTerm,
        now: DateTime<Utc>,
    ) -> Result<Vec<VenueSummary>, DbError> {
        let mut query: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT v.id, v.name, COUNT(s.id) FILTER (WHERE s.start_time >= ",
        );
        query.push_bind(now);
        query.push(") AS num_upcoming_shows FROM venues v LEFT JOIN shows s ON s.venue_id = v.id WHERE ");

        match term {
            SearchTerm::Location { city, state } => {
                query.push("LOWER(v.city) = LOWER(");
                query.push_bind(city.as_str());
                query.push(") AND LOWER(v.state) = LOWER(");
                query.push_bind(state.as_str());
                query.push(")");
            }
            SearchTerm::Name(name) => {
                query.push("v.name ILIKE ");
                query.push_bind(contains_pattern(name));
            }
        }

        query.push(" GROUP BY v.id, v.name ORDER BY v.id");

        let venues = query
            .build_query_as::<VenueSummary>()
            .fetch_all(self.pool)
            .await?;

        Ok(venues)
    }

    /// Get a single venue by id.
    pub async fn get(&self, id: i32) -> Result<Venue, DbError> {
        sqlx::query_as::<_, Venue>(
            r#"
            SELECT id, name, city, state, address, phone, image_link,
                   facebook_link, website_link, genres, seeking_talent,
                   seeking_description
            FROM venues
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("venue", id))
    }

    /// Venue with its shows, split into upcoming and past around `now`.
    pub async fn detail(&self, id: i32, now: DateTime<Utc>) -> Result<VenueDetail, DbError> {
        let venue = self.get(id).await?;

        let shows: Vec<VenueShow> = sqlx::query_as(
            r#"
            SELECT
                s.id AS show_id,
                a.id AS artist_id,
                a.name AS artist_name,
                a.image_link AS artist_image_link,
                s.start_time
            FROM shows s
            JOIN artists a ON a.id = s.artist_id
            WHERE s.venue_id = $1
            ORDER BY s.start_time, s.id
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        let (upcoming_shows, past_shows) = split_upcoming(shows, &now, |s| &s.start_time);

        Ok(VenueDetail {
            venue,
            upcoming_shows,
            past_shows,
        })
    }

    /// Insert a venue, returning its id.
    pub async fn create(&self, input: &VenueInput) -> Result<i32, DbError> {
        let mut tx = self.pool.begin().await?;

        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO venues (
                name, city, state, address, phone, image_link, facebook_link,
                website_link, genres, seeking_talent, seeking_description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            "#,
        )
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.address)
        .bind(&input.phone)
        .bind(&input.image_link)
        .bind(&input.facebook_link)
        .bind(&input.website_link)
        .bind(input.genres.as_slice())
        .bind(input.seeking_talent)
        .bind(&input.seeking_description)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(id)
    }

    /// Replace every mutable field of an existing venue.
    pub async fn update(&self, id: i32, input: &VenueInput) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let updated: Option<(i32,)> = sqlx::query_as(
            r#"
            UPDATE venues SET
                name = $2,
                city = $3,
                state = $4,
                address = $5,
                phone = $6,
                image_link = $7,
                facebook_link = $8,
                website_link = $9,
                genres = $10,
                seeking_talent = $11,
                seeking_description = $12
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.address)
        .bind(&input.phone)
        .bind(&input.image_link)
        .bind(&input.facebook_link)
        .bind(&input.website_link)
        .bind(input.genres.as_slice())
        .bind(input.seeking_talent)
        .bind(&input.seeking_description)
        .fetch_optional(&mut *tx)
        .await?;

        if updated.is_none() {
            return Err(DbError::not_found("venue", id));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Delete a venue. Fails with `ConstraintViolated` while shows still
    /// reference it.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("venue", id));
        }

        tx.commit().await?;
        Ok(())
    }
}
