//! Show endpoints

use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::{Query, State};
use axum::response::Redirect;
use axum::routing::get;
use axum::{Form, Json, Router};
use chrono::Utc;
use serde::Serialize;

use super::common::{
    form_fields, search_params, FormPage, SearchParams, SearchResults, StartTime,
};
use crate::db::repos::{ShowListing, ShowRepo};
use crate::db::DbError;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{FormErrors, ShowForm, ShowSearch, ValidationError};

/// Show with its venue and artist
#[derive(Serialize)]
pub struct ShowResponse {
    pub id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    #[serde(flatten)]
    pub start: StartTime,
}

impl From<ShowListing> for ShowResponse {
    fn from(s: ShowListing) -> Self {
        Self {
            id: s.id,
            venue_id: s.venue_id,
            venue_name: s.venue_name,
            venue_image_link: s.venue_image_link,
            artist_id: s.artist_id,
            artist_name: s.artist_name,
            artist_image_link: s.artist_image_link,
            start: StartTime::from(s.start_time),
        }
    }
}

#[derive(Serialize)]
pub struct ShowsPage {
    pub shows: Vec<ShowResponse>,
}

/// GET /shows
async fn list_shows(State(state): State<Arc<AppState>>) -> Result<Json<ShowsPage>, ApiError> {
    let shows = ShowRepo::new(&state.pool).list().await?;
    Ok(Json(ShowsPage {
        shows: shows.into_iter().map(Into::into).collect(),
    }))
}

/// GET /shows/search?search_term=...
async fn search_shows_query(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResults<ShowResponse>>, ApiError> {
    search_shows(&state, params).await
}

/// POST /shows/search
async fn search_shows_form(
    State(state): State<Arc<AppState>>,
    params: Result<Form<SearchParams>, FormRejection>,
) -> Result<Json<SearchResults<ShowResponse>>, ApiError> {
    let params = search_params(params)?;
    search_shows(&state, params).await
}

/// Shows on a `dd/mm/yyyy` day and/or whose artist or venue name matches.
async fn search_shows(
    state: &AppState,
    params: SearchParams,
) -> Result<Json<SearchResults<ShowResponse>>, ApiError> {
    let search = ShowSearch::parse(&params.search_term)?;
    let shows = ShowRepo::new(&state.pool).search(&search).await?;

    Ok(Json(SearchResults::new(
        params.search_term,
        shows.into_iter().map(Into::into).collect(),
    )))
}

/// GET /shows/create - form with the start time set to now
async fn new_show_form() -> Json<FormPage<ShowForm>> {
    Json(FormPage::new(ShowForm::starting_at(Utc::now())))
}

/// POST /shows/create
async fn create_show(
    State(state): State<Arc<AppState>>,
    body: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Redirect, ApiError> {
    let form = ShowForm::from_fields(&form_fields(body)?);
    let input = form
        .validate()
        .map_err(|errors| ApiError::invalid_form(errors, &form))?;

    let id = ShowRepo::new(&state.pool)
        .create(&input)
        .await
        .map_err(|e| match unknown_reference(&e, input.venue_id, input.artist_id) {
            Some(error) => ApiError::invalid_form(FormErrors::from(error), &form),
            None => ApiError::from(e),
        })?;
    tracing::info!(
        show_id = id,
        venue_id = input.venue_id,
        artist_id = input.artist_id,
        "Show was successfully listed"
    );

    Ok(Redirect::to("/"))
}

/// A show naming a venue or artist that does not exist is a form error on
/// that field.
fn unknown_reference(error: &DbError, venue_id: i32, artist_id: i32) -> Option<ValidationError> {
    match error {
        DbError::NotFound {
            resource: "venue", ..
        } => Some(ValidationError::UnknownReference {
            field: "venue_id",
            id: venue_id,
        }),
        DbError::NotFound {
            resource: "artist", ..
        } => Some(ValidationError::UnknownReference {
            field: "artist_id",
            id: artist_id,
        }),
        _ => None,
    }
}

/// Show routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/shows", get(list_shows))
        .route("/shows/search", get(search_shows_query).post(search_shows_form))
        .route("/shows/create", get(new_show_form).post(create_show))
}
