//! Venue endpoints

use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::Redirect;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use chrono::Utc;
use serde::Serialize;

use super::common::{
    delete_error, form_fields, search_params, DeleteResponse, FormPage, SearchParams,
    SearchResults, StartTime,
};
use crate::db::repos::{Venue, VenueArea, VenueDetail, VenueRepo, VenueShow, VenueSummary};
use crate::http::error::ApiError;
use crate::http::extractors::RecordId;
use crate::http::server::AppState;
use crate::models::{SearchTerm, VenueForm};

/// Venue listing grouped by location
#[derive(Serialize)]
pub struct VenuesPage {
    pub areas: Vec<VenueArea>,
}

/// Show on a venue page
#[derive(Serialize)]
pub struct VenueShowResponse {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    #[serde(flatten)]
    pub start: StartTime,
}

impl From<VenueShow> for VenueShowResponse {
    fn from(s: VenueShow) -> Self {
        Self {
            artist_id: s.artist_id,
            artist_name: s.artist_name,
            artist_image_link: s.artist_image_link,
            start: StartTime::from(s.start_time),
        }
    }
}

/// Venue detail page
#[derive(Serialize)]
pub struct VenueResponse {
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<VenueShowResponse>,
    pub upcoming_shows: Vec<VenueShowResponse>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl From<VenueDetail> for VenueResponse {
    fn from(d: VenueDetail) -> Self {
        Self {
            venue: d.venue,
            past_shows_count: d.past_shows.len(),
            upcoming_shows_count: d.upcoming_shows.len(),
            past_shows: d.past_shows.into_iter().map(Into::into).collect(),
            upcoming_shows: d.upcoming_shows.into_iter().map(Into::into).collect(),
        }
    }
}

/// GET /venues - venues grouped by city and state
async fn list_venues(State(state): State<Arc<AppState>>) -> Result<Json<VenuesPage>, ApiError> {
    let areas = VenueRepo::new(&state.pool).list_by_area(Utc::now()).await?;
    Ok(Json(VenuesPage { areas }))
}

/// POST /venues/search - by name, or by "city, state"
async fn search_venues(
    State(state): State<Arc<AppState>>,
    params: Result<Form<SearchParams>, FormRejection>,
) -> Result<Json<SearchResults<VenueSummary>>, ApiError> {
    let params = search_params(params)?;
    let term = SearchTerm::parse(&params.search_term);
    let venues = VenueRepo::new(&state.pool)
        .search(&term, Utc::now())
        .await?;

    Ok(Json(SearchResults::new(params.search_term, venues)))
}

/// GET /venues/{id} - venue with past and upcoming shows
async fn show_venue(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<VenueResponse>, ApiError> {
    let detail = VenueRepo::new(&state.pool).detail(id, Utc::now()).await?;
    Ok(Json(VenueResponse::from(detail)))
}

/// GET /venues/create - empty venue form
async fn new_venue_form() -> Json<FormPage<VenueForm>> {
    Json(FormPage::new(VenueForm::default()))
}

/// POST /venues/create - list a new venue
async fn create_venue(
    State(state): State<Arc<AppState>>,
    body: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Redirect, ApiError> {
    let form = VenueForm::from_fields(&form_fields(body)?);
    let input = form
        .validate()
        .map_err(|errors| ApiError::invalid_form(errors, &form))?;

    let id = VenueRepo::new(&state.pool).create(&input).await?;
    tracing::info!(venue_id = id, name = %input.name, "Venue was successfully listed");

    Ok(Redirect::to("/"))
}

/// GET /venues/{id}/edit - venue form filled from the stored record
async fn edit_venue_form(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<FormPage<VenueForm>>, ApiError> {
    let venue = VenueRepo::new(&state.pool).get(id).await?;
    Ok(Json(FormPage::edit(id, VenueForm::from(venue))))
}

/// POST /venues/{id}/edit - replace the venue's fields
async fn update_venue(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
    body: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Redirect, ApiError> {
    let repo = VenueRepo::new(&state.pool);
    repo.get(id).await?;

    let form = VenueForm::from_fields(&form_fields(body)?);
    let input = form
        .validate()
        .map_err(|errors| ApiError::invalid_form(errors, &form))?;

    repo.update(id, &input).await?;
    tracing::info!(venue_id = id, "Venue was successfully updated");

    Ok(Redirect::to(&format!("/venues/{}", id)))
}

/// DELETE /venues/{id}
async fn delete_venue(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<DeleteResponse>, ApiError> {
    VenueRepo::new(&state.pool)
        .delete(id)
        .await
        .map_err(|e| delete_error("venue", id, e))?;
    tracing::info!(venue_id = id, "Venue was deleted");

    Ok(Json(DeleteResponse { success: true, id }))
}

/// Venue routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/search", post(search_venues))
        .route("/venues/create", get(new_venue_form).post(create_venue))
        .route("/venues/{id}", get(show_venue).delete(delete_venue))
        .route("/venues/{id}/edit", get(edit_venue_form).post(update_venue))
}
