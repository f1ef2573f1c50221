//! Artist endpoints

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
use crate::db::repos::{Artist, ArtistDetail, ArtistRepo, ArtistShow, ArtistSummary};
use crate::http::error::ApiError;
use crate::http::extractors::RecordId;
use crate::http::server::AppState;
use crate::models::{ArtistForm, SearchTerm};

#[derive(Serialize)]
pub struct ArtistsPage {
    pub artists: Vec<ArtistSummary>,
}

/// Show on an artist page
#[derive(Serialize)]
pub struct ArtistShowResponse {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    #[serde(flatten)]
    pub start: StartTime,
}

impl From<ArtistShow> for ArtistShowResponse {
    fn from(s: ArtistShow) -> Self {
        Self {
            venue_id: s.venue_id,
            venue_name: s.venue_name,
            venue_image_link: s.venue_image_link,
            start: StartTime::from(s.start_time),
        }
    }
}

/// Artist detail page
#[derive(Serialize)]
pub struct ArtistResponse {
    #[serde(flatten)]
    pub artist: Artist,
    pub past_shows: Vec<ArtistShowResponse>,
    pub upcoming_shows: Vec<ArtistShowResponse>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl From<ArtistDetail> for ArtistResponse {
    fn from(d: ArtistDetail) -> Self {
        Self {
            artist: d.artist,
            past_shows_count: d.past_shows.len(),
            upcoming_shows_count: d.upcoming_shows.len(),
            past_shows: d.past_shows.into_iter().map(Into::into).collect(),
            upcoming_shows: d.upcoming_shows.into_iter().map(Into::into).collect(),
        }
    }
}

/// GET /artists
async fn list_artists(State(state): State<Arc<AppState>>) -> Result<Json<ArtistsPage>, ApiError> {
    let artists = ArtistRepo::new(&state.pool).list(Utc::now()).await?;
    Ok(Json(ArtistsPage { artists }))
}

/// POST /artists/search
async fn search_artists(
    State(state): State<Arc<AppState>>,
    params: Result<Form<SearchParams>, FormRejection>,
) -> Result<Json<SearchResults<ArtistSummary>>, ApiError> {
    let params = search_params(params)?;
    let term = SearchTerm::parse(&params.search_term);
    let artists = ArtistRepo::new(&state.pool)
        .search(&term, Utc::now())
        .await?;

    Ok(Json(SearchResults::new(params.search_term, artists)))
}

/// GET /artists/{id}
async fn show_artist(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<ArtistResponse>, ApiError> {
    let detail = ArtistRepo::new(&state.pool).detail(id, Utc::now()).await?;
    Ok(Json(ArtistResponse::from(detail)))
}

/// GET /artists/create
async fn new_artist_form() -> Json<FormPage<ArtistForm>> {
    Json(FormPage::new(ArtistForm::default()))
}

/// POST /artists/create
async fn create_artist(
    State(state): State<Arc<AppState>>,
    body: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Redirect, ApiError> {
    let form = ArtistForm::from_fields(&form_fields(body)?);
    let input = form
        .validate()
        .map_err(|errors| ApiError::invalid_form(errors, &form))?;

    let id = ArtistRepo::new(&state.pool).create(&input).await?;
    tracing::info!(artist_id = id, name = %input.name, "Artist was successfully listed");

    Ok(Redirect::to("/"))
}

/// GET /artists/{id}/edit
async fn edit_artist_form(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<FormPage<ArtistForm>>, ApiError> {
    let artist = ArtistRepo::new(&state.pool).get(id).await?;
    Ok(Json(FormPage::edit(id, ArtistForm::from(artist))))
}

/// POST /artists/{id}/edit
async fn update_artist(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
    body: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Redirect, ApiError> {
    let repo = ArtistRepo::new(&state.pool);
    repo.get(id).await?;

    let form = ArtistForm::from_fields(&form_fields(body)?);
    let input = form
        .validate()
        .map_err(|errors| ApiError::invalid_form(errors, &form))?;

    repo.update(id, &input).await?;
    tracing::info!(artist_id = id, "Artist was successfully updated");

    Ok(Redirect::to(&format!("/artists/{}", id)))
}

/// DELETE /artists/{id}
async fn delete_artist(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<DeleteResponse>, ApiError> {
    ArtistRepo::new(&state.pool)
        .delete(id)
        .await
        .map_err(|e| delete_error("artist", id, e))?;
    tracing::info!(artist_id = id, "Artist was deleted");

    Ok(Json(DeleteResponse { success: true, id }))
}

/// Artist routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/search", post(search_artists))
        .route("/artists/create", get(new_artist_form).post(create_artist))
        .route("/artists/{id}", get(show_artist).delete(delete_artist))
        .route("/artists/{id}/edit", get(edit_artist_form).post(update_artist))
}
