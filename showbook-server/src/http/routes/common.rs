//! View payloads shared by the venue, artist and show routes

use axum::extract::rejection::FormRejection;
use axum::Form;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::models::{format_datetime, DateFormat, FormChoices, FormFields, ValidationError};

/// `search_term` field posted by the search boxes
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub search_term: String,
}

/// Search result page
#[derive(Debug, Serialize)]
pub struct SearchResults<T> {
    pub search_term: String,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    pub fn new(search_term: String, data: Vec<T>) -> Self {
        Self {
            search_term,
            count: data.len(),
            data,
        }
    }
}

/// Input form page, empty or pre-populated
#[derive(Debug, Serialize)]
pub struct FormPage<F> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub form: F,
    pub choices: FormChoices,
}

impl<F> FormPage<F> {
    pub fn new(form: F) -> Self {
        Self {
            id: None,
            form,
            choices: FormChoices::default(),
        }
    }

    pub fn edit(id: i32, form: F) -> Self {
        Self {
            id: Some(id),
            form,
            choices: FormChoices::default(),
        }
    }
}

/// Acknowledgment returned by DELETE
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub id: i32,
}

/// Start time as RFC 3339 plus the medium and full display strings.
#[derive(Debug, Clone, Serialize)]
pub struct StartTime {
    pub start_time: String,
    pub start_time_display: String,
    pub start_time_full: String,
}

impl From<DateTime<Utc>> for StartTime {
    fn from(t: DateTime<Utc>) -> Self {
        Self {
            start_time: t.to_rfc3339(),
            start_time_display: format_datetime(&t, DateFormat::Medium),
            start_time_full: format_datetime(&t, DateFormat::Full),
        }
    }
}

/// Search box submission; a body that is not a form is a bad request.
pub fn search_params(
    body: Result<Form<SearchParams>, FormRejection>,
) -> Result<SearchParams, ApiError> {
    body.map(|Form(params)| params).map_err(|_| not_a_form())
}

/// Decode a urlencoded body into ordered pairs, keeping repeated keys.
pub fn form_fields(
    body: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<FormFields, ApiError> {
    let Form(pairs) = body.map_err(|_| not_a_form())?;
    Ok(FormFields::new(pairs))
}

fn not_a_form() -> ApiError {
    ApiError::Validation(ValidationError::InvalidFormat {
        field: "body",
        reason: "expected an application/x-www-form-urlencoded form",
    })
}

/// Turn a failed delete into a response: a constraint violation means the
/// record is still booked into shows.
pub fn delete_error(resource: &'static str, id: i32, error: crate::db::DbError) -> ApiError {
    match error {
        crate::db::DbError::ConstraintViolated { .. } => ApiError::Conflict {
            message: format!("{} '{}' still has shows and cannot be deleted", resource, id),
        },
        other => ApiError::from(other),
    }
}
