//! Query layer error type

use sqlx::error::ErrorKind;

/// Closed set of failures a repository call can report.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// Foreign key, unique, not-null or check constraint rejected the write.
    #[error("constraint violated: {constraint}")]
    ConstraintViolated { constraint: String },

    /// Any other storage failure (connectivity, pool timeout, bad SQL).
    #[error("storage unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),
}

impl DbError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            let violated = matches!(
                db.kind(),
                ErrorKind::ForeignKeyViolation
                    | ErrorKind::UniqueViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::CheckViolation
            );
            if violated {
                return Self::ConstraintViolated {
                    constraint: db.constraint().unwrap_or("unknown").to_owned(),
                };
            }
        }
        Self::Unavailable(e)
    }
}
