//! Validation error types

use std::fmt;

use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};

/// Validation error for a single form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format (e.g., URL, phone, date)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Value is not one of the allowed choices
    InvalidVariant { field: &'static str, value: String },

    /// Value refers to a record that does not exist
    UnknownReference { field: &'static str, id: i32 },
}

impl ValidationError {
    /// Name of the form field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field }
            | Self::TooLong { field, .. }
            | Self::InvalidFormat { field, .. }
            | Self::InvalidVariant { field, .. }
            | Self::UnknownReference { field, .. } => *field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::InvalidVariant { field, value } => {
                write!(f, "invalid {} value: '{}'", field, value)
            }
            Self::UnknownReference { field, id } => {
                write!(f, "{}: no record with id {}", field, id)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ValidationError", 2)?;
        s.serialize_field("field", self.field())?;
        s.serialize_field("message", &self.to_string())?;
        s.end()
    }
}

/// All field errors collected while validating one form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(Vec<ValidationError>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// Record the error side of `result`, passing the value through.
    pub fn check<T>(&mut self, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.push(e);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether any error was recorded against `field`.
    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field() == field)
    }

    /// `Ok(value)` when nothing was recorded, otherwise the collected errors.
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.0.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl From<ValidationError> for FormErrors {
    fn from(e: ValidationError) -> Self {
        Self(vec![e])
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for FormErrors {}

impl Serialize for FormErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for e in &self.0 {
            seq.serialize_element(e)?;
        }
        seq.end()
    }
}
