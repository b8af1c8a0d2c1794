use romi_core::FieldPath;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// A failed field rule, scoped to the field (or group) it judges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{field}: {message}")]
pub struct FieldError {
    #[ts(type = "string")]
    pub field: FieldPath,
    pub message: String,
}

impl FieldError {
    pub fn new(field: FieldPath, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("report has {} validation error(s)", .0.len())]
    Invalid(Vec<FieldError>),
}

impl From<Vec<FieldError>> for SchemaError {
    fn from(errors: Vec<FieldError>) -> Self {
        SchemaError::Invalid(errors)
    }
}
