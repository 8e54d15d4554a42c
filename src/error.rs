use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::FormKind;
use crate::response::{self, Envelope};

/// A required field, or a field that became required, was left empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingField(&'static str),
    MissingConditionalField {
        field: &'static str,
        condition: String,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingField(field) => write!(f, "missing required field: {field}"),
            ValidationError::MissingConditionalField { field, condition } => {
                write!(f, "missing required field: {field} (required when {condition})")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Every way a form request can end without a saved record.
#[derive(Debug)]
pub enum FormError {
    MethodNotAllowed,
    Decode(serde_json::Error),
    Validation(ValidationError),
    Persistence { kind: FormKind, source: sqlx::Error },
}

impl FormError {
    pub fn status(&self) -> StatusCode {
        match self {
            FormError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            FormError::Decode(_) | FormError::Validation(_) => StatusCode::BAD_REQUEST,
            FormError::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::MethodNotAllowed => write!(f, "method not allowed"),
            FormError::Decode(_) => write!(f, "invalid JSON body"),
            FormError::Validation(err) => write!(f, "{err}"),
            FormError::Persistence { kind, .. } => write!(f, "failed to save {kind} data"),
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormError::MethodNotAllowed => None,
            FormError::Decode(err) => Some(err),
            FormError::Validation(err) => Some(err),
            FormError::Persistence { source, .. } => Some(source),
        }
    }
}

impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        match &self {
            FormError::Decode(err) => tracing::debug!("Rejected form body: {err}"),
            FormError::Persistence { kind, source } => {
                tracing::error!("Error inserting {kind}: {source}");
            }
            _ => {}
        }

        response::write(self.status(), &Envelope::failure(self.to_string()))
    }
}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        FormError::Decode(err)
    }
}

impl From<ValidationError> for FormError {
    fn from(err: ValidationError) -> Self {
        FormError::Validation(err)
    }
}
