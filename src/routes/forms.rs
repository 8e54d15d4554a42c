use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::FormError;
use crate::models::FormKind;
use crate::response::{self, Envelope};
use crate::state::AppState;
use crate::submission::pipeline;

pub async fn submit(state: &AppState, kind: FormKind, body: &[u8]) -> Response {
    match pipeline::run(state, kind, body).await {
        Ok(id) => response::write(
            StatusCode::CREATED,
            &Envelope::success(format!("{kind} data saved"), json!({ "id": id })),
        ),
        Err(e) => e.into_response(),
    }
}

pub async fn method_not_allowed() -> FormError {
    FormError::MethodNotAllowed
}
