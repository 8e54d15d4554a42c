use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// The `{success, message, data}` body every form route answers with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl Envelope {
    pub fn success(message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Write `payload` as a JSON response. The status is committed even when
/// serialization fails; the failure is logged and the body left empty.
pub fn write<T: Serialize>(status: StatusCode, payload: &T) -> Response {
    let content_type = [(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    )];

    match serde_json::to_vec(payload) {
        Ok(body) => (status, content_type, body).into_response(),
        Err(e) => {
            tracing::error!("Failed to serialize response body: {e}");
            (status, content_type).into_response()
        }
    }
}
