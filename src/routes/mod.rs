pub mod forms;

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::{post, MethodRouter};
use axum::Router;

use crate::models::FormKind;
use crate::state::SharedState;

pub fn form_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/v1/visitor-form", form_route(FormKind::Visitor))
        .route("/api/visitors", form_route(FormKind::Visitor))
        .route("/api/v1/user-form", form_route(FormKind::User))
        .route("/api/v1/manager-form", form_route(FormKind::Manager))
}

/// POST runs the pipeline for `kind`; every other method gets the 405 envelope.
fn form_route(kind: FormKind) -> MethodRouter<SharedState> {
    post(move |State(state): State<SharedState>, body: Bytes| async move {
        forms::submit(&state, kind, &body).await
    })
    .fallback(forms::method_not_allowed)
}
