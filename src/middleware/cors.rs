use axum::extract::{Request, State};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_MAX_AGE,
};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Adds CORS headers to every response. Preflight `OPTIONS` requests are
/// answered here with 204 and never reach a handler.
pub async fn cors(State(origin): State<HeaderValue>, req: Request, next: Next) -> Response {
    let preflight = req.method() == Method::OPTIONS;

    let mut response = if preflight {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(req).await
    };

    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    if preflight {
        headers.insert(ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static("86400"));
    }

    response
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use axum::body::Body;
    use axum::routing::post;
    use axum::Router;
    use tower::ServiceExt;

    use super::*;

    fn app(calls: Arc<AtomicUsize>) -> Router {
        Router::new()
            .route(
                "/api/v1/manager-form",
                post(move || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    StatusCode::CREATED
                }),
            )
            .layer(axum::middleware::from_fn_with_state(
                HeaderValue::from_static("https://lab.example"),
                cors,
            ))
    }

    fn request(method: Method) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .method(method)
            .uri("/api/v1/manager-form")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn preflight_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let resp = app(calls.clone()).oneshot(request(Method::OPTIONS)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(resp.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "https://lab.example");
        assert_eq!(resp.headers()[ACCESS_CONTROL_ALLOW_METHODS], "POST, OPTIONS");
        assert_eq!(resp.headers()[ACCESS_CONTROL_MAX_AGE], "86400");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn regular_requests_get_headers() {
        let calls = Arc::new(AtomicUsize::new(0));
        let resp = app(calls.clone()).oneshot(request(Method::POST)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(resp.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "https://lab.example");
        assert_eq!(resp.headers()[ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
        assert!(!resp.headers().contains_key(ACCESS_CONTROL_MAX_AGE));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
