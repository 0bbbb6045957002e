use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS for the API. Every `OPTIONS` request is answered by the
/// layer itself with an empty 200 and never reaches a handler.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
}
