use super::cors;
use super::handlers::{self, entries};
use super::state::AppState;
use crate::models::EntityKind;
use axum::routing::{any, get, post};
use axum::{Extension, Router};
use std::sync::Arc;

pub fn api_routes() -> Router<Arc<AppState>> {
    let mut router = Router::new()
        .route(
            "/api/form",
            post(handlers::contact::submit).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/translate",
            post(handlers::translate::translate).fallback(handlers::method_not_allowed),
        );

    for kind in EntityKind::ALL {
        router = router.merge(entry_routes(kind));
    }

    router.layer(cors::layer())
}

/// `/api/{kind}` and `/api/{kind}/:id`, with the kind handed to the
/// handlers as an extension.
fn entry_routes(kind: EntityKind) -> Router<Arc<AppState>> {
    let base = kind.api_path();
    Router::new()
        .route(
            base,
            get(entries::list)
                .post(entries::create)
                .fallback(handlers::method_not_allowed),
        )
        .route(&format!("{}/", base), any(entries::missing_id))
        .route(
            &format!("{}/:id", base),
            get(entries::get)
                .post(entries::update)
                .put(entries::update)
                .delete(entries::delete)
                .fallback(handlers::method_not_allowed),
        )
        .layer(Extension(kind))
}
