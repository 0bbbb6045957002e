mod cors;
mod error;
mod extractors;
mod handlers;
mod routes;
mod state;

pub use error::{AppError, AppResult};
pub use state::AppState;

use crate::{Config, Database};
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

/// The full application: API routes plus the static site fallback.
pub fn router(state: Arc<AppState>) -> Result<Router> {
    let body_limit = state.config.media.max_upload_bytes()?;

    Ok(Router::new()
        .merge(routes::api_routes())
        .fallback(handlers::site::serve_site)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

pub async fn serve(config: Config, db: Database, addr: &str) -> Result<()> {
    let state = Arc::new(AppState::new(config, db)?);
    tracing::info!("Serving static files from {}", state.site_root.display());

    let app = router(state)?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server started on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
