//! HTTP transport.
//!
//! Exposes the library over two JSON endpoints, `/movie` and `/tv`, each
//! taking an optional `search` query parameter.

pub mod errors;
pub mod handlers;

use crate::core::MediaLibrary;
use crate::models::config::Config;
use crate::Result;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub library: Arc<MediaLibrary>,
}

impl AppState {
    pub fn new(library: MediaLibrary) -> Self {
        Self {
            library: Arc::new(library),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/movie", get(handlers::movie_handler))
        .route("/tv", get(handlers::tv_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until the process exits.
pub async fn serve(config: Config) -> Result<()> {
    for dir in [&config.library.movie_dir, &config.library.tv_dir] {
        if let Err(e) = crate::utils::fs::ensure_directory(dir) {
            tracing::warn!("Library root unavailable, queries will fail: {}", e);
        }
    }

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    let state = AppState::new(MediaLibrary::new(config.library));

    tracing::info!("Server starting on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;

    Ok(())
}
