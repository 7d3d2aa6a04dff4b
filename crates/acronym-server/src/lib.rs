//! Acronym Server
//!
//! A small HTML front-end over the acronym store: a search form, an add
//! form, and a static asset mount. Each request reloads `acronyms.yaml`
//! from disk; writes are serialized by the store's writer lock.

pub mod config;
pub mod error;
pub mod handlers;
pub mod templates;

pub use config::ServerConfig;
pub use error::ServerError;
pub use templates::Templates;

use acronym_core::AcronymStore;
use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<AcronymStore>,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(store: AcronymStore, templates: Templates) -> Self {
        Self {
            store: Arc::new(store),
            templates: Arc::new(templates),
        }
    }
}

/// Build the application router
pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(handlers::acronyms::index))
        .route("/search", get(handlers::acronyms::search))
        .route("/add", post(handlers::acronyms::add))
        .route("/health", get(handlers::health))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve `acronyms.yaml` from the working directory until the process stops
pub async fn serve(config: ServerConfig) -> Result<()> {
    let templates =
        Templates::load(&config.templates_dir).context("Failed to load page templates")?;

    let store = AcronymStore::in_working_dir();
    info!("Acronym store: {}", store.path().display());
    info!("Static files directory: {}", config.static_dir.display());

    let app = router(AppState::new(store, templates), &config.static_dir);

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app(dir: &Path) -> Router {
        let state = AppState::new(
            AcronymStore::new(dir.join("acronyms.yaml")),
            Templates::builtin().unwrap(),
        );
        router(state, &dir.join("static"))
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();

        let response = app(dir.path())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"OK");
    }

    #[tokio::test]
    async fn test_static_mount() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("static")).unwrap();
        std::fs::write(dir.path().join("static/style.css"), "body {}").unwrap();

        let app = app(dir.path());

        let found = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/static/style.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(found.status(), StatusCode::OK);
        let body = to_bytes(found.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"body {}");

        let missing = app
            .oneshot(
                Request::builder()
                    .uri("/static/missing.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let dir = tempfile::tempdir().unwrap();

        let response = app(dir.path())
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
