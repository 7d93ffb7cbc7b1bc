//! DSReview Server - HTTP surface for browsing and labeling
//!
//! Provides:
//! - Question listing with filters and pagination
//! - Answers, version comparisons and statistics per dataset
//! - Label listing and submission
//! - Dataset reload without restart

pub mod error;
pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use dsreview_store::ReviewConfig;
use std::sync::Arc;

pub use error::ApiError;
pub use state::{AppState, SharedState};

/// Create the API router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/api/questions", get(routes::list_questions))
        .route("/api/questions/:id/answers", get(routes::question_answers))
        .route(
            "/api/questions/:id/versions/:version_id/diff",
            get(routes::version_diff),
        )
        .route("/api/stats", get(routes::stats))
        .route(
            "/api/labels",
            get(routes::list_labels).post(routes::submit_label),
        )
        .route("/api/labels/progress", get(routes::label_progress))
        .route("/api/reload", post(routes::reload))
        .with_state(state)
}

/// Load the dataset and serve until the process is stopped
///
/// # Errors
///
/// Fails when the dataset cannot be loaded or the address cannot be bound
pub async fn serve(config: ReviewConfig) -> anyhow::Result<()> {
    let bind = config.bind.clone();
    let state = Arc::new(AppState::load(config)?);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(addr = %listener.local_addr()?, "review server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
