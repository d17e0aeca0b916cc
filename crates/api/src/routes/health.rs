//! Liveness endpoint, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when storage answered, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Stored tier lists; absent when storage is unreachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_lists: Option<i64>,
}

impl HealthReport {
    fn from_count(tier_lists: Option<i64>) -> Self {
        let db_healthy = tier_lists.is_some();
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            tier_lists,
        }
    }
}

/// GET /health -- counts tier lists, which also checks storage is reachable.
async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let count = state.store.count().await;
    if let Some(message) = count.message() {
        tracing::warn!(error = %message, "Health check could not reach storage");
    }
    Json(HealthReport::from_count(count.payload().copied()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
