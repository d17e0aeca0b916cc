//! Route tree.

pub mod health;
pub mod tier_list;

use axum::Router;

use crate::state::AppState;

/// All versioned API routes, mounted under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/tierlists", tier_list::router())
}
