//! Route definitions for tier lists.

use axum::routing::get;
use axum::Router;

use crate::handlers::tier_list;
use crate::state::AppState;

/// Routes mounted at `/tierlists`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tier_list::list).post(tier_list::create))
        .route(
            "/{id}",
            get(tier_list::get_by_id)
                .put(tier_list::update)
                .delete(tier_list::delete),
        )
}
