//! Handlers for the `/tierlists` resource.
//!
//! Each handler makes exactly one store call and returns its outcome as an
//! [`Envelope`]. Extractor rejections surface as `400` failure envelopes.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use tierlist_core::tier_list::{TierList, TierListInfo, TierListUpdate};
use tierlist_core::types::DbId;

use crate::error::AppResult;
use crate::response::Envelope;
use crate::state::AppState;

/// POST /api/v1/tierlists
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<TierListInfo>, JsonRejection>,
) -> AppResult<Envelope<TierList>> {
    let Json(info) = body?;
    tracing::debug!(title = %info.title, "Creating tier list");
    Ok(state.store.create(info).await.into())
}

/// GET /api/v1/tierlists
pub async fn list(State(state): State<AppState>) -> Envelope<Vec<TierList>> {
    let outcome = state.store.list().await;
    if let Some(lists) = outcome.payload() {
        tracing::debug!(count = lists.len(), "Listed tier lists");
    }
    outcome.into()
}

/// GET /api/v1/tierlists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Envelope<TierList>> {
    let Path(id) = id?;
    Ok(state.store.get(id).await.into())
}

/// PUT /api/v1/tierlists/{id}
///
/// Full replacement of title, description, image source and tiers. The body
/// needs no `id`; one that is sent is ignored in favour of the path id.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    body: Result<Json<TierListUpdate>, JsonRejection>,
) -> AppResult<Envelope<TierList>> {
    let Path(id) = id?;
    let Json(update) = body?;
    tracing::debug!(%id, tiers = update.tiers.len(), "Replacing tier list");
    Ok(state.store.update(id, update.into_tier_list(id)).await.into())
}

/// DELETE /api/v1/tierlists/{id}
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Envelope<()>> {
    let Path(id) = id?;
    tracing::debug!(%id, "Deleting tier list");
    Ok(state.store.delete(id).await.into())
}
