//! Outcome-returning CRUD over tier lists.
//!
//! [`TierListStore`] is the boundary between persistence and its callers:
//! validation, not-found and storage failures are all folded into an
//! [`Outcome`] here and never escape as `Err`.

use tierlist_core::error::CoreError;
use tierlist_core::outcome::Outcome;
use tierlist_core::tier_list::{TierList, TierListInfo, ENTITY_NAME};
use tierlist_core::types::DbId;

use crate::models::tier_list::TierListRow;
use crate::repositories::TierListRepo;
use crate::DbPool;

/// Store owning a handle to the shared connection pool.
///
/// Cloning is cheap; every clone shares the same pool.
#[derive(Clone)]
pub struct TierListStore {
    pool: DbPool,
}

impl TierListStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Create a tier list with a fresh id and the default tiers.
    ///
    /// An invalid title fails before any query is issued.
    pub async fn create(&self, info: TierListInfo) -> Outcome<TierList> {
        let list = match TierList::new(info) {
            Ok(list) => list,
            Err(err) => {
                tracing::debug!(error = %err, "Rejected tier list creation");
                return err.into();
            }
        };

        match TierListRepo::insert(&self.pool, &list).await {
            Ok(rows) => match expect_one_row(rows, "insert") {
                Ok(row) => {
                    tracing::info!(id = %row.id, "Created tier list");
                    Outcome::created(row.into())
                }
                Err(err) => err.into(),
            },
            Err(err) => storage_failure(err, "insert"),
        }
    }

    /// Fetch every stored tier list.
    pub async fn list(&self) -> Outcome<Vec<TierList>> {
        match TierListRepo::list(&self.pool).await {
            Ok(rows) => Outcome::ok(rows.into_iter().map(TierList::from).collect()),
            Err(err) => storage_failure(err, "list"),
        }
    }

    /// Number of stored tier lists.
    pub async fn count(&self) -> Outcome<i64> {
        match TierListRepo::count(&self.pool).await {
            Ok(count) => Outcome::ok(count),
            Err(err) => storage_failure(err, "count"),
        }
    }

    /// Fetch one tier list by id.
    pub async fn get(&self, id: DbId) -> Outcome<TierList> {
        match TierListRepo::find_by_id(&self.pool, id).await {
            Ok(Some(row)) => Outcome::ok(row.into()),
            Ok(None) => not_found(id).into(),
            Err(err) => storage_failure(err, "get"),
        }
    }

    /// Replace the stored tier list addressed by `id` with `list`.
    ///
    /// The id carried by `list` is ignored; the stored identity is kept.
    pub async fn update(&self, id: DbId, list: TierList) -> Outcome<TierList> {
        let list = match list.normalized() {
            Ok(list) => list,
            Err(err) => {
                tracing::debug!(%id, error = %err, "Rejected tier list update");
                return err.into();
            }
        };

        match TierListRepo::replace(&self.pool, id, &list).await {
            Ok(rows) if rows.is_empty() => not_found(id).into(),
            Ok(rows) => match expect_one_row(rows, "update") {
                Ok(row) => {
                    tracing::info!(%id, "Updated tier list");
                    Outcome::ok(row.into())
                }
                Err(err) => err.into(),
            },
            Err(err) => storage_failure(err, "update"),
        }
    }

    /// Delete the tier list addressed by `id`.
    pub async fn delete(&self, id: DbId) -> Outcome<()> {
        match TierListRepo::delete(&self.pool, id).await {
            Ok(0) => not_found(id).into(),
            Ok(1) => {
                tracing::info!(%id, "Deleted tier list");
                Outcome::no_content()
            }
            Ok(count) => {
                tracing::error!(%id, count, "Delete affected an unexpected number of rows");
                CoreError::Internal(format!("Delete affected {count} rows, expected 1")).into()
            }
            Err(err) => storage_failure(err, "delete"),
        }
    }
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: ENTITY_NAME,
        id,
    }
}

/// Require a write to have touched exactly one row.
fn expect_one_row(mut rows: Vec<TierListRow>, op: &'static str) -> Result<TierListRow, CoreError> {
    if rows.len() != 1 {
        tracing::error!(op, count = rows.len(), "Write affected an unexpected number of rows");
        return Err(CoreError::Internal(format!(
            "Database {op} affected {} rows, expected 1",
            rows.len()
        )));
    }
    rows.pop()
        .ok_or_else(|| CoreError::Internal(format!("Database {op} returned no row")))
}

fn storage_failure<T>(err: sqlx::Error, op: &'static str) -> Outcome<T> {
    tracing::error!(op, error = %err, "Tier list storage error");
    CoreError::Internal(err.to_string()).into()
}
