use tierlist_db::store::TierListStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the store wraps the pooled connection handle.
#[derive(Clone)]
pub struct AppState {
    /// Tier list store over the process-wide connection pool.
    pub store: TierListStore,
}
