//! Repository for the `tier_lists` table.

use sqlx::types::Json;
use sqlx::PgPool;
use tierlist_core::tier_list::TierList;
use tierlist_core::types::DbId;

use crate::models::tier_list::TierListRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, image_source, tiers";

/// Provides CRUD operations for tier lists.
///
/// Write methods return every row the statement touched so callers can
/// verify the affected row count.
pub struct TierListRepo;

impl TierListRepo {
    /// Insert a fully built tier list, returning the inserted rows.
    pub async fn insert(pool: &PgPool, list: &TierList) -> Result<Vec<TierListRow>, sqlx::Error> {
        let query = format!(
            "INSERT INTO tier_lists (id, title, description, image_source, tiers)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TierListRow>(&query)
            .bind(list.id)
            .bind(&list.title)
            .bind(&list.description)
            .bind(&list.image_source)
            .bind(Json(&list.tiers))
            .fetch_all(pool)
            .await
    }

    /// List every tier list. Row order is whatever the database returns.
    pub async fn list(pool: &PgPool) -> Result<Vec<TierListRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tier_lists");
        sqlx::query_as::<_, TierListRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Count stored tier lists.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tier_lists")
            .fetch_one(pool)
            .await
    }

    /// Find a tier list by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TierListRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tier_lists WHERE id = $1");
        sqlx::query_as::<_, TierListRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace title, description, image source and the whole tier tree.
    ///
    /// The row is addressed by `id`; `list.id` is not consulted. Returns
    /// the updated rows (empty when no row matched).
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        list: &TierList,
    ) -> Result<Vec<TierListRow>, sqlx::Error> {
        let query = format!(
            "UPDATE tier_lists SET
                title = $2,
                description = $3,
                image_source = $4,
                tiers = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TierListRow>(&query)
            .bind(id)
            .bind(&list.title)
            .bind(&list.description)
            .bind(&list.image_source)
            .bind(Json(&list.tiers))
            .fetch_all(pool)
            .await
    }

    /// Permanently delete a tier list. Returns the number of rows removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tier_lists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
