//! Tier list row model.

use sqlx::types::Json;
use sqlx::FromRow;
use tierlist_core::tier_list::{Tier, TierList};
use tierlist_core::types::DbId;

/// A row from the `tier_lists` table.
///
/// `tiers` is the JSONB document holding the ordered tier/item tree.
#[derive(Debug, Clone, FromRow)]
pub struct TierListRow {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub image_source: Option<String>,
    pub tiers: Json<Vec<Tier>>,
}

impl From<TierListRow> for TierList {
    fn from(row: TierListRow) -> Self {
        TierList {
            id: row.id,
            title: row.title,
            description: row.description,
            image_source: row.image_source,
            tiers: row.tiers.0,
        }
    }
}
