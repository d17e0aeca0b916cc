//! Tier list entity model.
//!
//! A [`TierList`] owns an ordered sequence of [`Tier`]s, each of which owns
//! an ordered sequence of [`Item`]s. The whole tree is persisted as a single
//! JSON document alongside the parent row, so it is modelled here as plain
//! serde structs with no identity below the tier list itself.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum title length in characters (matches the `VARCHAR(50)` column).
pub const MAX_TITLE_LEN: usize = 50;

/// Entity name used in not-found messages.
pub const ENTITY_NAME: &str = "tier list";

// ---------------------------------------------------------------------------
// Default skeleton
// ---------------------------------------------------------------------------

/// Canonical tier labels and display colors, in rank order.
pub const DEFAULT_TIERS: [(&str, &str); 5] = [
    ("S", "#ff7e7f"),
    ("A", "#ffbf81"),
    ("B", "#ffff80"),
    ("C", "#80ff80"),
    ("D", "#7fbfff"),
];

/// Build the five empty tiers every new tier list starts with.
pub fn default_tiers() -> Vec<Tier> {
    DEFAULT_TIERS
        .iter()
        .map(|(title, color)| Tier {
            title: (*title).to_string(),
            description: None,
            color: (*color).to_string(),
            items: Vec::new(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Entity structs
// ---------------------------------------------------------------------------

/// A titled ranking made of ordered tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierList {
    pub id: DbId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_source: Option<String>,
    pub tiers: Vec<Tier>,
}

/// A rank bucket. Item order is the rank order within the tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// A single ranked entry, owned by its tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_source: Option<String>,
}

/// Input for creating a new tier list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierListInfo {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub image_source: Option<String>,
}

/// Body of a full-replacement update.
///
/// Carries no id: the tier list being replaced is addressed separately, and
/// an `id` key in the incoming JSON is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierListUpdate {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub image_source: Option<String>,
    pub tiers: Vec<Tier>,
}

impl TierListUpdate {
    /// Attach the addressed id, producing the entity to persist.
    pub fn into_tier_list(self, id: DbId) -> TierList {
        TierList {
            id,
            title: self.title,
            description: self.description,
            image_source: self.image_source,
            tiers: self.tiers,
        }
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl TierList {
    /// Build a new tier list with a fresh id and the default tier skeleton.
    ///
    /// The title is trimmed; an empty or over-long title is rejected with
    /// [`CoreError::Validation`] and no entity is produced.
    pub fn new(info: TierListInfo) -> Result<Self, CoreError> {
        validate_title(&info.title)?;
        Ok(Self {
            id: DbId::new_v4(),
            title: info.title.trim().to_string(),
            description: info.description,
            image_source: info.image_source,
            tiers: default_tiers(),
        })
    }

    /// Validate and trim the title of a full-replacement entity.
    ///
    /// Tiers and items pass through untouched.
    pub fn normalized(mut self) -> Result<Self, CoreError> {
        validate_title(&self.title)?;
        self.title = self.title.trim().to_string();
        Ok(self)
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a tier list title.
///
/// Once trimmed it must be non-blank, free of control characters and at
/// most [`MAX_TITLE_LEN`] chars.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Title cannot be empty".into()));
    }
    if trimmed.chars().any(char::is_control) {
        return Err(CoreError::Validation(
            "Title must not contain control characters".into(),
        ));
    }
    if trimmed.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}
