//! Harvest document type.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// An event record of produce gathered from a plant (`harvests` collection).
///
/// Harvests are append-only: created via the harvest form on the plant
/// detail page, never edited, and removed only by the owning plant's
/// cascade delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Harvest {
    /// Store-generated identifier. `None` until inserted.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Hex id of the plant this harvest belongs to. Compared by string
    /// equality; the store enforces no referential integrity.
    pub plant_id: String,
    /// What was gathered (e.g., "3 tomatoes"). Required non-empty.
    pub quantity: String,
    /// When it was gathered. Free text, unvalidated.
    pub date: String,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
}

impl Harvest {
    /// Build an unsaved harvest from form fields.
    #[must_use]
    pub fn new(plant_id: String, quantity: String, date: String) -> Self {
        Self {
            id: None,
            plant_id,
            quantity,
            date,
            created_at: Utc::now(),
        }
    }
}
