//! Plant document type.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A tracked botanical specimen record (`plants` collection).
///
/// All descriptive fields are free text entered through the web forms;
/// the store assigns `_id` on insert and it is never reassigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    /// Store-generated identifier. `None` until inserted.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Common name (e.g., "Tomato").
    pub name: String,
    /// Variety or cultivar (e.g., "Roma").
    pub variety: String,
    /// URL of a photo of the plant. Stored as entered, unvalidated.
    pub photo_url: String,
    /// Date the plant went into the ground. Free text, unvalidated.
    pub date_planted: String,
    /// When this record was created. Never touched by edits.
    pub created_at: DateTime<Utc>,
}

impl Plant {
    /// Build an unsaved plant from form fields.
    #[must_use]
    pub fn new(name: String, variety: String, photo_url: String, date_planted: String) -> Self {
        Self {
            id: None,
            name,
            variety,
            photo_url,
            date_planted,
            created_at: Utc::now(),
        }
    }
}
