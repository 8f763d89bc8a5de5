//! Harvest route handlers.

use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use serde::Deserialize;
use tracing::instrument;

use crate::db::HarvestRepository;
use crate::error::{AppError, Result, parse_object_id};
use crate::models::Harvest;
use crate::state::AppState;

/// Harvest view for templates.
#[derive(Debug, Clone)]
pub struct HarvestView {
    pub quantity: String,
    pub date: String,
}

impl From<&Harvest> for HarvestView {
    fn from(harvest: &Harvest) -> Self {
        Self {
            quantity: harvest.quantity.clone(),
            date: harvest.date.clone(),
        }
    }
}

/// Form data for recording a harvest.
#[derive(Debug, Deserialize)]
pub struct HarvestForm {
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub date: String,
}

/// Record a harvest against a plant id and redirect to its detail page.
///
/// The id must parse as a store identifier, but whether a plant actually
/// has that id is not checked: a harvest recorded against a vanished plant
/// is accepted and simply never shown anywhere.
///
/// # Errors
///
/// Returns 400 if `plant_id` is not a valid store identifier or if
/// `quantity` is empty.
#[instrument(skip(state, form))]
pub async fn record(
    State(state): State<AppState>,
    Path(plant_id): Path<String>,
    Form(form): Form<HarvestForm>,
) -> Result<Redirect> {
    let id = parse_object_id(&plant_id)?;
    require_quantity(&form.quantity)?;

    let collection = state.harvests();
    let repo = HarvestRepository::new(&collection);

    repo.create(Harvest::new(id.to_hex(), form.quantity, form.date))
        .await?;

    tracing::info!(plant_id = %plant_id, "Harvest recorded");

    Ok(Redirect::to(&format!("/plant/{plant_id}")))
}

/// Reject an empty or whitespace-only quantity.
fn require_quantity(quantity: &str) -> Result<()> {
    if quantity.trim().is_empty() {
        return Err(AppError::MissingField("quantity"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_quantity_accepts_text() {
        assert!(require_quantity("3 tomatoes").is_ok());
    }

    #[test]
    fn test_require_quantity_rejects_empty() {
        assert!(require_quantity("").is_err());
        assert!(require_quantity("   ").is_err());
    }

    #[test]
    fn test_harvest_view_carries_fields() {
        let harvest = Harvest::new(
            "5f1d7f0a9c9d440000a1b2c3".to_string(),
            "3 tomatoes".to_string(),
            "2024-07-15".to_string(),
        );
        let view = HarvestView::from(&harvest);

        assert_eq!(view.quantity, "3 tomatoes");
        assert_eq!(view.date, "2024-07-15");
    }
}
