//! Plant route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use serde::Deserialize;
use tracing::instrument;

use crate::db::{HarvestRepository, PlantRepository};
use crate::error::{AppError, Result, parse_object_id};
use crate::filters;
use crate::models::Plant;
use crate::routes::harvests::HarvestView;
use crate::state::AppState;

/// Plant view for templates.
#[derive(Debug, Clone)]
pub struct PlantView {
    pub id: String,
    pub name: String,
    pub variety: String,
    pub photo_url: String,
    pub date_planted: String,
}

impl From<&Plant> for PlantView {
    fn from(plant: &Plant) -> Self {
        Self {
            id: plant.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: plant.name.clone(),
            variety: plant.variety.clone(),
            photo_url: plant.photo_url.clone(),
            date_planted: plant.date_planted.clone(),
        }
    }
}

/// Form data for creating or editing a plant.
///
/// Every field is optional in the request body and defaults to an empty
/// string; the catalog stores whatever was entered without validation.
#[derive(Debug, Deserialize)]
pub struct PlantForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub variety: String,
    #[serde(default)]
    pub photo_url: String,
    #[serde(default)]
    pub date_planted: String,
}

/// Plant list page template.
#[derive(Template, WebTemplate)]
#[template(path = "plants_list.html")]
pub struct PlantsListTemplate {
    pub plants: Vec<PlantView>,
}

/// Plant creation form template.
#[derive(Template, WebTemplate)]
#[template(path = "create.html")]
pub struct CreateTemplate;

/// Plant detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "detail.html")]
pub struct DetailTemplate {
    pub plant: PlantView,
    pub harvests: Vec<HarvestView>,
}

/// Plant edit form template.
#[derive(Template, WebTemplate)]
#[template(path = "edit.html")]
pub struct EditTemplate {
    pub plant: PlantView,
}

/// Display the plant list page.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<PlantsListTemplate> {
    let collection = state.plants();
    let repo = PlantRepository::new(&collection);

    let plants = repo.list_all().await?;
    let plants = plants.iter().map(PlantView::from).collect();

    Ok(PlantsListTemplate { plants })
}

/// Display the plant creation form.
#[instrument]
pub async fn create_page() -> CreateTemplate {
    CreateTemplate
}

/// Create a plant from the submitted form and redirect to its detail page.
#[instrument(skip(state, form), fields(name = %form.name))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<PlantForm>,
) -> Result<Redirect> {
    let collection = state.plants();
    let repo = PlantRepository::new(&collection);

    let plant = repo
        .create(Plant::new(
            form.name,
            form.variety,
            form.photo_url,
            form.date_planted,
        ))
        .await?;

    let id = plant.id.map(|id| id.to_hex()).unwrap_or_default();
    tracing::info!(plant_id = %id, "Plant created");

    Ok(Redirect::to(&format!("/plant/{id}")))
}

/// Display the plant detail page with the plant's recorded harvests.
///
/// # Errors
///
/// Returns 400 if `plant_id` is not a valid store identifier and 404 if no
/// plant has that identifier.
#[instrument(skip(state))]
pub async fn detail(
    State(state): State<AppState>,
    Path(plant_id): Path<String>,
) -> Result<DetailTemplate> {
    let id = parse_object_id(&plant_id)?;

    let plants = state.plants();
    let harvests = state.harvests();
    let plant_repo = PlantRepository::new(&plants);
    let harvest_repo = HarvestRepository::new(&harvests);

    let plant = plant_repo
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("plant {plant_id}")))?;

    // Harvests reference the plant by the hex form of its id
    let recorded = harvest_repo.list_for_plant(&id.to_hex()).await?;

    Ok(DetailTemplate {
        plant: PlantView::from(&plant),
        harvests: recorded.iter().map(HarvestView::from).collect(),
    })
}

/// Display the edit form pre-filled with the plant's current fields.
///
/// # Errors
///
/// Returns 400 if `plant_id` is not a valid store identifier and 404 if no
/// plant has that identifier.
#[instrument(skip(state))]
pub async fn edit_page(
    State(state): State<AppState>,
    Path(plant_id): Path<String>,
) -> Result<EditTemplate> {
    let id = parse_object_id(&plant_id)?;

    let collection = state.plants();
    let repo = PlantRepository::new(&collection);

    let plant = repo
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("plant {plant_id}")))?;

    Ok(EditTemplate {
        plant: PlantView::from(&plant),
    })
}

/// Apply the edit form to the plant's four editable fields and redirect to
/// its detail page.
///
/// The identifier is validated like every other handler; editing a
/// well-formed id that matches no plant still redirects, mirroring the
/// fire-and-forget behavior of the form flow.
#[instrument(skip(state, form))]
pub async fn edit(
    State(state): State<AppState>,
    Path(plant_id): Path<String>,
    Form(form): Form<PlantForm>,
) -> Result<Redirect> {
    let id = parse_object_id(&plant_id)?;

    let collection = state.plants();
    let repo = PlantRepository::new(&collection);

    let matched = repo
        .update_fields(id, &form.name, &form.variety, &form.photo_url, &form.date_planted)
        .await?;

    if matched {
        tracing::info!(plant_id = %plant_id, "Plant updated");
    } else {
        tracing::warn!(plant_id = %plant_id, "Edit matched no plant");
    }

    Ok(Redirect::to(&format!("/plant/{plant_id}")))
}

/// Delete the plant and every harvest recorded against it, then redirect
/// to the plant list.
///
/// The two deletes are not atomic (the store offers no cross-collection
/// transaction here); harvests go first so a failure in between cannot
/// leave harvests without their plant.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(plant_id): Path<String>,
) -> Result<Redirect> {
    let id = parse_object_id(&plant_id)?;

    let plants = state.plants();
    let harvests = state.harvests();
    let plant_repo = PlantRepository::new(&plants);
    let harvest_repo = HarvestRepository::new(&harvests);

    let harvests_deleted = harvest_repo.delete_for_plant(&id.to_hex()).await?;
    let deleted = plant_repo.delete(id).await?;

    if deleted {
        tracing::info!(plant_id = %plant_id, harvests_deleted, "Plant deleted");
    } else {
        tracing::warn!(plant_id = %plant_id, harvests_deleted, "Delete matched no plant");
    }

    Ok(Redirect::to("/"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn sample_plant(id: Option<ObjectId>) -> Plant {
        let mut plant = Plant::new(
            "Tomato".to_string(),
            "Roma".to_string(),
            "http://x/y.jpg".to_string(),
            "2024-05-01".to_string(),
        );
        plant.id = id;
        plant
    }

    #[test]
    fn test_plant_view_uses_hex_id() {
        let id = ObjectId::parse_str("5f1d7f0a9c9d440000a1b2c3").unwrap();
        let view = PlantView::from(&sample_plant(Some(id)));

        assert_eq!(view.id, "5f1d7f0a9c9d440000a1b2c3");
        assert_eq!(view.name, "Tomato");
        assert_eq!(view.variety, "Roma");
        assert_eq!(view.photo_url, "http://x/y.jpg");
        assert_eq!(view.date_planted, "2024-05-01");
    }

    #[test]
    fn test_plant_view_unsaved_plant_has_empty_id() {
        let view = PlantView::from(&sample_plant(None));
        assert_eq!(view.id, "");
    }

    #[test]
    fn test_detail_template_renders_plant_and_empty_harvests() {
        let id = ObjectId::parse_str("5f1d7f0a9c9d440000a1b2c3").unwrap();
        let template = DetailTemplate {
            plant: PlantView::from(&sample_plant(Some(id))),
            harvests: vec![],
        };

        let html = template.render().unwrap();
        assert!(html.contains("Tomato"));
        assert!(html.contains("No harvests recorded yet"));
    }

    #[test]
    fn test_list_template_links_to_detail() {
        let id = ObjectId::parse_str("5f1d7f0a9c9d440000a1b2c3").unwrap();
        let template = PlantsListTemplate {
            plants: vec![PlantView::from(&sample_plant(Some(id)))],
        };

        let html = template.render().unwrap();
        assert!(html.contains("/plant/5f1d7f0a9c9d440000a1b2c3"));
    }
}
