//! HTTP route handlers for the plant catalog.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                     - Plant list
//! GET  /about                - About page
//! GET  /health               - Health check
//!
//! # Plants
//! GET  /create               - Plant creation form
//! POST /create               - Create plant, redirect to detail
//! GET  /plant/{plant_id}     - Plant detail + its harvests
//! GET  /edit/{plant_id}      - Edit form pre-filled with plant
//! POST /edit/{plant_id}      - Apply field updates, redirect to detail
//! POST /delete/{plant_id}    - Cascade-delete plant + harvests, redirect to list
//!
//! # Harvests
//! POST /harvest/{plant_id}   - Record a harvest, redirect to detail
//! ```

pub mod harvests;
pub mod pages;
pub mod plants;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the plant routes router.
///
/// The paths are flat rather than nested under a prefix; they mirror the
/// links the templates emit.
pub fn plant_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(plants::list))
        .route("/create", get(plants::create_page).post(plants::create))
        .route("/plant/{plant_id}", get(plants::detail))
        .route("/edit/{plant_id}", get(plants::edit_page).post(plants::edit))
        .route("/delete/{plant_id}", post(plants::delete))
}

/// Create the harvest routes router.
pub fn harvest_routes() -> Router<AppState> {
    Router::new().route("/harvest/{plant_id}", post(harvests::record))
}

/// Create all routes for the catalog.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(plant_routes())
        .merge(harvest_routes())
        .route("/about", get(pages::about))
}
