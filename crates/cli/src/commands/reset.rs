//! Drop the catalog collections.

use tracing::info;

use plant_catalog::models::{Harvest, Plant};

use super::connect_from_env;

/// Drop the `plants` and `harvests` collections.
///
/// MongoDB recreates a collection on the next insert, so this is the
/// whole reset: there is no schema to rebuild.
///
/// # Errors
///
/// Returns an error if configuration loading, the connection, or a drop
/// fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let database = connect_from_env().await?;
    info!("Connected to database");

    database.collection::<Plant>("plants").drop().await?;
    info!("Dropped collection: plants");

    database.collection::<Harvest>("harvests").drop().await?;
    info!("Dropped collection: harvests");

    Ok(())
}
