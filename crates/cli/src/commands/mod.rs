//! CLI command implementations.

pub mod reset;
pub mod seed;

use mongodb::Database;
use plant_catalog::config::CatalogConfig;
use plant_catalog::db;

/// Load configuration from the environment and connect to MongoDB.
///
/// Uses the same configuration surface as the web service so both tools
/// operate on the same database.
pub async fn connect_from_env() -> Result<Database, Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = CatalogConfig::from_env()?;
    let database = db::connect(&config.mongodb_uri, &config.database).await?;
    Ok(database)
}
