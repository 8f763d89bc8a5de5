//! Database operations for the catalog's MongoDB store.
//!
//! # Collections
//!
//! - `plants` - Plant records
//! - `harvests` - Harvest events, keyed to plants by the `plant_id` field
//!
//! There is no schema migration step: documents are created with the shape
//! the models serialize to, and the store generates `_id` values on insert.

pub mod harvests;
pub mod plants;

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use secrecy::ExposeSecret;
use thiserror::Error;

pub use harvests::HarvestRepository;
pub use plants::PlantRepository;

/// How long to wait for a reachable server before giving up.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from the MongoDB driver.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Data returned by the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Connect to MongoDB and verify the connection with a ping.
///
/// # Arguments
///
/// * `uri` - MongoDB connection string (wrapped in `SecretString`)
/// * `database` - Name of the database holding the catalog collections
///
/// # Errors
///
/// Returns `mongodb::error::Error` if the URI does not parse or the
/// server does not answer the ping within the selection timeout.
pub async fn connect(
    uri: &secrecy::SecretString,
    database: &str,
) -> Result<Database, mongodb::error::Error> {
    let mut options = ClientOptions::parse(uri.expose_secret()).await?;
    options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);

    let client = Client::with_options(options)?;
    let db = client.database(database);

    // Fail fast at startup rather than on the first request
    db.run_command(doc! { "ping": 1 }).await?;

    Ok(db)
}
