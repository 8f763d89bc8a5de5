//! Application state shared across handlers.

use std::sync::Arc;

use mongodb::{Collection, Database};

use crate::config::CatalogConfig;
use crate::models::{Harvest, Plant};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the database handle and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: CatalogConfig,
    database: Database,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Catalog configuration
    /// * `database` - Connected MongoDB database handle
    #[must_use]
    pub fn new(config: CatalogConfig, database: Database) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, database }),
        }
    }

    /// Get a reference to the catalog configuration.
    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        &self.inner.config
    }

    /// Get a reference to the database handle.
    #[must_use]
    pub fn database(&self) -> &Database {
        &self.inner.database
    }

    /// The `plants` collection.
    #[must_use]
    pub fn plants(&self) -> Collection<Plant> {
        self.inner.database.collection("plants")
    }

    /// The `harvests` collection.
    #[must_use]
    pub fn harvests(&self) -> Collection<Harvest> {
        self.inner.database.collection("harvests")
    }
}
