//! Harvest repository for database operations.

use futures_util::stream::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::doc;

use super::RepositoryError;
use crate::models::Harvest;

/// Repository for harvest database operations.
///
/// Harvests are append-only: they are inserted from the detail page's
/// harvest form and removed only when their plant is cascade-deleted.
pub struct HarvestRepository<'a> {
    collection: &'a Collection<Harvest>,
}

impl<'a> HarvestRepository<'a> {
    /// Create a new harvest repository.
    #[must_use]
    pub const fn new(collection: &'a Collection<Harvest>) -> Self {
        Self { collection }
    }

    /// List all harvests recorded against the given plant id, in no
    /// guaranteed order.
    ///
    /// The `plant_id` is matched by string equality against the hex form
    /// of the plant's identifier.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_plant(&self, plant_id: &str) -> Result<Vec<Harvest>, RepositoryError> {
        let mut cursor = self.collection.find(doc! { "plant_id": plant_id }).await?;

        let mut harvests = Vec::new();
        while let Some(harvest) = cursor.try_next().await? {
            harvests.push(harvest);
        }

        Ok(harvests)
    }

    /// Insert a new harvest.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, harvest: Harvest) -> Result<(), RepositoryError> {
        self.collection.insert_one(&harvest).await?;
        Ok(())
    }

    /// Delete every harvest recorded against the given plant id.
    ///
    /// # Returns
    ///
    /// Returns the number of harvests deleted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete_for_plant(&self, plant_id: &str) -> Result<u64, RepositoryError> {
        let result = self
            .collection
            .delete_many(doc! { "plant_id": plant_id })
            .await?;
        Ok(result.deleted_count)
    }
}
