//! Plant repository for database operations.

use futures_util::stream::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;

use super::RepositoryError;
use crate::models::Plant;

/// Repository for plant database operations.
pub struct PlantRepository<'a> {
    collection: &'a Collection<Plant>,
}

impl<'a> PlantRepository<'a> {
    /// Create a new plant repository.
    #[must_use]
    pub const fn new(collection: &'a Collection<Plant>) -> Self {
        Self { collection }
    }

    /// List all plants in store order (insertion order in practice).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Plant>, RepositoryError> {
        let mut cursor = self.collection.find(doc! {}).await?;

        let mut plants = Vec::new();
        while let Some(plant) = cursor.try_next().await? {
            plants.push(plant);
        }

        Ok(plants)
    }

    /// Get a plant by its identifier.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ObjectId) -> Result<Option<Plant>, RepositoryError> {
        let plant = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(plant)
    }

    /// Insert a new plant and return it with its generated identifier.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    /// Returns `RepositoryError::DataCorruption` if the store hands back
    /// an inserted id that is not an `ObjectId`.
    pub async fn create(&self, mut plant: Plant) -> Result<Plant, RepositoryError> {
        let result = self.collection.insert_one(&plant).await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            RepositoryError::DataCorruption(format!(
                "inserted id is not an ObjectId: {}",
                result.inserted_id
            ))
        })?;

        plant.id = Some(id);
        Ok(plant)
    }

    /// Replace the four editable fields of the plant matching `id`.
    ///
    /// The identifier and `created_at` are left untouched.
    ///
    /// # Returns
    ///
    /// Returns `true` if a plant matched, `false` if no plant has that id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update_fields(
        &self,
        id: ObjectId,
        name: &str,
        variety: &str,
        photo_url: &str,
        date_planted: &str,
    ) -> Result<bool, RepositoryError> {
        let update = doc! {
            "$set": {
                "name": name,
                "variety": variety,
                "photo_url": photo_url,
                "date_planted": date_planted,
            }
        };

        let result = self
            .collection
            .update_one(doc! { "_id": id }, update)
            .await?;

        Ok(result.matched_count > 0)
    }

    /// Delete the plant with the given identifier.
    ///
    /// # Returns
    ///
    /// Returns `true` if a plant was deleted, `false` if none matched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: ObjectId) -> Result<bool, RepositoryError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
