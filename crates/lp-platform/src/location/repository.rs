//! Location Repository

use super::entity::Location;
use crate::shared::error::Result;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

pub struct LocationRepository {
    collection: Collection<Location>,
}

impl LocationRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("locations"),
        }
    }

    pub async fn insert(&self, location: &Location) -> Result<()> {
        self.collection.insert_one(location).await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Location>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// All locations, country then city ascending
    pub async fn find_all(&self) -> Result<Vec<Location>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "country": 1, "city": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn update(&self, location: &Location) -> Result<()> {
        self.collection
            .replace_one(doc! { "_id": &location.id }, location)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
