//! Product Update Repository

use super::entity::ProductUpdate;
use crate::shared::error::Result;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

pub struct ProductUpdateRepository {
    collection: Collection<ProductUpdate>,
}

impl ProductUpdateRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("product_updates"),
        }
    }

    pub async fn insert(&self, update: &ProductUpdate) -> Result<()> {
        self.collection.insert_one(update).await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<ProductUpdate>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// A product's updates, newest first
    pub async fn find_by_product(&self, product: &str) -> Result<Vec<ProductUpdate>> {
        let cursor = self
            .collection
            .find(doc! { "product": product })
            .sort(doc! { "createdAt": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn update(&self, update: &ProductUpdate) -> Result<()> {
        self.collection
            .replace_one(doc! { "_id": &update.id }, update)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
