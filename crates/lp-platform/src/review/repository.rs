//! Review Repository

use super::entity::Review;
use crate::shared::error::Result;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

pub struct ReviewRepository {
    collection: Collection<Review>,
}

impl ReviewRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("reviews"),
        }
    }

    pub async fn insert(&self, review: &Review) -> Result<()> {
        self.collection.insert_one(review).await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Review>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    pub async fn find_by_product(&self, product: &str) -> Result<Vec<Review>> {
        let cursor = self.collection.find(doc! { "product": product }).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn find_by_product_and_user(
        &self,
        product: &str,
        user: &str,
    ) -> Result<Option<Review>> {
        Ok(self
            .collection
            .find_one(doc! { "product": product, "user": user })
            .await?)
    }

    pub async fn update(&self, review: &Review) -> Result<()> {
        self.collection
            .replace_one(doc! { "_id": &review.id }, review)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
