//! Feature Request Repository

use super::entity::FeatureRequest;
use crate::shared::error::Result;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

pub struct FeatureRequestRepository {
    collection: Collection<FeatureRequest>,
}

impl FeatureRequestRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("feature_requests"),
        }
    }

    pub async fn insert(&self, feature: &FeatureRequest) -> Result<()> {
        self.collection.insert_one(feature).await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<FeatureRequest>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// A product's feature requests, most-voted first
    pub async fn find_by_product(&self, product: &str) -> Result<Vec<FeatureRequest>> {
        let cursor = self
            .collection
            .find(doc! { "product": product })
            .sort(doc! { "votes": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn increment_votes(&self, id: &str) -> Result<()> {
        self.collection
            .update_one(doc! { "_id": id }, doc! { "$inc": { "votes": 1 } })
            .await?;
        Ok(())
    }

    pub async fn update(&self, feature: &FeatureRequest) -> Result<()> {
        self.collection
            .replace_one(doc! { "_id": &feature.id }, feature)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
