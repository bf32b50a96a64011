//! Roadmap Repository

use super::entity::RoadmapItem;
use crate::shared::error::Result;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

pub struct RoadmapRepository {
    collection: Collection<RoadmapItem>,
}

impl RoadmapRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("roadmaps"),
        }
    }

    pub async fn insert(&self, item: &RoadmapItem) -> Result<()> {
        self.collection.insert_one(item).await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<RoadmapItem>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    pub async fn find_by_product(&self, product: &str) -> Result<Vec<RoadmapItem>> {
        let cursor = self
            .collection
            .find(doc! { "product": product })
            .sort(doc! { "stage": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn update(&self, item: &RoadmapItem) -> Result<()> {
        self.collection
            .replace_one(doc! { "_id": &item.id }, item)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
