//! Badge Repository

use super::entity::Badge;
use crate::shared::error::Result;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

pub struct BadgeRepository {
    collection: Collection<Badge>,
}

impl BadgeRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("badges"),
        }
    }

    pub async fn insert(&self, badge: &Badge) -> Result<()> {
        self.collection.insert_one(badge).await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Badge>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// All badges, name ascending
    pub async fn find_all(&self) -> Result<Vec<Badge>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "name": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn update(&self, badge: &Badge) -> Result<()> {
        self.collection
            .replace_one(doc! { "_id": &badge.id }, badge)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
