//! Notification Repository

use super::entity::Notification;
use crate::shared::error::Result;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

pub struct NotificationRepository {
    collection: Collection<Notification>,
}

impl NotificationRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("notifications"),
        }
    }

    pub async fn insert(&self, notification: &Notification) -> Result<()> {
        self.collection.insert_one(notification).await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Notification>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// A user's notifications, newest first
    pub async fn find_by_user(&self, user: &str) -> Result<Vec<Notification>> {
        let cursor = self
            .collection
            .find(doc! { "user": user })
            .sort(doc! { "createdAt": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn mark_read(&self, id: &str) -> Result<()> {
        self.collection
            .update_one(doc! { "_id": id }, doc! { "$set": { "read": true } })
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
