//! Bookmark Repository

use super::entity::Bookmark;
use crate::shared::error::Result;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

pub struct BookmarkRepository {
    collection: Collection<Bookmark>,
}

impl BookmarkRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("bookmarks"),
        }
    }

    pub async fn insert(&self, bookmark: &Bookmark) -> Result<()> {
        self.collection.insert_one(bookmark).await?;
        Ok(())
    }

    pub async fn find_pair(&self, user: &str, product: &str) -> Result<Option<Bookmark>> {
        Ok(self
            .collection
            .find_one(doc! { "user": user, "product": product })
            .await?)
    }

    pub async fn find_by_user(&self, user: &str) -> Result<Vec<Bookmark>> {
        let cursor = self.collection.find(doc! { "user": user }).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn delete_pair(&self, user: &str, product: &str) -> Result<bool> {
        let result = self
            .collection
            .delete_one(doc! { "user": user, "product": product })
            .await?;
        Ok(result.deleted_count > 0)
    }
}
