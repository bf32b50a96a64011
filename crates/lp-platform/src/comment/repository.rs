//! Comment Repository

use super::entity::Comment;
use crate::shared::error::Result;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

pub struct CommentRepository {
    collection: Collection<Comment>,
}

impl CommentRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("comments"),
        }
    }

    pub async fn insert(&self, comment: &Comment) -> Result<()> {
        self.collection.insert_one(comment).await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Comment>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Comments for a product, newest first
    pub async fn find_by_product(&self, product: &str) -> Result<Vec<Comment>> {
        let cursor = self
            .collection
            .find(doc! { "product": product })
            .sort(doc! { "createdAt": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn update(&self, comment: &Comment) -> Result<()> {
        self.collection
            .replace_one(doc! { "_id": &comment.id }, comment)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
