//! Tag Repository

use super::entity::Tag;
use crate::shared::error::Result;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

pub struct TagRepository {
    collection: Collection<Tag>,
}

impl TagRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("tags"),
        }
    }

    pub async fn insert(&self, tag: &Tag) -> Result<()> {
        self.collection.insert_one(tag).await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Tag>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Tag>> {
        Ok(self.collection.find_one(doc! { "slug": slug }).await?)
    }

    pub async fn exists_by_slug(&self, slug: &str) -> Result<bool> {
        let count = self.collection.count_documents(doc! { "slug": slug }).await?;
        Ok(count > 0)
    }

    /// All tags, name ascending
    pub async fn find_all(&self) -> Result<Vec<Tag>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "name": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn update(&self, tag: &Tag) -> Result<()> {
        self.collection
            .replace_one(doc! { "_id": &tag.id }, tag)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
