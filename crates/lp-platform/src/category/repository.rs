//! Category Repository

use super::entity::Category;
use crate::shared::error::Result;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

pub struct CategoryRepository {
    collection: Collection<Category>,
}

impl CategoryRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("categories"),
        }
    }

    pub async fn insert(&self, category: &Category) -> Result<()> {
        self.collection.insert_one(category).await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Category>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        Ok(self.collection.find_one(doc! { "slug": slug }).await?)
    }

    pub async fn exists_by_slug(&self, slug: &str) -> Result<bool> {
        let count = self.collection.count_documents(doc! { "slug": slug }).await?;
        Ok(count > 0)
    }

    /// All categories, name ascending
    pub async fn find_all(&self) -> Result<Vec<Category>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "name": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn update(&self, category: &Category) -> Result<()> {
        self.collection
            .replace_one(doc! { "_id": &category.id }, category)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
