//! SEO Repository

use super::entity::Seo;
use crate::shared::error::Result;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

pub struct SeoRepository {
    collection: Collection<Seo>,
}

impl SeoRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("seo"),
        }
    }

    pub async fn insert(&self, seo: &Seo) -> Result<()> {
        self.collection.insert_one(seo).await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Seo>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// All entries, newest first
    pub async fn find_all(&self) -> Result<Vec<Seo>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn update(&self, seo: &Seo) -> Result<()> {
        self.collection
            .replace_one(doc! { "_id": &seo.id }, seo)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
