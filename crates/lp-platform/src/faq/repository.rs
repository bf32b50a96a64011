//! FAQ Repository

use super::entity::Faq;
use crate::shared::error::Result;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

pub struct FaqRepository {
    collection: Collection<Faq>,
}

impl FaqRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("faqs"),
        }
    }

    pub async fn insert(&self, faq: &Faq) -> Result<()> {
        self.collection.insert_one(faq).await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Faq>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    pub async fn find_by_product(&self, product: &str) -> Result<Vec<Faq>> {
        let cursor = self.collection.find(doc! { "product": product }).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn update(&self, faq: &Faq) -> Result<()> {
        self.collection
            .replace_one(doc! { "_id": &faq.id }, faq)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
