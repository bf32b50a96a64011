//! Vote Repository

use super::entity::Vote;
use crate::shared::error::Result;
use mongodb::{bson::doc, Collection, Database};

pub struct VoteRepository {
    collection: Collection<Vote>,
}

impl VoteRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("votes"),
        }
    }

    pub async fn insert(&self, vote: &Vote) -> Result<()> {
        self.collection.insert_one(vote).await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Vote>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    pub async fn find_by_product_and_user(&self, product: &str, user: &str) -> Result<Option<Vote>> {
        Ok(self
            .collection
            .find_one(doc! { "product": product, "user": user })
            .await?)
    }

    pub async fn find_by_product_and_ip(&self, product: &str, ip: &str) -> Result<Option<Vote>> {
        Ok(self
            .collection
            .find_one(doc! { "product": product, "userIp": ip })
            .await?)
    }

    pub async fn count_by_product(&self, product: &str) -> Result<u64> {
        Ok(self
            .collection
            .count_documents(doc! { "product": product })
            .await?)
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
