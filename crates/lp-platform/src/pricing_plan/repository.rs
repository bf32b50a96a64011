//! Pricing Plan Repository

use super::entity::PricingPlan;
use crate::shared::error::Result;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

pub struct PricingPlanRepository {
    collection: Collection<PricingPlan>,
}

impl PricingPlanRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("pricing_plans"),
        }
    }

    pub async fn insert(&self, plan: &PricingPlan) -> Result<()> {
        self.collection.insert_one(plan).await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<PricingPlan>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// All plans, newest first
    pub async fn find_all(&self) -> Result<Vec<PricingPlan>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// A product's plans, cheapest first
    pub async fn find_by_product(&self, product: &str) -> Result<Vec<PricingPlan>> {
        let cursor = self
            .collection
            .find(doc! { "product": product })
            .sort(doc! { "price": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn update(&self, plan: &PricingPlan) -> Result<()> {
        self.collection
            .replace_one(doc! { "_id": &plan.id }, plan)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
