//! Launch Day Repository

use super::entity::LaunchDay;
use crate::shared::error::Result;
use bson::DateTime as BsonDateTime;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

pub struct LaunchDayRepository {
    collection: Collection<LaunchDay>,
}

impl LaunchDayRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("launch_days"),
        }
    }

    pub async fn insert(&self, launch: &LaunchDay) -> Result<()> {
        self.collection.insert_one(launch).await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<LaunchDay>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Full calendar, soonest first
    pub async fn find_all(&self) -> Result<Vec<LaunchDay>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "scheduledDate": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Launches scheduled inside the given window, by rank
    pub async fn find_in_window(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<LaunchDay>> {
        let cursor = self
            .collection
            .find(doc! {
                "scheduledDate": {
                    "$gte": BsonDateTime::from_chrono(from),
                    "$lt": BsonDateTime::from_chrono(to),
                }
            })
            .sort(doc! { "rank": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn update(&self, launch: &LaunchDay) -> Result<()> {
        self.collection
            .replace_one(doc! { "_id": &launch.id }, launch)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
