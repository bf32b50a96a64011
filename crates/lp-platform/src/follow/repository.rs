//! Follow Repository

use super::entity::Follow;
use crate::shared::error::Result;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

pub struct FollowRepository {
    collection: Collection<Follow>,
}

impl FollowRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("follows"),
        }
    }

    pub async fn insert(&self, follow: &Follow) -> Result<()> {
        self.collection.insert_one(follow).await?;
        Ok(())
    }

    pub async fn find_pair(&self, follower: &str, following: &str) -> Result<Option<Follow>> {
        Ok(self
            .collection
            .find_one(doc! { "follower": follower, "following": following })
            .await?)
    }

    /// Everyone following the given user
    pub async fn find_followers(&self, following: &str) -> Result<Vec<Follow>> {
        let cursor = self.collection.find(doc! { "following": following }).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Everyone the given user follows
    pub async fn find_following(&self, follower: &str) -> Result<Vec<Follow>> {
        let cursor = self.collection.find(doc! { "follower": follower }).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn delete_pair(&self, follower: &str, following: &str) -> Result<bool> {
        let result = self
            .collection
            .delete_one(doc! { "follower": follower, "following": following })
            .await?;
        Ok(result.deleted_count > 0)
    }
}
