//! Submission Repository

use super::entity::Submission;
use crate::shared::error::Result;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

pub struct SubmissionRepository {
    collection: Collection<Submission>,
}

impl SubmissionRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("submissions"),
        }
    }

    pub async fn insert(&self, submission: &Submission) -> Result<()> {
        self.collection.insert_one(submission).await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Submission>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// All submissions, newest first (moderation queue view)
    pub async fn find_all(&self) -> Result<Vec<Submission>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// A user's own submissions, newest first
    pub async fn find_by_submitter(&self, submitter: &str) -> Result<Vec<Submission>> {
        let cursor = self
            .collection
            .find(doc! { "submitter": submitter })
            .sort(doc! { "createdAt": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn update(&self, submission: &Submission) -> Result<()> {
        self.collection
            .replace_one(doc! { "_id": &submission.id }, submission)
            .await?;
        Ok(())
    }
}
