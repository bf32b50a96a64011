//! Submission Workflow
//!
//! The one stateful process in the platform: a submitted draft either
//! becomes a published Product or ends rejected. Product construction is
//! shared between the admin auto-approve path and the explicit approve
//! operation so the two can never drift apart.

use std::sync::Arc;
use tracing::info;

use super::entity::{Submission, SubmissionStatus};
use super::repository::SubmissionRepository;
use crate::product::entity::{Product, ProductStatus};
use crate::product::repository::ProductRepository;
use crate::shared::error::{PlatformError, Result};
use crate::shared::slug::{slugify, with_time_suffix};
use crate::AuthClaims;

/// Incoming draft fields for a new submission
#[derive(Debug, Default)]
pub struct SubmissionDraft {
    pub name: String,
    pub tagline: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub logo: Option<String>,
    pub images: Vec<String>,
    pub suggested_category: Option<String>,
    pub suggested_tags: Vec<String>,
    pub launch_date: Option<chrono::DateTime<chrono::Utc>>,
}

/// Outcome of an approve call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApproveOutcome {
    Approved,
    AlreadyApproved,
}

/// Build the Product a submission publishes as.
///
/// Used by both submit (admin auto-approve) and approve. The slug here is
/// the plain slugified name; the caller disambiguates collisions before
/// persisting.
pub fn materialize_product(submission: &Submission, created_by: Option<&str>) -> Product {
    let mut product = Product::new(
        submission.name.clone(),
        slugify(&submission.name),
        submission.tagline.clone().unwrap_or_default(),
    );
    product.thumbnail = submission.logo.clone();
    product.gallery = submission.images.clone();
    product.website_url = submission.website.clone();
    product.launch_date = submission.launch_date;
    product.created_by = created_by.map(String::from);
    product.status = ProductStatus::Published;
    product
}

/// Submission workflow service
#[derive(Clone)]
pub struct SubmissionService {
    submission_repo: Arc<SubmissionRepository>,
    product_repo: Arc<ProductRepository>,
}

impl SubmissionService {
    pub fn new(
        submission_repo: Arc<SubmissionRepository>,
        product_repo: Arc<ProductRepository>,
    ) -> Self {
        Self {
            submission_repo,
            product_repo,
        }
    }

    /// Submit a draft. Admin submissions are approved on the spot and
    /// publish their product immediately; everything else waits in pending.
    pub async fn submit(&self, draft: SubmissionDraft, actor: &AuthClaims) -> Result<Submission> {
        if draft.name.trim().is_empty() {
            return Err(PlatformError::validation("Name is required"));
        }

        let mut submission = Submission::new(draft.name);
        submission.submitter = Some(actor.user_id().to_string());
        submission.tagline = draft.tagline;
        submission.email = draft.email;
        submission.website = draft.website;
        submission.logo = draft.logo;
        submission.images = draft.images;
        submission.suggested_category = draft.suggested_category;
        submission.suggested_tags = draft.suggested_tags;
        submission.launch_date = draft.launch_date;

        if actor.is_admin() {
            let product = self
                .publish(&submission, Some(actor.user_id()))
                .await?;
            submission.status = SubmissionStatus::Approved;
            submission.product = Some(product.id);
        }

        self.submission_repo.insert(&submission).await?;
        info!(submission_id = %submission.id, status = ?submission.status, "Submission created");

        Ok(submission)
    }

    /// Approve a pending submission, creating its product. Re-approving an
    /// already-approved submission is a no-op returning the existing record.
    pub async fn approve(&self, id: &str) -> Result<(Submission, ApproveOutcome)> {
        let mut submission = self
            .submission_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| PlatformError::not_found("Submission", id))?;

        if submission.is_approved() {
            return Ok((submission, ApproveOutcome::AlreadyApproved));
        }

        let product = self
            .publish(&submission, submission.submitter.as_deref())
            .await?;

        submission.status = SubmissionStatus::Approved;
        submission.product = Some(product.id);
        submission.updated_at = chrono::Utc::now();
        self.submission_repo.update(&submission).await?;
        info!(submission_id = %submission.id, "Submission approved");

        Ok((submission, ApproveOutcome::Approved))
    }

    /// Reject a submission, storing the moderation notes. Rejecting an
    /// already-approved submission is permitted and does not retract the
    /// product it created.
    pub async fn reject(&self, id: &str, admin_notes: Option<String>) -> Result<Submission> {
        let mut submission = self
            .submission_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| PlatformError::not_found("Submission", id))?;

        submission.status = SubmissionStatus::Rejected;
        submission.admin_notes = admin_notes;
        submission.updated_at = chrono::Utc::now();
        self.submission_repo.update(&submission).await?;
        info!(submission_id = %submission.id, "Submission rejected");

        Ok(submission)
    }

    /// Materialize and persist the product for a submission, resolving slug
    /// collisions with a timestamp suffix.
    async fn publish(&self, submission: &Submission, created_by: Option<&str>) -> Result<Product> {
        let mut product = materialize_product(submission, created_by);
        if self.product_repo.exists_by_slug(&product.slug).await? {
            product.slug = with_time_suffix(&product.slug);
        }
        self.product_repo.insert(&product).await?;
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_submission() -> Submission {
        let mut submission = Submission::new("My App");
        submission.tagline = Some("Ship faster".to_string());
        submission.logo = Some("https://cdn.example.com/logo.png".to_string());
        submission.images = vec!["https://cdn.example.com/1.png".to_string()];
        submission.website = Some("https://example.com".to_string());
        submission
    }

    #[test]
    fn test_materialize_product_field_mapping() {
        let submission = draft_submission();
        let product = materialize_product(&submission, Some("user-1"));

        assert_eq!(product.title, "My App");
        assert_eq!(product.slug, "my-app");
        assert_eq!(product.description, "Ship faster");
        assert_eq!(product.thumbnail.as_deref(), Some("https://cdn.example.com/logo.png"));
        assert_eq!(product.gallery.len(), 1);
        assert_eq!(product.website_url.as_deref(), Some("https://example.com"));
        assert_eq!(product.created_by.as_deref(), Some("user-1"));
        assert_eq!(product.status, ProductStatus::Published);
    }

    #[test]
    fn test_materialize_product_without_submitter() {
        let submission = Submission::new("Orphan Tool");
        let product = materialize_product(&submission, None);

        assert!(product.created_by.is_none());
        assert_eq!(product.description, "");
        assert_eq!(product.status, ProductStatus::Published);
    }
}
