//! Submissions API
//!
//! Moderation endpoints for the submission workflow.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use utoipa_axum::{router::OpenApiRouter, routes};

use super::entity::{Submission, SubmissionStatus};
use super::repository::SubmissionRepository;
use super::service::{ApproveOutcome, SubmissionDraft, SubmissionService};
use crate::shared::error::PlatformError;
use crate::shared::middleware::{Authenticated, RequireAdmin};

/// Submit request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub name: String,
    pub tagline: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub logo: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub suggested_category: Option<String>,
    #[serde(default)]
    pub suggested_tags: Vec<String>,
    pub launch_date: Option<DateTime<Utc>>,
}

/// Reject request
#[derive(Debug, Deserialize, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RejectRequest {
    pub admin_notes: Option<String>,
}

/// Submission response DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitter: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_category: Option<String>,
    pub suggested_tags: Vec<String>,
    pub status: SubmissionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_date: Option<String>,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Submission> for SubmissionResponse {
    fn from(s: Submission) -> Self {
        Self {
            id: s.id,
            product: s.product,
            submitter: s.submitter,
            name: s.name,
            tagline: s.tagline,
            email: s.email,
            website: s.website,
            logo: s.logo,
            images: s.images,
            suggested_category: s.suggested_category,
            suggested_tags: s.suggested_tags,
            status: s.status,
            launch_date: s.launch_date.map(|t| t.to_rfc3339()),
            featured: s.featured,
            admin_notes: s.admin_notes,
            created_at: s.created_at.to_rfc3339(),
            updated_at: s.updated_at.to_rfc3339(),
        }
    }
}

/// Submission envelope with a human-readable outcome message
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionEnvelope {
    pub success: bool,
    pub message: String,
    pub submission: SubmissionResponse,
}

/// Submissions service state
#[derive(Clone)]
pub struct SubmissionsState {
    pub submission_repo: Arc<SubmissionRepository>,
    pub submission_service: Arc<SubmissionService>,
}

/// Submit a product proposal. Admin submissions are approved and published
/// immediately.
#[utoipa::path(
    post,
    path = "/submit",
    tag = "submissions",
    request_body = SubmitRequest,
    responses(
        (status = 200, description = "Submission recorded", body = SubmissionEnvelope),
        (status = 400, description = "Validation error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn submit(
    State(state): State<SubmissionsState>,
    auth: Authenticated,
    Json(req): Json<SubmitRequest>,
) -> Result<Json<SubmissionEnvelope>, PlatformError> {
    let draft = SubmissionDraft {
        name: req.name,
        tagline: req.tagline,
        email: req.email,
        website: req.website,
        logo: req.logo,
        images: req.images,
        suggested_category: req.suggested_category,
        suggested_tags: req.suggested_tags,
        launch_date: req.launch_date,
    };

    let submission = state.submission_service.submit(draft, &auth.0).await?;

    let message = if submission.is_approved() {
        "Approved automatically (admin submitted)"
    } else {
        "Submitted successfully. Awaiting approval."
    };

    Ok(Json(SubmissionEnvelope {
        success: true,
        message: message.to_string(),
        submission: submission.into(),
    }))
}

/// Approve a submission (admin). Idempotent: re-approving returns the
/// existing record without creating a second product.
#[utoipa::path(
    put,
    path = "/approve/{id}",
    tag = "submissions",
    params(("id" = String, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "Submission approved", body = SubmissionEnvelope),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Submission not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn approve(
    State(state): State<SubmissionsState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<SubmissionEnvelope>, PlatformError> {
    let (submission, outcome) = state.submission_service.approve(&id).await?;

    let message = match outcome {
        ApproveOutcome::Approved => "Submission approved",
        ApproveOutcome::AlreadyApproved => "Already approved",
    };

    Ok(Json(SubmissionEnvelope {
        success: true,
        message: message.to_string(),
        submission: submission.into(),
    }))
}

/// Reject a submission (admin)
#[utoipa::path(
    put,
    path = "/reject/{id}",
    tag = "submissions",
    params(("id" = String, Path, description = "Submission ID")),
    request_body = RejectRequest,
    responses(
        (status = 200, description = "Submission rejected", body = SubmissionEnvelope),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Submission not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn reject(
    State(state): State<SubmissionsState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
    Json(req): Json<RejectRequest>,
) -> Result<Json<SubmissionEnvelope>, PlatformError> {
    let submission = state.submission_service.reject(&id, req.admin_notes).await?;

    Ok(Json(SubmissionEnvelope {
        success: true,
        message: "Submission rejected".to_string(),
        submission: submission.into(),
    }))
}

/// List all submissions, newest first (admin moderation queue)
#[utoipa::path(
    get,
    path = "/all",
    tag = "submissions",
    responses(
        (status = 200, description = "All submissions", body = [SubmissionResponse]),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_all(
    State(state): State<SubmissionsState>,
    _admin: RequireAdmin,
) -> Result<Json<Vec<SubmissionResponse>>, PlatformError> {
    let submissions = state.submission_repo.find_all().await?;
    Ok(Json(submissions.into_iter().map(Into::into).collect()))
}

/// List the caller's own submissions, newest first
#[utoipa::path(
    get,
    path = "/my",
    tag = "submissions",
    responses(
        (status = 200, description = "Own submissions", body = [SubmissionResponse]),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_mine(
    State(state): State<SubmissionsState>,
    auth: Authenticated,
) -> Result<Json<Vec<SubmissionResponse>>, PlatformError> {
    let submissions = state
        .submission_repo
        .find_by_submitter(auth.user_id())
        .await?;
    Ok(Json(submissions.into_iter().map(Into::into).collect()))
}

/// Create submissions router
pub fn submissions_router(state: SubmissionsState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(submit))
        .routes(routes!(approve))
        .routes(routes!(reject))
        .routes(routes!(list_all))
        .routes(routes!(list_mine))
        .with_state(state)
}
