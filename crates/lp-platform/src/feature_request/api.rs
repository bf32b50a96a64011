//! Feature Requests API

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::entity::{FeatureRequest, FeatureStatus};
use super::repository::FeatureRequestRepository;
use crate::shared::api_common::SuccessResponse;
use crate::shared::error::PlatformError;
use crate::shared::middleware::{Authenticated, RequireAdmin};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeatureRequest {
    pub product_id: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub status: FeatureStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureResponse {
    pub id: String,
    pub product: String,
    pub title: String,
    pub description: String,
    pub votes: i64,
    pub status: FeatureStatus,
}

impl From<FeatureRequest> for FeatureResponse {
    fn from(f: FeatureRequest) -> Self {
        Self {
            id: f.id,
            product: f.product,
            title: f.title,
            description: f.description,
            votes: f.votes,
            status: f.status,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureVoteResponse {
    pub success: bool,
    pub votes: i64,
}

#[derive(Clone)]
pub struct FeatureRequestsState {
    pub feature_repo: Arc<FeatureRequestRepository>,
}

pub async fn create_feature(
    State(state): State<FeatureRequestsState>,
    _auth: Authenticated,
    Json(req): Json<CreateFeatureRequest>,
) -> Result<Json<FeatureResponse>, PlatformError> {
    if req.product_id.trim().is_empty()
        || req.title.trim().is_empty()
        || req.description.trim().is_empty()
    {
        return Err(PlatformError::validation(
            "Product, title and description are required",
        ));
    }

    let feature = FeatureRequest::new(req.product_id, req.title, req.description);
    state.feature_repo.insert(&feature).await?;

    Ok(Json(feature.into()))
}

pub async fn list_features(
    State(state): State<FeatureRequestsState>,
    Path(product_id): Path<String>,
) -> Result<Json<Vec<FeatureResponse>>, PlatformError> {
    let features = state.feature_repo.find_by_product(&product_id).await?;
    Ok(Json(features.into_iter().map(Into::into).collect()))
}

pub async fn vote_feature(
    State(state): State<FeatureRequestsState>,
    _auth: Authenticated,
    Path(id): Path<String>,
) -> Result<Json<FeatureVoteResponse>, PlatformError> {
    let feature = state
        .feature_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| PlatformError::not_found("FeatureRequest", &id))?;

    state.feature_repo.increment_votes(&id).await?;

    Ok(Json(FeatureVoteResponse {
        success: true,
        votes: feature.votes + 1,
    }))
}

pub async fn update_feature_status(
    State(state): State<FeatureRequestsState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<FeatureResponse>, PlatformError> {
    let mut feature = state
        .feature_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| PlatformError::not_found("FeatureRequest", &id))?;

    feature.status = req.status;
    state.feature_repo.update(&feature).await?;

    Ok(Json(feature.into()))
}

pub async fn delete_feature(
    State(state): State<FeatureRequestsState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, PlatformError> {
    if !state.feature_repo.delete(&id).await? {
        return Err(PlatformError::not_found("FeatureRequest", &id));
    }

    Ok(Json(SuccessResponse::with_message("Feature request deleted")))
}

pub fn feature_requests_router(state: FeatureRequestsState) -> Router {
    Router::new()
        .route("/create", post(create_feature))
        .route("/product/:productId", get(list_features))
        .route("/vote/:id", post(vote_feature))
        .route("/update-status/:id", put(update_feature_status))
        .route("/delete/:id", delete(delete_feature))
        .with_state(state)
}
