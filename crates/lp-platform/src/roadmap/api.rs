//! Roadmap API

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::entity::{RoadmapItem, RoadmapStage};
use super::repository::RoadmapRepository;
use crate::shared::api_common::SuccessResponse;
use crate::shared::error::PlatformError;
use crate::shared::middleware::Authenticated;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoadmapRequest {
    pub product_id: String,
    pub title: String,
    pub description: Option<String>,
    pub stage: Option<RoadmapStage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoadmapRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub stage: Option<RoadmapStage>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapResponse {
    pub id: String,
    pub product: String,
    pub title: String,
    pub description: String,
    pub stage: RoadmapStage,
}

impl From<RoadmapItem> for RoadmapResponse {
    fn from(r: RoadmapItem) -> Self {
        Self {
            id: r.id,
            product: r.product,
            title: r.title,
            description: r.description,
            stage: r.stage,
        }
    }
}

#[derive(Clone)]
pub struct RoadmapsState {
    pub roadmap_repo: Arc<RoadmapRepository>,
}

pub async fn create_roadmap_item(
    State(state): State<RoadmapsState>,
    _auth: Authenticated,
    Json(req): Json<CreateRoadmapRequest>,
) -> Result<Json<RoadmapResponse>, PlatformError> {
    if req.product_id.trim().is_empty() || req.title.trim().is_empty() {
        return Err(PlatformError::validation("Product and title are required"));
    }

    let mut item = RoadmapItem::new(req.product_id, req.title);
    item.description = req.description.unwrap_or_default();
    item.stage = req.stage.unwrap_or_default();

    state.roadmap_repo.insert(&item).await?;

    Ok(Json(item.into()))
}

pub async fn list_roadmap(
    State(state): State<RoadmapsState>,
    Path(product_id): Path<String>,
) -> Result<Json<Vec<RoadmapResponse>>, PlatformError> {
    let items = state.roadmap_repo.find_by_product(&product_id).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

pub async fn update_roadmap_item(
    State(state): State<RoadmapsState>,
    _auth: Authenticated,
    Path(id): Path<String>,
    Json(req): Json<UpdateRoadmapRequest>,
) -> Result<Json<RoadmapResponse>, PlatformError> {
    let mut item = state
        .roadmap_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| PlatformError::not_found("RoadmapItem", &id))?;

    if let Some(title) = req.title {
        item.title = title;
    }
    if let Some(description) = req.description {
        item.description = description;
    }
    if let Some(stage) = req.stage {
        item.stage = stage;
    }

    state.roadmap_repo.update(&item).await?;

    Ok(Json(item.into()))
}

pub async fn delete_roadmap_item(
    State(state): State<RoadmapsState>,
    _auth: Authenticated,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, PlatformError> {
    if !state.roadmap_repo.delete(&id).await? {
        return Err(PlatformError::not_found("RoadmapItem", &id));
    }

    Ok(Json(SuccessResponse::with_message("Roadmap item deleted")))
}

pub fn roadmaps_router(state: RoadmapsState) -> Router {
    Router::new()
        .route("/create", post(create_roadmap_item))
        .route("/product/:productId", get(list_roadmap))
        .route("/update/:id", put(update_roadmap_item))
        .route("/delete/:id", delete(delete_roadmap_item))
        .with_state(state)
}
