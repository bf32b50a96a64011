//! Product Updates API

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::entity::ProductUpdate;
use super::repository::ProductUpdateRepository;
use crate::shared::api_common::SuccessResponse;
use crate::shared::error::PlatformError;
use crate::shared::middleware::Authenticated;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUpdateRequest {
    pub product_id: String,
    pub title: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditUpdateRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub id: String,
    pub product: String,
    pub title: String,
    pub description: String,
    pub version: String,
    pub created_at: String,
}

impl From<ProductUpdate> for UpdateResponse {
    fn from(u: ProductUpdate) -> Self {
        Self {
            id: u.id,
            product: u.product,
            title: u.title,
            description: u.description,
            version: u.version,
            created_at: u.created_at.to_rfc3339(),
        }
    }
}

#[derive(Clone)]
pub struct ProductUpdatesState {
    pub update_repo: Arc<ProductUpdateRepository>,
}

pub async fn create_update(
    State(state): State<ProductUpdatesState>,
    _auth: Authenticated,
    Json(req): Json<CreateUpdateRequest>,
) -> Result<Json<UpdateResponse>, PlatformError> {
    if req.product_id.trim().is_empty() || req.title.trim().is_empty() {
        return Err(PlatformError::validation("Product and title are required"));
    }

    let mut update = ProductUpdate::new(req.product_id, req.title);
    if let Some(description) = req.description {
        update.description = description;
    }
    if let Some(version) = req.version {
        update.version = version;
    }

    state.update_repo.insert(&update).await?;

    Ok(Json(update.into()))
}

pub async fn list_updates(
    State(state): State<ProductUpdatesState>,
    Path(product_id): Path<String>,
) -> Result<Json<Vec<UpdateResponse>>, PlatformError> {
    let updates = state.update_repo.find_by_product(&product_id).await?;
    Ok(Json(updates.into_iter().map(Into::into).collect()))
}

pub async fn edit_update(
    State(state): State<ProductUpdatesState>,
    _auth: Authenticated,
    Path(id): Path<String>,
    Json(req): Json<EditUpdateRequest>,
) -> Result<Json<UpdateResponse>, PlatformError> {
    let mut update = state
        .update_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| PlatformError::not_found("ProductUpdate", &id))?;

    if let Some(title) = req.title {
        update.title = title;
    }
    if let Some(description) = req.description {
        update.description = description;
    }
    if let Some(version) = req.version {
        update.version = version;
    }

    state.update_repo.update(&update).await?;

    Ok(Json(update.into()))
}

pub async fn delete_update(
    State(state): State<ProductUpdatesState>,
    _auth: Authenticated,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, PlatformError> {
    if !state.update_repo.delete(&id).await? {
        return Err(PlatformError::not_found("ProductUpdate", &id));
    }

    Ok(Json(SuccessResponse::with_message("Update deleted")))
}

pub fn product_updates_router(state: ProductUpdatesState) -> Router {
    Router::new()
        .route("/create", post(create_update))
        .route("/product/:productId", get(list_updates))
        .route("/update/:id", put(edit_update))
        .route("/delete/:id", delete(delete_update))
        .with_state(state)
}
