//! Badges API

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::entity::Badge;
use super::repository::BadgeRepository;
use crate::shared::api_common::SuccessResponse;
use crate::shared::error::PlatformError;
use crate::shared::middleware::RequireAdmin;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBadgeRequest {
    pub name: String,
    pub icon: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBadgeRequest {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeResponse {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl From<Badge> for BadgeResponse {
    fn from(b: Badge) -> Self {
        Self {
            id: b.id,
            name: b.name,
            icon: b.icon,
            color: b.color,
        }
    }
}

#[derive(Clone)]
pub struct BadgesState {
    pub badge_repo: Arc<BadgeRepository>,
}

pub async fn create_badge(
    State(state): State<BadgesState>,
    _admin: RequireAdmin,
    Json(req): Json<CreateBadgeRequest>,
) -> Result<Json<BadgeResponse>, PlatformError> {
    if req.name.trim().is_empty() {
        return Err(PlatformError::validation("Badge name is required"));
    }

    let mut badge = Badge::new(req.name);
    if let Some(icon) = req.icon {
        badge.icon = icon;
    }
    if let Some(color) = req.color {
        badge.color = color;
    }

    state.badge_repo.insert(&badge).await?;

    Ok(Json(badge.into()))
}

pub async fn update_badge(
    State(state): State<BadgesState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
    Json(req): Json<UpdateBadgeRequest>,
) -> Result<Json<BadgeResponse>, PlatformError> {
    let mut badge = state
        .badge_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| PlatformError::not_found("Badge", &id))?;

    if let Some(name) = req.name {
        badge.name = name;
    }
    if let Some(icon) = req.icon {
        badge.icon = icon;
    }
    if let Some(color) = req.color {
        badge.color = color;
    }

    state.badge_repo.update(&badge).await?;

    Ok(Json(badge.into()))
}

pub async fn delete_badge(
    State(state): State<BadgesState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, PlatformError> {
    if !state.badge_repo.delete(&id).await? {
        return Err(PlatformError::not_found("Badge", &id));
    }

    Ok(Json(SuccessResponse::with_message("Badge deleted")))
}

pub async fn list_badges(
    State(state): State<BadgesState>,
) -> Result<Json<Vec<BadgeResponse>>, PlatformError> {
    let badges = state.badge_repo.find_all().await?;
    Ok(Json(badges.into_iter().map(Into::into).collect()))
}

pub async fn get_badge(
    State(state): State<BadgesState>,
    Path(id): Path<String>,
) -> Result<Json<BadgeResponse>, PlatformError> {
    let badge = state
        .badge_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| PlatformError::not_found("Badge", &id))?;

    Ok(Json(badge.into()))
}

pub fn badges_router(state: BadgesState) -> Router {
    Router::new()
        .route("/create", post(create_badge))
        .route("/update/:id", put(update_badge))
        .route("/delete/:id", delete(delete_badge))
        .route("/all", get(list_badges))
        .route("/:id", get(get_badge))
        .with_state(state)
}
