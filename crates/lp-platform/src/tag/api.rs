//! Tags API

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::entity::Tag;
use super::repository::TagRepository;
use crate::shared::api_common::SuccessResponse;
use crate::shared::error::PlatformError;
use crate::shared::middleware::RequireAdmin;
use crate::shared::slug::slugify;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTagRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTagRequest {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
}

impl From<Tag> for TagResponse {
    fn from(t: Tag) -> Self {
        Self {
            id: t.id,
            name: t.name,
            slug: t.slug,
        }
    }
}

#[derive(Clone)]
pub struct TagsState {
    pub tag_repo: Arc<TagRepository>,
}

pub async fn create_tag(
    State(state): State<TagsState>,
    _admin: RequireAdmin,
    Json(req): Json<CreateTagRequest>,
) -> Result<Json<TagResponse>, PlatformError> {
    if req.name.trim().is_empty() {
        return Err(PlatformError::validation("Tag name is required"));
    }

    let slug = slugify(&req.name);
    if state.tag_repo.exists_by_slug(&slug).await? {
        return Err(PlatformError::duplicate("Tag", "slug", &slug));
    }

    let tag = Tag::new(req.name, slug);
    state.tag_repo.insert(&tag).await?;

    Ok(Json(tag.into()))
}

pub async fn update_tag(
    State(state): State<TagsState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
    Json(req): Json<UpdateTagRequest>,
) -> Result<Json<TagResponse>, PlatformError> {
    let mut tag = state
        .tag_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| PlatformError::not_found("Tag", &id))?;

    if let Some(name) = req.name {
        let slug = slugify(&name);
        if slug != tag.slug && state.tag_repo.exists_by_slug(&slug).await? {
            return Err(PlatformError::duplicate("Tag", "slug", &slug));
        }
        tag.name = name;
        tag.slug = slug;
    }

    state.tag_repo.update(&tag).await?;

    Ok(Json(tag.into()))
}

pub async fn delete_tag(
    State(state): State<TagsState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, PlatformError> {
    if !state.tag_repo.delete(&id).await? {
        return Err(PlatformError::not_found("Tag", &id));
    }

    Ok(Json(SuccessResponse::with_message("Tag deleted")))
}

pub async fn list_tags(
    State(state): State<TagsState>,
) -> Result<Json<Vec<TagResponse>>, PlatformError> {
    let tags = state.tag_repo.find_all().await?;
    Ok(Json(tags.into_iter().map(Into::into).collect()))
}

pub async fn get_tag(
    State(state): State<TagsState>,
    Path(slug): Path<String>,
) -> Result<Json<TagResponse>, PlatformError> {
    let tag = state
        .tag_repo
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| PlatformError::not_found("Tag", &slug))?;

    Ok(Json(tag.into()))
}

pub fn tags_router(state: TagsState) -> Router {
    Router::new()
        .route("/create", post(create_tag))
        .route("/update/:id", put(update_tag))
        .route("/delete/:id", delete(delete_tag))
        .route("/all", get(list_tags))
        .route("/:slug", get(get_tag))
        .with_state(state)
}
