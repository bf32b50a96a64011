//! Categories API
//!
//! Admin-managed catalog; reads are public.

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::entity::Category;
use super::repository::CategoryRepository;
use crate::shared::api_common::SuccessResponse;
use crate::shared::error::PlatformError;
use crate::shared::middleware::RequireAdmin;
use crate::shared::slug::slugify;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
    pub icon: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub icon: String,
    pub description: String,
    pub created_at: String,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
            icon: c.icon,
            description: c.description,
            created_at: c.created_at.to_rfc3339(),
        }
    }
}

#[derive(Clone)]
pub struct CategoriesState {
    pub category_repo: Arc<CategoryRepository>,
}

pub async fn create_category(
    State(state): State<CategoriesState>,
    _admin: RequireAdmin,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<Json<CategoryResponse>, PlatformError> {
    if req.name.trim().is_empty() {
        return Err(PlatformError::validation("Category name is required"));
    }

    let slug = slugify(&req.name);
    if state.category_repo.exists_by_slug(&slug).await? {
        return Err(PlatformError::duplicate("Category", "slug", &slug));
    }

    let mut category = Category::new(req.name, slug);
    category.icon = req.icon.unwrap_or_default();
    category.description = req.description.unwrap_or_default();

    state.category_repo.insert(&category).await?;

    Ok(Json(category.into()))
}

pub async fn update_category(
    State(state): State<CategoriesState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
    Json(req): Json<UpdateCategoryRequest>,
) -> Result<Json<CategoryResponse>, PlatformError> {
    let mut category = state
        .category_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| PlatformError::not_found("Category", &id))?;

    if let Some(name) = req.name {
        let slug = slugify(&name);
        if slug != category.slug && state.category_repo.exists_by_slug(&slug).await? {
            return Err(PlatformError::duplicate("Category", "slug", &slug));
        }
        category.name = name;
        category.slug = slug;
    }
    if let Some(icon) = req.icon {
        category.icon = icon;
    }
    if let Some(description) = req.description {
        category.description = description;
    }

    state.category_repo.update(&category).await?;

    Ok(Json(category.into()))
}

pub async fn delete_category(
    State(state): State<CategoriesState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, PlatformError> {
    if !state.category_repo.delete(&id).await? {
        return Err(PlatformError::not_found("Category", &id));
    }

    Ok(Json(SuccessResponse::with_message("Category deleted")))
}

pub async fn list_categories(
    State(state): State<CategoriesState>,
) -> Result<Json<Vec<CategoryResponse>>, PlatformError> {
    let categories = state.category_repo.find_all().await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

pub async fn get_category(
    State(state): State<CategoriesState>,
    Path(slug): Path<String>,
) -> Result<Json<CategoryResponse>, PlatformError> {
    let category = state
        .category_repo
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| PlatformError::not_found("Category", &slug))?;

    Ok(Json(category.into()))
}

pub fn categories_router(state: CategoriesState) -> Router {
    Router::new()
        .route("/create", post(create_category))
        .route("/update/:id", put(update_category))
        .route("/delete/:id", delete(delete_category))
        .route("/all", get(list_categories))
        .route("/:slug", get(get_category))
        .with_state(state)
}
