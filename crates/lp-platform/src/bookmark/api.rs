//! Bookmarks API

use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::entity::Bookmark;
use super::repository::BookmarkRepository;
use crate::shared::api_common::SuccessResponse;
use crate::shared::error::PlatformError;
use crate::shared::middleware::Authenticated;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBookmarkRequest {
    pub product_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkResponse {
    pub id: String,
    pub user: String,
    pub product: String,
    pub created_at: String,
}

impl From<Bookmark> for BookmarkResponse {
    fn from(b: Bookmark) -> Self {
        Self {
            id: b.id,
            user: b.user,
            product: b.product,
            created_at: b.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkCheckResponse {
    pub bookmarked: bool,
}

#[derive(Clone)]
pub struct BookmarksState {
    pub bookmark_repo: Arc<BookmarkRepository>,
}

pub async fn add_bookmark(
    State(state): State<BookmarksState>,
    auth: Authenticated,
    Json(req): Json<AddBookmarkRequest>,
) -> Result<Json<BookmarkResponse>, PlatformError> {
    if req.product_id.trim().is_empty() {
        return Err(PlatformError::validation("Product ID is required"));
    }

    if state
        .bookmark_repo
        .find_pair(auth.user_id(), &req.product_id)
        .await?
        .is_some()
    {
        return Err(PlatformError::duplicate("Bookmark", "product", &req.product_id));
    }

    let bookmark = Bookmark::new(auth.user_id(), &req.product_id);
    state.bookmark_repo.insert(&bookmark).await?;

    Ok(Json(bookmark.into()))
}

pub async fn remove_bookmark(
    State(state): State<BookmarksState>,
    auth: Authenticated,
    Path(product_id): Path<String>,
) -> Result<Json<SuccessResponse>, PlatformError> {
    if !state
        .bookmark_repo
        .delete_pair(auth.user_id(), &product_id)
        .await?
    {
        return Err(PlatformError::not_found("Bookmark", &product_id));
    }

    Ok(Json(SuccessResponse::with_message("Bookmark removed")))
}

pub async fn list_my_bookmarks(
    State(state): State<BookmarksState>,
    auth: Authenticated,
) -> Result<Json<Vec<BookmarkResponse>>, PlatformError> {
    let bookmarks = state.bookmark_repo.find_by_user(auth.user_id()).await?;
    Ok(Json(bookmarks.into_iter().map(Into::into).collect()))
}

pub async fn check_bookmark(
    State(state): State<BookmarksState>,
    auth: Authenticated,
    Path(product_id): Path<String>,
) -> Result<Json<BookmarkCheckResponse>, PlatformError> {
    let bookmarked = state
        .bookmark_repo
        .find_pair(auth.user_id(), &product_id)
        .await?
        .is_some();

    Ok(Json(BookmarkCheckResponse { bookmarked }))
}

pub fn bookmarks_router(state: BookmarksState) -> Router {
    Router::new()
        .route("/add", post(add_bookmark))
        .route("/remove/:productId", delete(remove_bookmark))
        .route("/my", get(list_my_bookmarks))
        .route("/check/:productId", get(check_bookmark))
        .with_state(state)
}
