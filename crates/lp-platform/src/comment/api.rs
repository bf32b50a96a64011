//! Comments API

use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::entity::{Comment, Reply};
use super::repository::CommentRepository;
use crate::shared::api_common::SuccessResponse;
use crate::shared::error::PlatformError;
use crate::shared::middleware::{OptionalAuth, RequireAdmin};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    pub product_id: String,
    pub message: String,
    /// Display name for anonymous commenters
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddReplyRequest {
    pub message: String,
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub message: String,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub product: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub message: String,
    pub replies: Vec<ReplyResponse>,
    pub created_at: String,
}

impl From<Comment> for CommentResponse {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            product: c.product,
            user: c.user,
            name: c.name,
            message: c.message,
            replies: c
                .replies
                .into_iter()
                .map(|r| ReplyResponse {
                    user: r.user,
                    name: r.name,
                    message: r.message,
                    created_at: r.created_at.to_rfc3339(),
                })
                .collect(),
            created_at: c.created_at.to_rfc3339(),
        }
    }
}

#[derive(Clone)]
pub struct CommentsState {
    pub comment_repo: Arc<CommentRepository>,
}

pub async fn add_comment(
    State(state): State<CommentsState>,
    auth: OptionalAuth,
    Json(req): Json<AddCommentRequest>,
) -> Result<Json<CommentResponse>, PlatformError> {
    if req.product_id.trim().is_empty() || req.message.trim().is_empty() {
        return Err(PlatformError::validation("Product and message are required"));
    }

    let mut comment = Comment::new(req.product_id, req.message);
    comment.name = req.name;
    comment.user = auth.as_ref().map(|claims| claims.user_id().to_string());

    state.comment_repo.insert(&comment).await?;

    Ok(Json(comment.into()))
}

pub async fn add_reply(
    State(state): State<CommentsState>,
    auth: OptionalAuth,
    Path(comment_id): Path<String>,
    Json(req): Json<AddReplyRequest>,
) -> Result<Json<CommentResponse>, PlatformError> {
    if req.message.trim().is_empty() {
        return Err(PlatformError::validation("Message is required"));
    }

    let mut comment = state
        .comment_repo
        .find_by_id(&comment_id)
        .await?
        .ok_or_else(|| PlatformError::not_found("Comment", &comment_id))?;

    comment.add_reply(Reply {
        user: auth.as_ref().map(|claims| claims.user_id().to_string()),
        name: req.name,
        message: req.message,
        created_at: Utc::now(),
    });

    state.comment_repo.update(&comment).await?;

    Ok(Json(comment.into()))
}

pub async fn list_comments(
    State(state): State<CommentsState>,
    Path(product_id): Path<String>,
) -> Result<Json<Vec<CommentResponse>>, PlatformError> {
    let comments = state.comment_repo.find_by_product(&product_id).await?;
    Ok(Json(comments.into_iter().map(Into::into).collect()))
}

pub async fn delete_comment(
    State(state): State<CommentsState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, PlatformError> {
    if !state.comment_repo.delete(&id).await? {
        return Err(PlatformError::not_found("Comment", &id));
    }

    Ok(Json(SuccessResponse::with_message("Comment deleted")))
}

pub fn comments_router(state: CommentsState) -> Router {
    Router::new()
        .route("/add", post(add_comment))
        .route("/reply/:commentId", post(add_reply))
        .route("/product/:productId", get(list_comments))
        .route("/delete/:id", delete(delete_comment))
        .with_state(state)
}
