//! Follows API

use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use super::entity::Follow;
use super::repository::FollowRepository;
use crate::shared::api_common::SuccessResponse;
use crate::shared::error::PlatformError;
use crate::shared::middleware::Authenticated;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowResponse {
    pub id: String,
    pub follower: String,
    pub following: String,
    pub created_at: String,
}

impl From<Follow> for FollowResponse {
    fn from(f: Follow) -> Self {
        Self {
            id: f.id,
            follower: f.follower,
            following: f.following,
            created_at: f.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowCheckResponse {
    pub following: bool,
}

#[derive(Clone)]
pub struct FollowsState {
    pub follow_repo: Arc<FollowRepository>,
}

pub async fn follow_user(
    State(state): State<FollowsState>,
    auth: Authenticated,
    Path(user_id): Path<String>,
) -> Result<Json<SuccessResponse>, PlatformError> {
    if auth.user_id() == user_id {
        return Err(PlatformError::validation("You cannot follow yourself"));
    }

    if state
        .follow_repo
        .find_pair(auth.user_id(), &user_id)
        .await?
        .is_some()
    {
        return Err(PlatformError::duplicate("Follow", "following", &user_id));
    }

    let follow = Follow::new(auth.user_id(), &user_id);
    state.follow_repo.insert(&follow).await?;

    Ok(Json(SuccessResponse::with_message("User followed")))
}

pub async fn unfollow_user(
    State(state): State<FollowsState>,
    auth: Authenticated,
    Path(user_id): Path<String>,
) -> Result<Json<SuccessResponse>, PlatformError> {
    if !state
        .follow_repo
        .delete_pair(auth.user_id(), &user_id)
        .await?
    {
        return Err(PlatformError::not_found("Follow", &user_id));
    }

    Ok(Json(SuccessResponse::with_message("User unfollowed")))
}

pub async fn list_followers(
    State(state): State<FollowsState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<FollowResponse>>, PlatformError> {
    let followers = state.follow_repo.find_followers(&user_id).await?;
    Ok(Json(followers.into_iter().map(Into::into).collect()))
}

pub async fn list_following(
    State(state): State<FollowsState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<FollowResponse>>, PlatformError> {
    let following = state.follow_repo.find_following(&user_id).await?;
    Ok(Json(following.into_iter().map(Into::into).collect()))
}

pub async fn check_following(
    State(state): State<FollowsState>,
    auth: Authenticated,
    Path(user_id): Path<String>,
) -> Result<Json<FollowCheckResponse>, PlatformError> {
    let following = state
        .follow_repo
        .find_pair(auth.user_id(), &user_id)
        .await?
        .is_some();

    Ok(Json(FollowCheckResponse { following }))
}

pub fn follows_router(state: FollowsState) -> Router {
    Router::new()
        .route("/follow/:userId", post(follow_user))
        .route("/unfollow/:userId", delete(unfollow_user))
        .route("/followers/:userId", get(list_followers))
        .route("/following/:userId", get(list_following))
        .route("/check/:userId", get(check_following))
        .with_state(state)
}
