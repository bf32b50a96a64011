//! Votes API
//!
//! Cast endpoint with identity-or-IP uniqueness; the product's vote counter
//! is a full recount persisted after every mutation.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::HeaderMap,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use super::entity::Vote;
use super::repository::VoteRepository;
use crate::product::repository::ProductRepository;
use crate::shared::api_common::SuccessResponse;
use crate::shared::error::{is_duplicate_key, PlatformError};
use crate::shared::middleware::{OptionalAuth, RequireAdmin};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteRequest {
    pub product_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteResponse {
    pub success: bool,
    pub message: String,
    pub votes_count: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteCountResponse {
    pub product_id: String,
    pub votes_count: u64,
}

#[derive(Clone)]
pub struct VotesState {
    pub vote_repo: Arc<VoteRepository>,
    pub product_repo: Arc<ProductRepository>,
}

/// Resolve the caller's IP, preferring proxy headers over the socket peer.
fn client_ip(headers: &HeaderMap, addr: &SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| addr.ip().to_string())
}

pub async fn cast_vote(
    State(state): State<VotesState>,
    auth: OptionalAuth,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(req): Json<CastVoteRequest>,
) -> Result<Json<CastVoteResponse>, PlatformError> {
    if req.product_id.trim().is_empty() {
        return Err(PlatformError::validation("Product ID is required"));
    }
    if !state.product_repo.exists(&req.product_id).await? {
        return Err(PlatformError::not_found("Product", &req.product_id));
    }

    // Identity comes from the verified token when present, else the IP
    let (vote, identity) = match auth.as_ref() {
        Some(claims) => {
            let user_id = claims.user_id();
            if state
                .vote_repo
                .find_by_product_and_user(&req.product_id, user_id)
                .await?
                .is_some()
            {
                return Err(PlatformError::duplicate("Vote", "user", user_id));
            }
            (Vote::by_user(&req.product_id, user_id), user_id.to_string())
        }
        None => {
            let ip = client_ip(&headers, &addr);
            if state
                .vote_repo
                .find_by_product_and_ip(&req.product_id, &ip)
                .await?
                .is_some()
            {
                return Err(PlatformError::duplicate("Vote", "ip", &ip));
            }
            (Vote::by_ip(&req.product_id, &ip), ip)
        }
    };

    // The unique index catches votes that race past the check above
    state.vote_repo.insert(&vote).await.map_err(|e| match e {
        PlatformError::Database(ref db) if is_duplicate_key(db) => {
            PlatformError::duplicate("Vote", "identity", &identity)
        }
        other => other,
    })?;

    let votes_count = state.vote_repo.count_by_product(&req.product_id).await?;
    state
        .product_repo
        .set_votes(&req.product_id, votes_count as i64)
        .await?;
    info!(product_id = %req.product_id, votes = votes_count, "Vote cast");

    Ok(Json(CastVoteResponse {
        success: true,
        message: "Vote cast successfully".to_string(),
        votes_count,
    }))
}

pub async fn get_vote_count(
    State(state): State<VotesState>,
    Path(product_id): Path<String>,
) -> Result<Json<VoteCountResponse>, PlatformError> {
    let votes_count = state.vote_repo.count_by_product(&product_id).await?;
    Ok(Json(VoteCountResponse {
        product_id,
        votes_count,
    }))
}

pub async fn delete_vote(
    State(state): State<VotesState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, PlatformError> {
    let vote = state
        .vote_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| PlatformError::not_found("Vote", &id))?;

    state.vote_repo.delete(&id).await?;

    let votes_count = state.vote_repo.count_by_product(&vote.product).await?;
    state
        .product_repo
        .set_votes(&vote.product, votes_count as i64)
        .await?;

    Ok(Json(SuccessResponse::with_message("Vote deleted")))
}

pub fn votes_router(state: VotesState) -> Router {
    Router::new()
        .route("/cast", post(cast_vote))
        .route("/product/:productId", get(get_vote_count))
        .route("/delete/:id", delete(delete_vote))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_ip_prefers_forwarded_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "203.0.113.7, 10.0.0.1".parse().unwrap());
        let addr: SocketAddr = "127.0.0.1:9999".parse().unwrap();
        assert_eq!(client_ip(&headers, &addr), "203.0.113.7");
    }

    #[test]
    fn test_client_ip_falls_back_to_socket() {
        let headers = HeaderMap::new();
        let addr: SocketAddr = "192.0.2.4:1234".parse().unwrap();
        assert_eq!(client_ip(&headers, &addr), "192.0.2.4");
    }
}
