//! Reviews API
//!
//! Add/update is an upsert per (product, user); the product's average
//! rating is recomputed over the full review set after every mutation.

use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::entity::{average_rating, Review};
use super::repository::ReviewRepository;
use crate::product::repository::ProductRepository;
use crate::shared::api_common::SuccessResponse;
use crate::shared::error::PlatformError;
use crate::shared::middleware::Authenticated;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddReviewRequest {
    pub rating: i32,
    pub title: Option<String>,
    pub review: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: String,
    pub product: String,
    pub user: String,
    pub rating: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    pub created_at: String,
}

impl From<Review> for ReviewResponse {
    fn from(r: Review) -> Self {
        Self {
            id: r.id,
            product: r.product,
            user: r.user,
            rating: r.rating,
            title: r.title,
            review: r.review,
            created_at: r.created_at.to_rfc3339(),
        }
    }
}

#[derive(Clone)]
pub struct ReviewsState {
    pub review_repo: Arc<ReviewRepository>,
    pub product_repo: Arc<ProductRepository>,
}

async fn recompute_average(state: &ReviewsState, product: &str) -> Result<(), PlatformError> {
    let reviews = state.review_repo.find_by_product(product).await?;
    state
        .product_repo
        .set_avg_rating(product, average_rating(&reviews))
        .await?;
    Ok(())
}

pub async fn add_review(
    State(state): State<ReviewsState>,
    auth: Authenticated,
    Path(product_id): Path<String>,
    Json(req): Json<AddReviewRequest>,
) -> Result<Json<SuccessResponse>, PlatformError> {
    if !(1..=5).contains(&req.rating) {
        return Err(PlatformError::validation("Rating must be between 1 and 5"));
    }

    match state
        .review_repo
        .find_by_product_and_user(&product_id, auth.user_id())
        .await?
    {
        Some(mut existing) => {
            existing.rating = req.rating;
            existing.title = req.title;
            existing.review = req.review;
            state.review_repo.update(&existing).await?;
        }
        None => {
            let mut review = Review::new(&product_id, auth.user_id(), req.rating);
            review.title = req.title;
            review.review = req.review;
            state.review_repo.insert(&review).await?;
        }
    }

    recompute_average(&state, &product_id).await?;

    Ok(Json(SuccessResponse::with_message("Review submitted")))
}

pub async fn list_reviews(
    State(state): State<ReviewsState>,
    Path(product_id): Path<String>,
) -> Result<Json<Vec<ReviewResponse>>, PlatformError> {
    let reviews = state.review_repo.find_by_product(&product_id).await?;
    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}

pub async fn delete_review(
    State(state): State<ReviewsState>,
    auth: Authenticated,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, PlatformError> {
    let review = state
        .review_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| PlatformError::not_found("Review", &id))?;

    if !auth.is_admin() && review.user != auth.user_id() {
        return Err(PlatformError::forbidden("Not allowed to delete this review"));
    }

    state.review_repo.delete(&id).await?;
    recompute_average(&state, &review.product).await?;

    Ok(Json(SuccessResponse::with_message("Review deleted")))
}

pub fn reviews_router(state: ReviewsState) -> Router {
    Router::new()
        .route("/add/:productId", post(add_review))
        .route("/delete/:id", delete(delete_review))
        .route("/:productId", get(list_reviews))
        .with_state(state)
}
