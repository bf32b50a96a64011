//! FAQs API

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::entity::Faq;
use super::repository::FaqRepository;
use crate::shared::api_common::SuccessResponse;
use crate::shared::error::PlatformError;
use crate::shared::middleware::RequireAdmin;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFaqRequest {
    pub product_id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFaqRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqResponse {
    pub id: String,
    pub product: String,
    pub question: String,
    pub answer: String,
}

impl From<Faq> for FaqResponse {
    fn from(f: Faq) -> Self {
        Self {
            id: f.id,
            product: f.product,
            question: f.question,
            answer: f.answer,
        }
    }
}

#[derive(Clone)]
pub struct FaqsState {
    pub faq_repo: Arc<FaqRepository>,
}

pub async fn create_faq(
    State(state): State<FaqsState>,
    _admin: RequireAdmin,
    Json(req): Json<CreateFaqRequest>,
) -> Result<Json<FaqResponse>, PlatformError> {
    if req.product_id.trim().is_empty()
        || req.question.trim().is_empty()
        || req.answer.trim().is_empty()
    {
        return Err(PlatformError::validation(
            "Product, question and answer are required",
        ));
    }

    let faq = Faq::new(req.product_id, req.question, req.answer);
    state.faq_repo.insert(&faq).await?;

    Ok(Json(faq.into()))
}

pub async fn list_faqs(
    State(state): State<FaqsState>,
    Path(product_id): Path<String>,
) -> Result<Json<Vec<FaqResponse>>, PlatformError> {
    let faqs = state.faq_repo.find_by_product(&product_id).await?;
    Ok(Json(faqs.into_iter().map(Into::into).collect()))
}

pub async fn update_faq(
    State(state): State<FaqsState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
    Json(req): Json<UpdateFaqRequest>,
) -> Result<Json<FaqResponse>, PlatformError> {
    let mut faq = state
        .faq_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| PlatformError::not_found("Faq", &id))?;

    if let Some(question) = req.question {
        faq.question = question;
    }
    if let Some(answer) = req.answer {
        faq.answer = answer;
    }

    state.faq_repo.update(&faq).await?;

    Ok(Json(faq.into()))
}

pub async fn delete_faq(
    State(state): State<FaqsState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, PlatformError> {
    if !state.faq_repo.delete(&id).await? {
        return Err(PlatformError::not_found("Faq", &id));
    }

    Ok(Json(SuccessResponse::with_message("FAQ deleted")))
}

pub fn faqs_router(state: FaqsState) -> Router {
    Router::new()
        .route("/create", post(create_faq))
        .route("/product/:productId", get(list_faqs))
        .route("/update/:id", put(update_faq))
        .route("/delete/:id", delete(delete_faq))
        .with_state(state)
}
