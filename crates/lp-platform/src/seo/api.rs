//! SEO Metadata API

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::entity::Seo;
use super::repository::SeoRepository;
use crate::shared::api_common::SuccessResponse;
use crate::shared::error::PlatformError;
use crate::shared::middleware::RequireAdmin;

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SeoFieldsRequest {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<Vec<String>>,
    pub canonical_url: Option<String>,
    pub og_image: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub twitter_card: Option<String>,
    pub schema_type: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoResponse {
    pub id: String,
    pub meta_title: String,
    pub meta_description: String,
    pub meta_keywords: Vec<String>,
    pub canonical_url: String,
    pub og_image: String,
    pub og_title: String,
    pub og_description: String,
    pub twitter_card: String,
    pub schema_type: String,
    pub created_at: String,
}

impl From<Seo> for SeoResponse {
    fn from(s: Seo) -> Self {
        Self {
            id: s.id,
            meta_title: s.meta_title,
            meta_description: s.meta_description,
            meta_keywords: s.meta_keywords,
            canonical_url: s.canonical_url,
            og_image: s.og_image,
            og_title: s.og_title,
            og_description: s.og_description,
            twitter_card: s.twitter_card,
            schema_type: s.schema_type,
            created_at: s.created_at.to_rfc3339(),
        }
    }
}

fn apply_fields(seo: &mut Seo, req: SeoFieldsRequest) {
    if let Some(meta_title) = req.meta_title {
        seo.meta_title = meta_title;
    }
    if let Some(meta_description) = req.meta_description {
        seo.meta_description = meta_description;
    }
    if let Some(meta_keywords) = req.meta_keywords {
        seo.meta_keywords = meta_keywords;
    }
    if let Some(canonical_url) = req.canonical_url {
        seo.canonical_url = canonical_url;
    }
    if let Some(og_image) = req.og_image {
        seo.og_image = og_image;
    }
    if let Some(og_title) = req.og_title {
        seo.og_title = og_title;
    }
    if let Some(og_description) = req.og_description {
        seo.og_description = og_description;
    }
    if let Some(twitter_card) = req.twitter_card {
        seo.twitter_card = twitter_card;
    }
    if let Some(schema_type) = req.schema_type {
        seo.schema_type = schema_type;
    }
}

#[derive(Clone)]
pub struct SeoState {
    pub seo_repo: Arc<SeoRepository>,
}

pub async fn create_seo(
    State(state): State<SeoState>,
    _admin: RequireAdmin,
    Json(req): Json<SeoFieldsRequest>,
) -> Result<Json<SeoResponse>, PlatformError> {
    let mut seo = Seo::new();
    apply_fields(&mut seo, req);

    state.seo_repo.insert(&seo).await?;

    Ok(Json(seo.into()))
}

pub async fn update_seo(
    State(state): State<SeoState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
    Json(req): Json<SeoFieldsRequest>,
) -> Result<Json<SeoResponse>, PlatformError> {
    let mut seo = state
        .seo_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| PlatformError::not_found("Seo", &id))?;

    apply_fields(&mut seo, req);
    state.seo_repo.update(&seo).await?;

    Ok(Json(seo.into()))
}

pub async fn delete_seo(
    State(state): State<SeoState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, PlatformError> {
    if !state.seo_repo.delete(&id).await? {
        return Err(PlatformError::not_found("Seo", &id));
    }

    Ok(Json(SuccessResponse::with_message("SEO entry deleted")))
}

pub async fn list_seo(
    State(state): State<SeoState>,
    _admin: RequireAdmin,
) -> Result<Json<Vec<SeoResponse>>, PlatformError> {
    let entries = state.seo_repo.find_all().await?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

pub async fn get_seo(
    State(state): State<SeoState>,
    Path(id): Path<String>,
) -> Result<Json<SeoResponse>, PlatformError> {
    let seo = state
        .seo_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| PlatformError::not_found("Seo", &id))?;

    Ok(Json(seo.into()))
}

pub fn seo_router(state: SeoState) -> Router {
    Router::new()
        .route("/create", post(create_seo))
        .route("/update/:id", put(update_seo))
        .route("/delete/:id", delete(delete_seo))
        .route("/all", get(list_seo))
        .route("/:id", get(get_seo))
        .with_state(state)
}
