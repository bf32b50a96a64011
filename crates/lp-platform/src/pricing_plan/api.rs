//! Pricing Plans API
//!
//! Plans are attached to their product on create and detached on delete.

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::entity::{BillingInterval, PricingPlan};
use super::repository::PricingPlanRepository;
use crate::product::repository::ProductRepository;
use crate::shared::api_common::SuccessResponse;
use crate::shared::error::PlatformError;
use crate::shared::middleware::RequireAdmin;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanRequest {
    pub product: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub interval: Option<BillingInterval>,
    #[serde(default)]
    pub features: Vec<String>,
    pub trial_days: Option<i64>,
    pub availability: Option<String>,
    pub sku: Option<String>,
    pub url: Option<String>,
    pub active: Option<bool>,
}

/// The mutable field set; the owning product reference is fixed at create.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlanRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub interval: Option<BillingInterval>,
    pub features: Option<Vec<String>>,
    pub trial_days: Option<i64>,
    pub availability: Option<String>,
    pub sku: Option<String>,
    pub url: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub id: String,
    pub product: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub currency: String,
    pub interval: BillingInterval,
    pub features: Vec<String>,
    pub trial_days: i64,
    pub availability: String,
    pub sku: String,
    pub url: String,
    pub active: bool,
    pub created_at: String,
}

impl From<PricingPlan> for PlanResponse {
    fn from(p: PricingPlan) -> Self {
        Self {
            id: p.id,
            product: p.product,
            name: p.name,
            description: p.description,
            price: p.price,
            currency: p.currency,
            interval: p.interval,
            features: p.features,
            trial_days: p.trial_days,
            availability: p.availability,
            sku: p.sku,
            url: p.url,
            active: p.active,
            created_at: p.created_at.to_rfc3339(),
        }
    }
}

#[derive(Clone)]
pub struct PricingPlansState {
    pub plan_repo: Arc<PricingPlanRepository>,
    pub product_repo: Arc<ProductRepository>,
}

pub async fn create_plan(
    State(state): State<PricingPlansState>,
    _admin: RequireAdmin,
    Json(req): Json<CreatePlanRequest>,
) -> Result<Json<PlanResponse>, PlatformError> {
    if req.product.trim().is_empty() || req.name.trim().is_empty() {
        return Err(PlatformError::validation("Product and name are required"));
    }

    if !state.product_repo.exists(&req.product).await? {
        return Err(PlatformError::not_found("Product", &req.product));
    }

    let mut plan = PricingPlan::new(req.product, req.name);
    if let Some(description) = req.description {
        plan.description = description;
    }
    if let Some(price) = req.price {
        plan.price = price;
    }
    if let Some(currency) = req.currency {
        plan.currency = currency;
    }
    if let Some(interval) = req.interval {
        plan.interval = interval;
    }
    plan.features = req.features;
    if let Some(trial_days) = req.trial_days {
        plan.trial_days = trial_days;
    }
    if let Some(availability) = req.availability {
        plan.availability = availability;
    }
    if let Some(sku) = req.sku {
        plan.sku = sku;
    }
    if let Some(url) = req.url {
        plan.url = url;
    }
    if let Some(active) = req.active {
        plan.active = active;
    }

    state.plan_repo.insert(&plan).await?;
    state.product_repo.push_plan(&plan.product, &plan.id).await?;

    Ok(Json(plan.into()))
}

pub async fn update_plan(
    State(state): State<PricingPlansState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
    Json(req): Json<UpdatePlanRequest>,
) -> Result<Json<PlanResponse>, PlatformError> {
    let mut plan = state
        .plan_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| PlatformError::not_found("PricingPlan", &id))?;

    if let Some(name) = req.name {
        plan.name = name;
    }
    if let Some(description) = req.description {
        plan.description = description;
    }
    if let Some(price) = req.price {
        plan.price = price;
    }
    if let Some(currency) = req.currency {
        plan.currency = currency;
    }
    if let Some(interval) = req.interval {
        plan.interval = interval;
    }
    if let Some(features) = req.features {
        plan.features = features;
    }
    if let Some(trial_days) = req.trial_days {
        plan.trial_days = trial_days;
    }
    if let Some(availability) = req.availability {
        plan.availability = availability;
    }
    if let Some(sku) = req.sku {
        plan.sku = sku;
    }
    if let Some(url) = req.url {
        plan.url = url;
    }
    if let Some(active) = req.active {
        plan.active = active;
    }
    plan.updated_at = Utc::now();

    state.plan_repo.update(&plan).await?;

    Ok(Json(plan.into()))
}

pub async fn delete_plan(
    State(state): State<PricingPlansState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, PlatformError> {
    let plan = state
        .plan_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| PlatformError::not_found("PricingPlan", &id))?;

    state.plan_repo.delete(&id).await?;
    state.product_repo.pull_plan(&plan.product, &plan.id).await?;

    Ok(Json(SuccessResponse::with_message("Pricing plan deleted")))
}

pub async fn list_plans(
    State(state): State<PricingPlansState>,
) -> Result<Json<Vec<PlanResponse>>, PlatformError> {
    let plans = state.plan_repo.find_all().await?;
    Ok(Json(plans.into_iter().map(Into::into).collect()))
}

pub async fn list_plans_by_product(
    State(state): State<PricingPlansState>,
    Path(product_id): Path<String>,
) -> Result<Json<Vec<PlanResponse>>, PlatformError> {
    let plans = state.plan_repo.find_by_product(&product_id).await?;
    Ok(Json(plans.into_iter().map(Into::into).collect()))
}

pub async fn get_plan(
    State(state): State<PricingPlansState>,
    Path(id): Path<String>,
) -> Result<Json<PlanResponse>, PlatformError> {
    let plan = state
        .plan_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| PlatformError::not_found("PricingPlan", &id))?;

    Ok(Json(plan.into()))
}

pub fn pricing_plans_router(state: PricingPlansState) -> Router {
    Router::new()
        .route("/create", post(create_plan))
        .route("/update/:id", put(update_plan))
        .route("/delete/:id", delete(delete_plan))
        .route("/all", get(list_plans))
        .route("/product/:productId", get(list_plans_by_product))
        .route("/:id", get(get_plan))
        .with_state(state)
}
