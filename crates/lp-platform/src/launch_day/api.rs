//! Launch Days API

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::entity::LaunchDay;
use super::repository::LaunchDayRepository;
use crate::shared::api_common::SuccessResponse;
use crate::shared::error::PlatformError;
use crate::shared::middleware::RequireAdmin;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleLaunchRequest {
    pub product_id: String,
    pub scheduled_date: DateTime<Utc>,
    pub rank: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLaunchRequest {
    pub scheduled_date: Option<DateTime<Utc>>,
    pub rank: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchDayResponse {
    pub id: String,
    pub product: String,
    pub scheduled_date: String,
    pub rank: i64,
    pub votes: i64,
}

impl From<LaunchDay> for LaunchDayResponse {
    fn from(l: LaunchDay) -> Self {
        Self {
            id: l.id,
            product: l.product,
            scheduled_date: l.scheduled_date.to_rfc3339(),
            rank: l.rank,
            votes: l.votes,
        }
    }
}

#[derive(Clone)]
pub struct LaunchDaysState {
    pub launch_repo: Arc<LaunchDayRepository>,
}

pub async fn schedule_launch(
    State(state): State<LaunchDaysState>,
    _admin: RequireAdmin,
    Json(req): Json<ScheduleLaunchRequest>,
) -> Result<Json<LaunchDayResponse>, PlatformError> {
    if req.product_id.trim().is_empty() {
        return Err(PlatformError::validation(
            "Product and scheduled date are required",
        ));
    }

    let mut launch = LaunchDay::new(req.product_id, req.scheduled_date);
    launch.rank = req.rank.unwrap_or(0);

    state.launch_repo.insert(&launch).await?;

    Ok(Json(launch.into()))
}

pub async fn list_launches(
    State(state): State<LaunchDaysState>,
) -> Result<Json<Vec<LaunchDayResponse>>, PlatformError> {
    let launches = state.launch_repo.find_all().await?;
    Ok(Json(launches.into_iter().map(Into::into).collect()))
}

/// Launches scheduled for the current day, by rank
pub async fn todays_launches(
    State(state): State<LaunchDaysState>,
) -> Result<Json<Vec<LaunchDayResponse>>, PlatformError> {
    let start = Utc::now()
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always valid")
        .and_utc();
    let launches = state
        .launch_repo
        .find_in_window(start, start + Duration::days(1))
        .await?;
    Ok(Json(launches.into_iter().map(Into::into).collect()))
}

pub async fn update_launch(
    State(state): State<LaunchDaysState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
    Json(req): Json<UpdateLaunchRequest>,
) -> Result<Json<LaunchDayResponse>, PlatformError> {
    let mut launch = state
        .launch_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| PlatformError::not_found("LaunchDay", &id))?;

    if let Some(scheduled_date) = req.scheduled_date {
        launch.scheduled_date = scheduled_date;
    }
    if let Some(rank) = req.rank {
        launch.rank = rank;
    }

    state.launch_repo.update(&launch).await?;

    Ok(Json(launch.into()))
}

pub async fn delete_launch(
    State(state): State<LaunchDaysState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, PlatformError> {
    if !state.launch_repo.delete(&id).await? {
        return Err(PlatformError::not_found("LaunchDay", &id));
    }

    Ok(Json(SuccessResponse::with_message("Launch unscheduled")))
}

pub fn launch_days_router(state: LaunchDaysState) -> Router {
    Router::new()
        .route("/create", post(schedule_launch))
        .route("/", get(list_launches))
        .route("/today", get(todays_launches))
        .route("/update/:id", put(update_launch))
        .route("/delete/:id", delete(delete_launch))
        .with_state(state)
}
