//! Locations API

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::entity::{Coordinates, Location};
use super::repository::LocationRepository;
use crate::shared::api_common::SuccessResponse;
use crate::shared::error::PlatformError;
use crate::shared::middleware::RequireAdmin;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationRequest {
    pub country: String,
    pub state: Option<String>,
    pub city: String,
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLocationRequest {
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponse {
    pub id: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub coordinates: Coordinates,
}

impl From<Location> for LocationResponse {
    fn from(l: Location) -> Self {
        Self {
            id: l.id,
            country: l.country,
            state: l.state,
            city: l.city,
            coordinates: l.coordinates,
        }
    }
}

#[derive(Clone)]
pub struct LocationsState {
    pub location_repo: Arc<LocationRepository>,
}

pub async fn create_location(
    State(state): State<LocationsState>,
    _admin: RequireAdmin,
    Json(req): Json<CreateLocationRequest>,
) -> Result<Json<LocationResponse>, PlatformError> {
    if req.country.trim().is_empty() || req.city.trim().is_empty() {
        return Err(PlatformError::validation("Country and city are required"));
    }

    let mut location = Location::new(req.country, req.city);
    location.state = req.state.unwrap_or_default();
    location.coordinates = req.coordinates.unwrap_or_default();

    state.location_repo.insert(&location).await?;

    Ok(Json(location.into()))
}

pub async fn update_location(
    State(state): State<LocationsState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
    Json(req): Json<UpdateLocationRequest>,
) -> Result<Json<LocationResponse>, PlatformError> {
    let mut location = state
        .location_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| PlatformError::not_found("Location", &id))?;

    if let Some(country) = req.country {
        location.country = country;
    }
    if let Some(state_name) = req.state {
        location.state = state_name;
    }
    if let Some(city) = req.city {
        location.city = city;
    }
    if let Some(coordinates) = req.coordinates {
        location.coordinates = coordinates;
    }

    state.location_repo.update(&location).await?;

    Ok(Json(location.into()))
}

pub async fn delete_location(
    State(state): State<LocationsState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, PlatformError> {
    if !state.location_repo.delete(&id).await? {
        return Err(PlatformError::not_found("Location", &id));
    }

    Ok(Json(SuccessResponse::with_message("Location deleted")))
}

pub async fn list_locations(
    State(state): State<LocationsState>,
) -> Result<Json<Vec<LocationResponse>>, PlatformError> {
    let locations = state.location_repo.find_all().await?;
    Ok(Json(locations.into_iter().map(Into::into).collect()))
}

pub async fn get_location(
    State(state): State<LocationsState>,
    Path(id): Path<String>,
) -> Result<Json<LocationResponse>, PlatformError> {
    let location = state
        .location_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| PlatformError::not_found("Location", &id))?;

    Ok(Json(location.into()))
}

pub fn locations_router(state: LocationsState) -> Router {
    Router::new()
        .route("/create", post(create_location))
        .route("/update/:id", put(update_location))
        .route("/delete/:id", delete(delete_location))
        .route("/all", get(list_locations))
        .route("/:id", get(get_location))
        .with_state(state)
}
