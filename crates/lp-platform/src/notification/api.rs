//! Notifications API

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::entity::Notification;
use super::repository::NotificationRepository;
use crate::shared::api_common::SuccessResponse;
use crate::shared::error::PlatformError;
use crate::shared::middleware::{Authenticated, RequireAdmin};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    pub user_id: String,
    pub message: String,
    pub link: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub id: String,
    pub user: String,
    pub message: String,
    pub read: bool,
    pub link: String,
    pub created_at: String,
}

impl From<Notification> for NotificationResponse {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id,
            user: n.user,
            message: n.message,
            read: n.read,
            link: n.link,
            created_at: n.created_at.to_rfc3339(),
        }
    }
}

#[derive(Clone)]
pub struct NotificationsState {
    pub notification_repo: Arc<NotificationRepository>,
}

pub async fn create_notification(
    State(state): State<NotificationsState>,
    _admin: RequireAdmin,
    Json(req): Json<CreateNotificationRequest>,
) -> Result<Json<NotificationResponse>, PlatformError> {
    if req.user_id.trim().is_empty() || req.message.trim().is_empty() {
        return Err(PlatformError::validation("User and message are required"));
    }

    let mut notification = Notification::new(req.user_id, req.message);
    notification.link = req.link.unwrap_or_default();

    state.notification_repo.insert(&notification).await?;

    Ok(Json(notification.into()))
}

pub async fn list_my_notifications(
    State(state): State<NotificationsState>,
    auth: Authenticated,
) -> Result<Json<Vec<NotificationResponse>>, PlatformError> {
    let notifications = state.notification_repo.find_by_user(auth.user_id()).await?;
    Ok(Json(notifications.into_iter().map(Into::into).collect()))
}

pub async fn mark_read(
    State(state): State<NotificationsState>,
    auth: Authenticated,
    Path(id): Path<String>,
) -> Result<Json<NotificationResponse>, PlatformError> {
    let mut notification = state
        .notification_repo
        .find_by_id(&id)
        .await?
        .filter(|n| n.user == auth.user_id())
        .ok_or_else(|| PlatformError::not_found("Notification", &id))?;

    state.notification_repo.mark_read(&id).await?;
    notification.read = true;

    Ok(Json(notification.into()))
}

pub async fn delete_notification(
    State(state): State<NotificationsState>,
    auth: Authenticated,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, PlatformError> {
    let notification = state
        .notification_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| PlatformError::not_found("Notification", &id))?;

    if !auth.is_admin() && notification.user != auth.user_id() {
        return Err(PlatformError::forbidden(
            "Not allowed to delete this notification",
        ));
    }

    state.notification_repo.delete(&id).await?;

    Ok(Json(SuccessResponse::with_message("Notification deleted")))
}

pub fn notifications_router(state: NotificationsState) -> Router {
    Router::new()
        .route("/create", post(create_notification))
        .route("/", get(list_my_notifications))
        .route("/read/:id", put(mark_read))
        .route("/delete/:id", delete(delete_notification))
        .with_state(state)
}
