//! Users API
//!
//! Registration, login, and profile endpoints.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;
use utoipa_axum::{router::OpenApiRouter, routes};

use super::entity::{Role, User};
use super::repository::UserRepository;
use crate::auth::auth_service::AuthService;
use crate::auth::password_service::PasswordService;
use crate::shared::error::PlatformError;
use crate::shared::middleware::Authenticated;

/// Register request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Profile update request. The fields here are the full mutable set;
/// anything else on the record (role, email, counters) stays server-owned.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub country: Option<String>,
}

/// User response DTO (excludes the password hash)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub avatar: String,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub views: i64,
    pub is_verified: bool,
    pub role: Role,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            avatar: u.avatar,
            bio: u.bio,
            location: u.location,
            country: u.country,
            views: u.views,
            is_verified: u.is_verified,
            role: u.role,
            created_at: u.created_at.to_rfc3339(),
        }
    }
}

/// Register response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub user: UserResponse,
}

/// Login response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub user: UserResponse,
}

/// Users service state
#[derive(Clone)]
pub struct UsersState {
    pub user_repo: Arc<UserRepository>,
    pub auth_service: Arc<AuthService>,
    pub password_service: Arc<PasswordService>,
}

/// Register a new account. The first account ever registered becomes the
/// admin; everyone after that is a regular user.
#[utoipa::path(
    post,
    path = "/register",
    tag = "users",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created", body = RegisterResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register(
    State(state): State<UsersState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, PlatformError> {
    if req.username.trim().is_empty() || req.email.trim().is_empty() {
        return Err(PlatformError::validation("Username and email are required"));
    }

    if state.user_repo.exists_by_email(&req.email).await? {
        return Err(PlatformError::duplicate("User", "email", &req.email));
    }

    let role = if state.user_repo.count().await? == 0 {
        Role::Admin
    } else {
        Role::User
    };

    let password_hash = state.password_service.hash_password(&req.password)?;
    let user = User::new(req.username, req.email, password_hash).with_role(role);

    state.user_repo.insert(&user).await?;
    info!(user_id = %user.id, "User registered");

    let message = match role {
        Role::Admin => "Account created as admin",
        Role::User => "Account created as user",
    };

    Ok(Json(RegisterResponse {
        success: true,
        message: message.to_string(),
        user: user.into(),
    }))
}

/// Log in with email and password.
/// Unknown email and wrong password both produce the same error.
#[utoipa::path(
    post,
    path = "/login",
    tag = "users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<UsersState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, PlatformError> {
    let user = state
        .user_repo
        .find_by_email(&req.email)
        .await?
        .ok_or(PlatformError::InvalidCredentials)?;

    if !state
        .password_service
        .verify_password(&req.password, &user.password_hash)?
    {
        return Err(PlatformError::InvalidCredentials);
    }

    let token = state.auth_service.generate_token(&user)?;
    info!(user_id = %user.id, "User logged in");

    Ok(Json(LoginResponse {
        success: true,
        token,
        user: user.into(),
    }))
}

/// Get the logged-in user's profile
#[utoipa::path(
    get,
    path = "/me",
    tag = "users",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "User no longer exists")
    ),
    security(("bearer_auth" = []))
)]
pub async fn me(
    State(state): State<UsersState>,
    auth: Authenticated,
) -> Result<Json<UserResponse>, PlatformError> {
    let user = state
        .user_repo
        .find_by_id(auth.user_id())
        .await?
        .ok_or_else(|| PlatformError::not_found("User", auth.user_id()))?;

    Ok(Json(user.into()))
}

/// Update the logged-in user's profile
#[utoipa::path(
    put,
    path = "/me",
    tag = "users",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = UserResponse),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_profile(
    State(state): State<UsersState>,
    auth: Authenticated,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, PlatformError> {
    let mut user = state
        .user_repo
        .find_by_id(auth.user_id())
        .await?
        .ok_or_else(|| PlatformError::not_found("User", auth.user_id()))?;

    if let Some(username) = req.username {
        user.username = username;
    }
    if let Some(avatar) = req.avatar {
        user.avatar = avatar;
    }
    if let Some(bio) = req.bio {
        user.bio = bio;
    }
    if let Some(location) = req.location {
        user.location = Some(location);
    }
    if let Some(country) = req.country {
        user.country = Some(country);
    }
    user.updated_at = chrono::Utc::now();

    state.user_repo.update(&user).await?;

    Ok(Json(user.into()))
}

/// Create users router
pub fn users_router(state: UsersState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(register))
        .routes(routes!(login))
        .routes(routes!(me, update_profile))
        .with_state(state)
}
