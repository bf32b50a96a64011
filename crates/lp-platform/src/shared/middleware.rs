//! API Middleware
//!
//! Authentication and authorization middleware for Axum. The guard decodes
//! a bearer token once and hands the verified claims to handlers through
//! extractors; the admin check composes on top so handlers never compare
//! role strings inline.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::auth::auth_service::{extract_bearer_token, AuthService};
use crate::shared::api_common::ApiError;
use crate::user::entity::Role;
use crate::AuthClaims;

/// Application state containing shared services
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
}

/// Authenticated user extractor.
/// Validates the JWT and extracts the claims from the request.
pub struct Authenticated(pub AuthClaims);

impl std::ops::Deref for Authenticated {
    type Target = AuthClaims;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Error response for authentication failures
pub struct AuthError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: String,
}

impl AuthError {
    fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            error: "UNAUTHORIZED",
            message: message.into(),
        }
    }

    fn forbidden(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            error: "FORBIDDEN",
            message: message.into(),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = ApiError {
            error: self.error.to_string(),
            message: self.message,
            details: None,
        };
        (self.status, Json(body)).into_response()
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v: &HeaderValue| v.to_str().ok())
        .and_then(extract_bearer_token)
        .map(String::from)
}

#[async_trait]
impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // AppState is placed in extensions by the AuthLayer
        let app_state = parts.extensions.get::<AppState>().ok_or_else(|| AuthError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: "INTERNAL_ERROR",
            message: "Auth service not configured".to_string(),
        })?;

        let token = bearer_token(parts)
            .ok_or_else(|| AuthError::unauthorized("Missing authentication token"))?;

        let claims = app_state
            .auth_service
            .validate_token(&token)
            .map_err(|e| AuthError::unauthorized(e.to_string()))?;

        Ok(Authenticated(claims))
    }
}

/// Admin-only extractor.
/// Builds on [`Authenticated`] and rejects any non-admin role claim.
pub struct RequireAdmin(pub AuthClaims);

impl std::ops::Deref for RequireAdmin {
    type Target = AuthClaims;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Authenticated(claims) = Authenticated::from_request_parts(parts, state).await?;

        if claims.role != Role::Admin {
            return Err(AuthError::forbidden("Admin only"));
        }

        Ok(RequireAdmin(claims))
    }
}

/// Optional authentication extractor.
/// Yields the claims when a valid token is present, None otherwise.
pub struct OptionalAuth(pub Option<AuthClaims>);

impl std::ops::Deref for OptionalAuth {
    type Target = Option<AuthClaims>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(app_state) = parts.extensions.get::<AppState>() else {
            return Ok(OptionalAuth(None));
        };

        let Some(token) = bearer_token(parts) else {
            return Ok(OptionalAuth(None));
        };

        let Ok(claims) = app_state.auth_service.validate_token(&token) else {
            return Ok(OptionalAuth(None));
        };

        Ok(OptionalAuth(Some(claims)))
    }
}

/// Middleware layer that injects AppState into request extensions.
/// This enables the extractors above to reach the auth service.
use tower::Layer;
use tower::Service;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

#[derive(Clone)]
pub struct AuthLayer {
    state: AppState,
}

impl AuthLayer {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = AuthMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthMiddleware {
            inner,
            state: self.state.clone(),
        }
    }
}

#[derive(Clone)]
pub struct AuthMiddleware<S> {
    inner: S,
    state: AppState,
}

impl<S, B> Service<axum::http::Request<B>> for AuthMiddleware<S>
where
    S: Service<axum::http::Request<B>, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        req.extensions_mut().insert(self.state.clone());

        let future = self.inner.call(req);
        Box::pin(async move { future.await })
    }
}
