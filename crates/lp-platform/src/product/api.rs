//! Products API
//!
//! Create/browse/update/delete endpoints plus the view, click, and trending
//! surfaces. Mutations are restricted to the creator or an admin.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use utoipa::{IntoParams, ToSchema};
use utoipa_axum::{router::OpenApiRouter, routes};

use super::entity::{LaunchStatus, Product, ProductStatus, SocialLinks, TeamMember};
use super::repository::{ProductFilter, ProductRepository, ProductSort};
use crate::shared::api_common::SuccessResponse;
use crate::shared::error::PlatformError;
use crate::shared::middleware::Authenticated;
use crate::shared::slug::{slugify, with_time_suffix};

/// Create product request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub video_demo: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub seo: Option<String>,
    pub location: Option<String>,
    pub website_url: Option<String>,
    pub app_store_link: Option<String>,
    pub play_store_link: Option<String>,
    pub chrome_extension: Option<String>,
    pub social: Option<SocialLinks>,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    pub launch_date: Option<DateTime<Utc>>,
    pub launch_status: Option<LaunchStatus>,
}

/// Update product request. These fields are the declared mutable set;
/// slug, status, counters, and ratings stay server-owned.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub thumbnail: Option<String>,
    pub gallery: Option<Vec<String>>,
    pub video_demo: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub seo: Option<String>,
    pub location: Option<String>,
    pub website_url: Option<String>,
    pub app_store_link: Option<String>,
    pub play_store_link: Option<String>,
    pub chrome_extension: Option<String>,
    pub social: Option<SocialLinks>,
    pub team: Option<Vec<TeamMember>>,
    pub launch_date: Option<DateTime<Utc>>,
    pub launch_status: Option<LaunchStatus>,
    pub featured: Option<bool>,
}

/// Product response DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub gallery: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_demo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub plans: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<String>,
    pub avg_rating: f64,
    pub views: i64,
    pub clicks: i64,
    pub votes: i64,
    pub featured: bool,
    pub trending_score: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_store_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play_store_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_extension: Option<String>,
    pub social: SocialLinks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_date: Option<String>,
    pub launch_status: LaunchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub team: Vec<TeamMember>,
    pub status: ProductStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            title: p.title,
            slug: p.slug,
            description: p.description,
            long_description: p.long_description,
            thumbnail: p.thumbnail,
            gallery: p.gallery,
            video_demo: p.video_demo,
            category: p.category,
            tags: p.tags,
            plans: p.plans,
            seo: p.seo,
            avg_rating: p.avg_rating,
            views: p.views,
            clicks: p.clicks,
            votes: p.votes,
            featured: p.featured,
            trending_score: p.trending_score,
            location: p.location,
            website_url: p.website_url,
            app_store_link: p.app_store_link,
            play_store_link: p.play_store_link,
            chrome_extension: p.chrome_extension,
            social: p.social,
            launch_date: p.launch_date.map(|t| t.to_rfc3339()),
            launch_status: p.launch_status,
            created_by: p.created_by,
            team: p.team,
            status: p.status,
            created_at: p.created_at.to_rfc3339(),
            updated_at: p.updated_at.to_rfc3339(),
        }
    }
}

/// Query parameters for the product listing
#[derive(Debug, Deserialize, Default, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductListQuery {
    /// Case-insensitive title search
    pub search: Option<String>,
    /// Category id filter
    pub category: Option<String>,
    /// Tag id filter
    pub tag: Option<String>,
    /// Only featured products
    pub featured: Option<String>,
    /// One of: latest (default), trending, rating
    pub sort: Option<String>,
}

/// Products service state
#[derive(Clone)]
pub struct ProductsState {
    pub product_repo: Arc<ProductRepository>,
}

/// Create a product. Admin creations publish immediately; everyone else
/// lands in pending until moderated.
#[utoipa::path(
    post,
    path = "/create",
    tag = "products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Duplicate title")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_product(
    State(state): State<ProductsState>,
    auth: Authenticated,
    Json(req): Json<CreateProductRequest>,
) -> Result<(axum::http::StatusCode, Json<ProductResponse>), PlatformError> {
    if req.title.trim().is_empty() || req.description.trim().is_empty() {
        return Err(PlatformError::validation("Title and description are required"));
    }

    if state.product_repo.exists_by_title(&req.title).await? {
        return Err(PlatformError::duplicate("Product", "title", &req.title));
    }

    let mut slug = slugify(&req.title);
    if state.product_repo.exists_by_slug(&slug).await? {
        slug = with_time_suffix(&slug);
    }

    let mut product = Product::new(req.title, slug, req.description);
    product.long_description = req.long_description;
    product.thumbnail = req.thumbnail;
    product.gallery = req.gallery;
    product.video_demo = req.video_demo;
    product.category = req.category;
    product.tags = req.tags;
    product.seo = req.seo;
    product.location = req.location;
    product.website_url = req.website_url;
    product.app_store_link = req.app_store_link;
    product.play_store_link = req.play_store_link;
    product.chrome_extension = req.chrome_extension;
    product.social = req.social.unwrap_or_default();
    product.team = req.team;
    product.launch_date = req.launch_date;
    product.launch_status = req.launch_status.unwrap_or_default();
    product.created_by = Some(auth.user_id().to_string());
    product.status = if auth.is_admin() {
        ProductStatus::Published
    } else {
        ProductStatus::Pending
    };

    state.product_repo.insert(&product).await?;
    info!(product_id = %product.id, status = ?product.status, "Product created");

    Ok((axum::http::StatusCode::CREATED, Json(product.into())))
}

/// List published products with filters and sorting
#[utoipa::path(
    get,
    path = "/all",
    tag = "products",
    params(ProductListQuery),
    responses(
        (status = 200, description = "Published products", body = [ProductResponse])
    )
)]
pub async fn list_products(
    State(state): State<ProductsState>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<Vec<ProductResponse>>, PlatformError> {
    let filter = ProductFilter {
        search: query.search,
        category: query.category,
        tag: query.tag,
        featured: query.featured.as_deref() == Some("true"),
    };

    let sort = match query.sort.as_deref() {
        Some("trending") => ProductSort::Trending,
        Some("rating") => ProductSort::Rating,
        _ => ProductSort::Latest,
    };

    let products = state.product_repo.find_published(&filter, sort).await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// Top 10 published products by trending score
#[utoipa::path(
    get,
    path = "/home/trending",
    tag = "products",
    responses(
        (status = 200, description = "Trending products", body = [ProductResponse])
    )
)]
pub async fn trending_products(
    State(state): State<ProductsState>,
) -> Result<Json<Vec<ProductResponse>>, PlatformError> {
    let products = state.product_repo.find_trending(10).await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// Get a product by slug. Counts the view.
#[utoipa::path(
    get,
    path = "/{slug}",
    tag = "products",
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<ProductsState>,
    Path(slug): Path<String>,
) -> Result<Json<ProductResponse>, PlatformError> {
    let mut product = state
        .product_repo
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| PlatformError::not_found("Product", &slug))?;

    state.product_repo.record_view(&product.id).await?;
    product.views += 1;
    product.trending_score += 2;

    Ok(Json(product.into()))
}

/// Count an outbound click
#[utoipa::path(
    post,
    path = "/click/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Click recorded", body = SuccessResponse),
        (status = 404, description = "Product not found")
    )
)]
pub async fn record_click(
    State(state): State<ProductsState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, PlatformError> {
    if !state.product_repo.exists(&id).await? {
        return Err(PlatformError::not_found("Product", &id));
    }

    state.product_repo.record_click(&id).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Update a product (creator or admin)
#[utoipa::path(
    put,
    path = "/update/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 403, description = "Not the creator"),
        (status = 404, description = "Product not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_product(
    State(state): State<ProductsState>,
    auth: Authenticated,
    Path(id): Path<String>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, PlatformError> {
    let mut product = state
        .product_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| PlatformError::not_found("Product", &id))?;

    if !auth.is_admin() && !product.is_owned_by(auth.user_id()) {
        return Err(PlatformError::forbidden("Not allowed to modify this product"));
    }

    if let Some(title) = req.title {
        product.title = title;
    }
    if let Some(description) = req.description {
        product.description = description;
    }
    if let Some(long_description) = req.long_description {
        product.long_description = Some(long_description);
    }
    if let Some(thumbnail) = req.thumbnail {
        product.thumbnail = Some(thumbnail);
    }
    if let Some(gallery) = req.gallery {
        product.gallery = gallery;
    }
    if let Some(video_demo) = req.video_demo {
        product.video_demo = Some(video_demo);
    }
    if let Some(category) = req.category {
        product.category = Some(category);
    }
    if let Some(tags) = req.tags {
        product.tags = tags;
    }
    if let Some(seo) = req.seo {
        product.seo = Some(seo);
    }
    if let Some(location) = req.location {
        product.location = Some(location);
    }
    if let Some(website_url) = req.website_url {
        product.website_url = Some(website_url);
    }
    if let Some(app_store_link) = req.app_store_link {
        product.app_store_link = Some(app_store_link);
    }
    if let Some(play_store_link) = req.play_store_link {
        product.play_store_link = Some(play_store_link);
    }
    if let Some(chrome_extension) = req.chrome_extension {
        product.chrome_extension = Some(chrome_extension);
    }
    if let Some(social) = req.social {
        product.social = social;
    }
    if let Some(team) = req.team {
        product.team = team;
    }
    if let Some(launch_date) = req.launch_date {
        product.launch_date = Some(launch_date);
    }
    if let Some(launch_status) = req.launch_status {
        product.launch_status = launch_status;
    }
    if let Some(featured) = req.featured {
        product.featured = featured;
    }
    product.updated_at = Utc::now();

    state.product_repo.update(&product).await?;

    Ok(Json(product.into()))
}

/// Delete a product (creator or admin). Child records (votes, reviews,
/// comments, plans) are left in place.
#[utoipa::path(
    delete,
    path = "/delete/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = SuccessResponse),
        (status = 403, description = "Not the creator"),
        (status = 404, description = "Product not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_product(
    State(state): State<ProductsState>,
    auth: Authenticated,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, PlatformError> {
    let product = state
        .product_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| PlatformError::not_found("Product", &id))?;

    if !auth.is_admin() && !product.is_owned_by(auth.user_id()) {
        return Err(PlatformError::forbidden("Not allowed to delete this product"));
    }

    state.product_repo.delete(&id).await?;
    info!(product_id = %id, "Product deleted");

    Ok(Json(SuccessResponse::with_message("Product deleted")))
}

/// Create products router
pub fn products_router(state: ProductsState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(create_product))
        .routes(routes!(list_products))
        .routes(routes!(trending_products))
        .routes(routes!(get_product))
        .routes(routes!(record_click))
        .routes(routes!(update_product))
        .routes(routes!(delete_product))
        .with_state(state)
}
