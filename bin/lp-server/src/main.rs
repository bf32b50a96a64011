//! Launchpad Server
//!
//! Production server for the product-launch directory REST APIs:
//! - Auth/user APIs: register, login, profile
//! - Submission workflow APIs: submit, approve, reject
//! - Catalog APIs: products, categories, tags, pricing plans, badges,
//!   locations, SEO, FAQs, roadmaps, updates, feature requests, launch days
//! - Engagement APIs: votes, reviews, comments, bookmarks, follows
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LP_PORT` | `4000` | HTTP API port |
//! | `LP_MONGO_URL` | `mongodb://localhost:27017` | MongoDB connection URL |
//! | `LP_MONGO_DB` | `launchpad` | MongoDB database name |
//! | `LP_JWT_SECRET` | - | Token signing secret (required) |
//! | `LP_JWT_ISSUER` | `launchpad` | Token issuer claim |
//! | `LP_ALLOWED_ORIGINS` | `*` | Comma-separated CORS origins |
//! | `RUST_LOG` | `info` | Log level |
//! | `LOG_FORMAT` | text | Set to `json` for JSON logs |

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use axum::Router;
use tokio::{net::TcpListener, signal};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use lp_platform::api::{
    badges_router, bookmarks_router, categories_router, comments_router, faqs_router,
    feature_requests_router, follows_router, health_router, launch_days_router, locations_router,
    notifications_router, pricing_plans_router, product_updates_router, products_router,
    reviews_router, roadmaps_router, seo_router, submissions_router, tags_router, users_router,
    votes_router, AppState, AuthLayer, BadgesState, BookmarksState, CategoriesState, CommentsState,
    FaqsState, FeatureRequestsState, FollowsState, LaunchDaysState, LocationsState,
    NotificationsState, PricingPlansState, ProductUpdatesState, ProductsState, ReviewsState,
    RoadmapsState, SeoState, SubmissionsState, TagsState, UsersState, VotesState,
};
use lp_platform::repository::{
    BadgeRepository, BookmarkRepository, CategoryRepository, CommentRepository, FaqRepository,
    FeatureRequestRepository, FollowRepository, LaunchDayRepository, LocationRepository,
    NotificationRepository, PricingPlanRepository, ProductRepository, ProductUpdateRepository,
    ReviewRepository, RoadmapRepository, SeoRepository, SubmissionRepository, TagRepository,
    UserRepository, VoteRepository,
};
use lp_platform::shared::indexes::initialize_indexes;
use lp_platform::{AuthConfig, AuthService, PasswordService, SubmissionService};

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_or_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn cors_layer(allowed_origins: &str) -> CorsLayer {
    if allowed_origins.trim() == "*" {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

#[tokio::main]
async fn main() -> Result<()> {
    lp_common::logging::init_logging("lp-server");

    info!("Starting Launchpad Server");

    // Configuration from environment, loaded once at startup
    let port: u16 = env_or_parse("LP_PORT", 4000);
    let mongo_url = env_or("LP_MONGO_URL", "mongodb://localhost:27017");
    let mongo_db = env_or("LP_MONGO_DB", "launchpad");
    let jwt_issuer = env_or("LP_JWT_ISSUER", "launchpad");
    let allowed_origins = env_or("LP_ALLOWED_ORIGINS", "*");
    let jwt_secret =
        std::env::var("LP_JWT_SECRET").context("LP_JWT_SECRET must be set")?;

    // Connect to MongoDB
    info!("Connecting to MongoDB: {}/{}", mongo_url, mongo_db);
    let mongo_client = mongodb::Client::with_uri_str(&mongo_url).await?;
    let db = mongo_client.database(&mongo_db);

    initialize_indexes(&db).await?;

    // Initialize repositories
    let user_repo = Arc::new(UserRepository::new(&db));
    let product_repo = Arc::new(ProductRepository::new(&db));
    let submission_repo = Arc::new(SubmissionRepository::new(&db));
    let category_repo = Arc::new(CategoryRepository::new(&db));
    let tag_repo = Arc::new(TagRepository::new(&db));
    let plan_repo = Arc::new(PricingPlanRepository::new(&db));
    let vote_repo = Arc::new(VoteRepository::new(&db));
    let review_repo = Arc::new(ReviewRepository::new(&db));
    let comment_repo = Arc::new(CommentRepository::new(&db));
    let bookmark_repo = Arc::new(BookmarkRepository::new(&db));
    let follow_repo = Arc::new(FollowRepository::new(&db));
    let notification_repo = Arc::new(NotificationRepository::new(&db));
    let badge_repo = Arc::new(BadgeRepository::new(&db));
    let location_repo = Arc::new(LocationRepository::new(&db));
    let seo_repo = Arc::new(SeoRepository::new(&db));
    let faq_repo = Arc::new(FaqRepository::new(&db));
    let roadmap_repo = Arc::new(RoadmapRepository::new(&db));
    let update_repo = Arc::new(ProductUpdateRepository::new(&db));
    let feature_repo = Arc::new(FeatureRequestRepository::new(&db));
    let launch_repo = Arc::new(LaunchDayRepository::new(&db));
    info!("Repositories initialized");

    // Initialize services
    let auth_config = AuthConfig {
        secret_key: jwt_secret,
        issuer: jwt_issuer,
        ..AuthConfig::default()
    };
    let auth_service = Arc::new(AuthService::new(auth_config));
    let password_service = Arc::new(PasswordService::default());
    let submission_service = Arc::new(SubmissionService::new(
        submission_repo.clone(),
        product_repo.clone(),
    ));
    info!("Services initialized");

    let app_state = AppState {
        auth_service: auth_service.clone(),
    };

    // Build API states
    let users_state = UsersState {
        user_repo,
        auth_service,
        password_service,
    };
    let products_state = ProductsState {
        product_repo: product_repo.clone(),
    };
    let submissions_state = SubmissionsState {
        submission_repo,
        submission_service,
    };
    let votes_state = VotesState {
        vote_repo,
        product_repo: product_repo.clone(),
    };
    let reviews_state = ReviewsState {
        review_repo,
        product_repo: product_repo.clone(),
    };
    let pricing_plans_state = PricingPlansState {
        plan_repo,
        product_repo,
    };

    // Core routers are collected into the OpenAPI document
    let (core_router, mut openapi) = OpenApiRouter::new()
        .merge(users_router(users_state))
        .nest("/product", products_router(products_state))
        .nest("/submission", submissions_router(submissions_state))
        .split_for_parts();

    openapi.info.title = "Launchpad API".to_string();
    openapi.info.version = "1.0.0".to_string();
    openapi.info.description =
        Some("REST APIs for the product-launch directory".to_string());

    let app = Router::new()
        .merge(core_router)
        .nest("/category", categories_router(CategoriesState { category_repo }))
        .nest("/tag", tags_router(TagsState { tag_repo }))
        .nest("/pricing-plan", pricing_plans_router(pricing_plans_state))
        .nest("/vote", votes_router(votes_state))
        .nest("/review", reviews_router(reviews_state))
        .nest("/comment", comments_router(CommentsState { comment_repo }))
        .nest("/bookmark", bookmarks_router(BookmarksState { bookmark_repo }))
        .nest("/follow", follows_router(FollowsState { follow_repo }))
        .nest(
            "/notification",
            notifications_router(NotificationsState { notification_repo }),
        )
        .nest("/badge", badges_router(BadgesState { badge_repo }))
        .nest("/location", locations_router(LocationsState { location_repo }))
        .nest("/seo", seo_router(SeoState { seo_repo }))
        .nest("/faq", faqs_router(FaqsState { faq_repo }))
        .nest("/roadmap", roadmaps_router(RoadmapsState { roadmap_repo }))
        .nest("/update", product_updates_router(ProductUpdatesState { update_repo }))
        .nest(
            "/feature-request",
            feature_requests_router(FeatureRequestsState { feature_repo }),
        )
        .nest("/launch-day", launch_days_router(LaunchDaysState { launch_repo }))
        .nest("/health", health_router(db))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .layer(AuthLayer::new(app_state))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&allowed_origins));

    let addr = format!("0.0.0.0:{}", port);
    info!("API server listening on http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Launchpad Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
