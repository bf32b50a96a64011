//! Launchpad Platform
//!
//! Core platform for a product-launch directory:
//! - Registration/login with signed session tokens (first user is admin)
//! - Submission-to-publication moderation workflow
//! - Product catalog with votes, reviews, comments, and trending counters
//! - Supporting catalog entities (categories, tags, pricing plans, badges,
//!   locations, SEO metadata, FAQs, roadmaps, changelog updates, feature
//!   requests, launch-day schedule, notifications)
//!
//! ## Module Organization (Aggregate-based)
//!
//! Each aggregate contains:
//! - `entity` - Domain entities
//! - `repository` - Data access
//! - `api` - REST endpoints
//! - `service` - Multi-entity operations (where applicable)

// Core aggregates
pub mod product;
pub mod submission;
pub mod user;

// Engagement aggregates
pub mod bookmark;
pub mod comment;
pub mod follow;
pub mod review;
pub mod vote;

// Catalog aggregates
pub mod badge;
pub mod category;
pub mod faq;
pub mod feature_request;
pub mod launch_day;
pub mod location;
pub mod notification;
pub mod pricing_plan;
pub mod product_update;
pub mod roadmap;
pub mod seo;
pub mod tag;

// Authentication & authorization
pub mod auth;

// Shared infrastructure
pub mod shared;

// Re-export common types from shared
pub use shared::error::{PlatformError, Result};
pub use shared::tsid::TsidGenerator;

// Re-export main entity types for convenience
pub use product::entity::{LaunchStatus, Product, ProductStatus};
pub use submission::entity::{Submission, SubmissionStatus};
pub use submission::service::{materialize_product, SubmissionService};
pub use user::entity::{Role, User};

// Re-export services
pub use auth::auth_service::{AuthClaims, AuthConfig, AuthService};
pub use auth::password_service::PasswordService;

/// Repository re-exports
pub mod repository {
    pub use crate::badge::repository::BadgeRepository;
    pub use crate::bookmark::repository::BookmarkRepository;
    pub use crate::category::repository::CategoryRepository;
    pub use crate::comment::repository::CommentRepository;
    pub use crate::faq::repository::FaqRepository;
    pub use crate::feature_request::repository::FeatureRequestRepository;
    pub use crate::follow::repository::FollowRepository;
    pub use crate::launch_day::repository::LaunchDayRepository;
    pub use crate::location::repository::LocationRepository;
    pub use crate::notification::repository::NotificationRepository;
    pub use crate::pricing_plan::repository::PricingPlanRepository;
    pub use crate::product::repository::ProductRepository;
    pub use crate::product_update::repository::ProductUpdateRepository;
    pub use crate::review::repository::ReviewRepository;
    pub use crate::roadmap::repository::RoadmapRepository;
    pub use crate::seo::repository::SeoRepository;
    pub use crate::submission::repository::SubmissionRepository;
    pub use crate::tag::repository::TagRepository;
    pub use crate::user::repository::UserRepository;
    pub use crate::vote::repository::VoteRepository;
}

/// API state and router re-exports
pub mod api {
    // Middleware
    pub use crate::shared::api_common::{ApiError, CreatedResponse, SuccessResponse};
    pub use crate::shared::middleware::{
        AppState, AuthLayer, Authenticated, OptionalAuth, RequireAdmin,
    };

    // API state and router exports from each aggregate
    pub use crate::badge::api::{badges_router, BadgesState};
    pub use crate::bookmark::api::{bookmarks_router, BookmarksState};
    pub use crate::category::api::{categories_router, CategoriesState};
    pub use crate::comment::api::{comments_router, CommentsState};
    pub use crate::faq::api::{faqs_router, FaqsState};
    pub use crate::feature_request::api::{feature_requests_router, FeatureRequestsState};
    pub use crate::follow::api::{follows_router, FollowsState};
    pub use crate::launch_day::api::{launch_days_router, LaunchDaysState};
    pub use crate::location::api::{locations_router, LocationsState};
    pub use crate::notification::api::{notifications_router, NotificationsState};
    pub use crate::pricing_plan::api::{pricing_plans_router, PricingPlansState};
    pub use crate::product::api::{products_router, ProductsState};
    pub use crate::product_update::api::{product_updates_router, ProductUpdatesState};
    pub use crate::review::api::{reviews_router, ReviewsState};
    pub use crate::roadmap::api::{roadmaps_router, RoadmapsState};
    pub use crate::seo::api::{seo_router, SeoState};
    pub use crate::submission::api::{submissions_router, SubmissionsState};
    pub use crate::tag::api::{tags_router, TagsState};
    pub use crate::user::api::{users_router, UsersState};
    pub use crate::vote::api::{votes_router, VotesState};

    // Shared APIs
    pub use crate::shared::health_api::health_router;
}
