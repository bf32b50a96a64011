//! MongoDB Index Initialization
//!
//! Creates indexes for all collections on application startup. The unique
//! indexes double as the store-level backstop for the application-side
//! uniqueness checks (email, slug, vote/bookmark/follow pairs), which are
//! read-then-insert and can race under concurrent requests.

use mongodb::{bson::doc, options::IndexOptions, Database, IndexModel};
use tracing::info;

/// Initialize all MongoDB indexes
pub async fn initialize_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    info!("Initializing MongoDB indexes...");

    create_user_indexes(db).await?;
    create_product_indexes(db).await?;
    create_submission_indexes(db).await?;
    create_vote_indexes(db).await?;
    create_review_indexes(db).await?;
    create_pair_indexes(db).await?;
    create_slug_indexes(db).await?;
    create_child_record_indexes(db).await?;

    info!("MongoDB indexes initialized successfully");
    Ok(())
}

fn unique() -> IndexOptions {
    IndexOptions::builder().unique(true).build()
}

fn unique_sparse() -> IndexOptions {
    IndexOptions::builder().unique(true).sparse(true).build()
}

async fn create_user_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    let users = db.collection::<mongodb::bson::Document>("users");

    users
        .create_index(
            IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(unique())
                .build(),
        )
        .await?;

    users
        .create_index(IndexModel::builder().keys(doc! { "username": 1 }).build())
        .await?;

    info!("Created indexes on users");
    Ok(())
}

async fn create_product_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    let products = db.collection::<mongodb::bson::Document>("products");

    products
        .create_index(
            IndexModel::builder()
                .keys(doc! { "slug": 1 })
                .options(unique())
                .build(),
        )
        .await?;

    // List/filter paths
    products
        .create_index(IndexModel::builder().keys(doc! { "status": 1, "createdAt": -1 }).build())
        .await?;
    products
        .create_index(IndexModel::builder().keys(doc! { "trendingScore": -1 }).build())
        .await?;

    info!("Created indexes on products");
    Ok(())
}

async fn create_submission_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    let submissions = db.collection::<mongodb::bson::Document>("submissions");

    submissions
        .create_index(IndexModel::builder().keys(doc! { "submitter": 1 }).build())
        .await?;
    submissions
        .create_index(IndexModel::builder().keys(doc! { "status": 1 }).build())
        .await?;

    info!("Created indexes on submissions");
    Ok(())
}

async fn create_vote_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    let votes = db.collection::<mongodb::bson::Document>("votes");

    // One vote per (product, user) and per (product, ip); sparse because
    // exactly one of user/userIp is set on any given vote.
    votes
        .create_index(
            IndexModel::builder()
                .keys(doc! { "product": 1, "user": 1 })
                .options(unique_sparse())
                .build(),
        )
        .await?;
    votes
        .create_index(
            IndexModel::builder()
                .keys(doc! { "product": 1, "userIp": 1 })
                .options(unique_sparse())
                .build(),
        )
        .await?;

    info!("Created indexes on votes");
    Ok(())
}

async fn create_review_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    let reviews = db.collection::<mongodb::bson::Document>("reviews");

    reviews
        .create_index(
            IndexModel::builder()
                .keys(doc! { "product": 1, "user": 1 })
                .options(unique())
                .build(),
        )
        .await?;

    info!("Created indexes on reviews");
    Ok(())
}

async fn create_pair_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    let bookmarks = db.collection::<mongodb::bson::Document>("bookmarks");
    bookmarks
        .create_index(
            IndexModel::builder()
                .keys(doc! { "user": 1, "product": 1 })
                .options(unique())
                .build(),
        )
        .await?;

    let follows = db.collection::<mongodb::bson::Document>("follows");
    follows
        .create_index(
            IndexModel::builder()
                .keys(doc! { "follower": 1, "following": 1 })
                .options(unique())
                .build(),
        )
        .await?;

    info!("Created indexes on bookmarks and follows");
    Ok(())
}

async fn create_slug_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    for collection in ["categories", "tags"] {
        db.collection::<mongodb::bson::Document>(collection)
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "slug": 1 })
                    .options(unique())
                    .build(),
            )
            .await?;
    }

    info!("Created slug indexes on categories and tags");
    Ok(())
}

async fn create_child_record_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    // Per-product child collections, all fetched by product id
    for collection in [
        "pricing_plans",
        "comments",
        "faqs",
        "roadmaps",
        "product_updates",
        "feature_requests",
        "launch_days",
    ] {
        db.collection::<mongodb::bson::Document>(collection)
            .create_index(IndexModel::builder().keys(doc! { "product": 1 }).build())
            .await?;
    }

    let notifications = db.collection::<mongodb::bson::Document>("notifications");
    notifications
        .create_index(IndexModel::builder().keys(doc! { "user": 1, "createdAt": -1 }).build())
        .await?;

    info!("Created child record indexes");
    Ok(())
}
