//! Health API

use axum::{response::Json, routing::get, Router};
use mongodb::{bson::doc, Database};

/// Liveness/readiness endpoint backed by a Mongo ping.
async fn health(axum::extract::State(db): axum::extract::State<Database>) -> Json<serde_json::Value> {
    let database = match db.run_command(doc! { "ping": 1 }).await {
        Ok(_) => "UP",
        Err(_) => "DOWN",
    };

    Json(serde_json::json!({
        "status": "UP",
        "database": database,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub fn health_router(db: Database) -> Router {
    Router::new().route("/", get(health)).with_state(db)
}
