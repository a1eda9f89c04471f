//! Service banner endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Banner returned from the API root
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: String,
    pub status: String,
    pub version: String,
}

/// GET /
///
/// API health check used by the frontend and by monitoring.
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "PayFlow API".to_string(),
        status: "operational".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(root))
}
