//! payflow-api library - PayFlow backend HTTP service
//!
//! Exposes the application state and router so integration tests can
//! drive the service without binding a socket.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use payflow_common::config::ServiceConfig;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::assistant::AssistantService;

pub mod api;
pub mod assistant;
pub mod ingest;
pub mod lan_ip;
pub mod pagination;
pub mod roster;

/// Application state shared across HTTP handlers
///
/// Nothing in here is mutable: configuration is fixed at startup and the
/// assistant is a stateless service, so concurrent requests need no
/// coordination.
#[derive(Clone)]
pub struct AppState {
    /// Resolved service configuration
    pub config: ServiceConfig,
    /// Mock AI assistant, constructed once and injected into handlers
    pub assistant: Arc<AssistantService>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            assistant: Arc::new(AssistantService::new()),
        }
    }
}

/// Build application router
///
/// CORS is fully open: this is a demo backend reached from a frontend
/// served on a different port (and from phones over the LAN).
pub fn build_router(state: AppState) -> Router {
    let api_v1 = Router::new()
        .route("/api/v1/upload", post(api::upload_csv))
        .route("/api/v1/employee/me", get(api::employee_me))
        .route("/api/v1/employees", get(api::list_employees))
        .route("/api/v1/system/ip", get(api::system_ip))
        .route("/api/v1/ai/chat", post(api::ai_chat))
        .route("/api/v1/ai/analyze", post(api::ai_analyze))
        .route("/api/v1/ai/recommend", post(api::ai_recommend));

    Router::new()
        .merge(api_v1)
        .merge(api::health_routes())
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
