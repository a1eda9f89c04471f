//! AI assistant endpoints
//!
//! All three endpoints return deterministic mock payloads from the
//! `AssistantService` held in `AppState`.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::assistant::Recommendation;
use crate::AppState;

/// Chat request body
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// Chat reply with the employee context the answer was based on
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub context: Value,
}

/// Recommendations plus the summed savings across them
#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub success: bool,
    pub recommendations: Vec<Recommendation>,
    pub total_potential_savings: f64,
}

/// POST /api/v1/ai/chat
///
/// Assistant reply for payroll questions.
pub async fn ai_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    Json(ChatResponse {
        success: true,
        response: state.assistant.chat_reply(&request.message),
        context: state.assistant.employee_context(),
    })
}

/// POST /api/v1/ai/analyze
///
/// Spending pattern analysis.
pub async fn ai_analyze(State(state): State<AppState>) -> Json<Value> {
    Json(state.assistant.spending_analysis())
}

/// POST /api/v1/ai/recommend
///
/// Personalized financial recommendations.
pub async fn ai_recommend(State(state): State<AppState>) -> Json<RecommendResponse> {
    let recommendations = state.assistant.recommendations();
    let total_potential_savings = recommendations.iter().map(|r| r.potential_savings).sum();

    Json(RecommendResponse {
        success: true,
        recommendations,
        total_potential_savings,
    })
}
