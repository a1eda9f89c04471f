//! System endpoints for the demo handoff flow

use axum::{extract::State, Json};
use serde::Serialize;

use crate::lan_ip::lan_ip;
use crate::AppState;

/// LAN address response used to build the handoff QR code
#[derive(Debug, Serialize)]
pub struct SystemIpResponse {
    pub ip: String,
    pub frontend_url: String,
}

/// GET /api/v1/system/ip
///
/// Returns the server's LAN IP and the URL a phone on the same network
/// should open to reach the demo frontend.
pub async fn system_ip(State(state): State<AppState>) -> Json<SystemIpResponse> {
    let ip = lan_ip();

    Json(SystemIpResponse {
        ip: ip.to_string(),
        frontend_url: format!("http://{}:{}", ip, state.config.frontend_port),
    })
}
