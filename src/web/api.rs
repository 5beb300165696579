// src/web/api.rs
// REST handlers

use axum::Json;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engine::{TherapistResponse, get_reply, get_welcome_message};
use crate::prompt::{InstructionContext, instructions_for};

/// Body for `/api/chat` and `/api/prompt`. Extra fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

// ═══════════════════════════════════════
// SERVICE INFO
// ═══════════════════════════════════════

pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "Ohio Therapy API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "online"
    }))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// ═══════════════════════════════════════
// CHAT
// ═══════════════════════════════════════

pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: get_welcome_message().to_string(),
    })
}

/// Reply to one message. Input is trimmed here, the engine expects that.
pub async fn chat(Json(req): Json<ChatRequest>) -> Json<TherapistResponse> {
    let response = get_reply(req.message.trim());

    info!(
        emotion = %response.emotion,
        crisis = response.is_crisis,
        strategy = response.strategy.as_str(),
        "Chat reply sent"
    );

    Json(response)
}

/// Preview the instruction document a generative model would receive.
pub async fn prompt(Json(req): Json<ChatRequest>) -> Json<InstructionContext> {
    Json(instructions_for(req.message.trim()))
}
