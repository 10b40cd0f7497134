// SPDX-FileCopyrightText: 2026 Parlor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the Parlor REST API.
//!
//! Request/response shapes follow the original frontend contract: register
//! and delete return `{"message": ...}`, login returns the account id and
//! username, chat returns `{"bot": ...}`, and the list endpoints return the
//! stored entities directly.

use axum::Json;
use axum::extract::{Path, State};
use parlor_core::{Conversation, Message};
use parlor_service::{accounts, chat, conversations};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::server::AppState;

/// Request body for POST /register and POST /login.
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
}

/// Response body for POST /register and DELETE /conversations/{id}.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: String,
}

/// Response body for POST /login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub id: String,
    pub username: String,
}

/// Request body for POST /chat/{conversation_id}.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user's message text.
    pub message: String,
}

/// Response body for POST /chat/{conversation_id}.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// The bot's reply text.
    pub bot: String,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<AuthRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    accounts::register(&state.db, &state.hasher, &body.username, &body.password).await?;
    Ok(Json(StatusResponse {
        message: "Success".to_string(),
    }))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<AuthRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = accounts::login(&state.db, &state.hasher, &body.username, &body.password).await?;
    Ok(Json(LoginResponse {
        id: user.id,
        username: user.username,
    }))
}

/// GET /conversations/{user_id}
pub async fn list_conversations(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Conversation>>, ApiError> {
    let listed = conversations::list_conversations(&state.db, &user_id).await?;
    Ok(Json(listed))
}

/// POST /conversations/{user_id}
pub async fn create_conversation(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Conversation>, ApiError> {
    let conversation = conversations::create_conversation(&state.db, &user_id).await?;
    Ok(Json(conversation))
}

/// DELETE /conversations/{conversation_id}
pub async fn delete_conversation(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    conversations::delete_conversation(&state.db, &conversation_id).await?;
    Ok(Json(StatusResponse {
        message: "Deleted".to_string(),
    }))
}

/// POST /chat/{conversation_id}
pub async fn post_chat(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let bot_msg = chat::handle_turn(&state.db, &conversation_id, &body.message).await?;
    Ok(Json(ChatResponse {
        bot: bot_msg.content,
    }))
}

/// GET /history/{conversation_id}
pub async fn get_history(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let messages = conversations::history(&state.db, &conversation_id).await?;
    Ok(Json(messages))
}

/// GET /health
pub async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
