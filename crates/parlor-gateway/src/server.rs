// SPDX-FileCopyrightText: 2026 Parlor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway.

use axum::Router;
use axum::routing::{get, post};
use parlor_auth::PasswordHasher;
use parlor_core::ParlorError;
use parlor_storage::Database;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Storage handle; cloning shares one background connection.
    pub db: Database,
    /// Password hasher configured from the `[auth]` section.
    pub hasher: PasswordHasher,
    /// Process start time for uptime reporting.
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Assemble the handler state around an open database.
    pub fn new(db: Database, hasher: PasswordHasher) -> Self {
        Self {
            db,
            hasher,
            start_time: std::time::Instant::now(),
        }
    }
}

/// Gateway server configuration (mirrors `[server]` from parlor-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Build the full route table.
///
/// The `/conversations/{id}` parameter is the owning user for GET/POST and
/// the conversation itself for DELETE, mirroring the frontend contract.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route(
            "/conversations/{id}",
            get(handlers::list_conversations)
                .post(handlers::create_conversation)
                .delete(handlers::delete_conversation),
        )
        .route("/chat/{conversation_id}", post(handlers::post_chat))
        .route("/history/{conversation_id}", get(handlers::get_history))
        .route("/health", get(handlers::get_health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the gateway HTTP server and serve until the process exits.
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<(), ParlorError> {
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ParlorError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("gateway listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| ParlorError::Internal(format!("gateway server error: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tempfile::tempdir;
    use tower::ServiceExt;

    async fn test_router() -> (Router, AppState, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        // Low-cost hashing parameters so the suite stays fast.
        let state = AppState::new(db, PasswordHasher::new(1024, 2, 1));
        (router(state.clone()), state, dir)
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint_responds() {
        let (app, _state, _dir) = test_router().await;
        let response = app.oneshot(empty_request("GET", "/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn duplicate_registration_returns_conflict() {
        let (app, _state, _dir) = test_router().await;
        let payload = serde_json::json!({"username": "alice", "password": "password123"});

        let response = app
            .clone()
            .oneshot(json_request("POST", "/register", payload.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["message"], "Success");

        let response = app
            .oneshot(json_request("POST", "/register", payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn login_with_bad_credentials_is_unauthorized() {
        let (app, _state, _dir) = test_router().await;
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/register",
                serde_json::json!({"username": "alice", "password": "password123"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(json_request(
                "POST",
                "/login",
                serde_json::json!({"username": "alice", "password": "wrong-password"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn chat_against_missing_conversation_is_not_found() {
        let (app, _state, _dir) = test_router().await;
        let response = app
            .oneshot(json_request(
                "POST",
                "/chat/no-such-conversation",
                serde_json::json!({"message": "hello"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn full_chat_flow_over_http() {
        let (app, _state, _dir) = test_router().await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/register",
                serde_json::json!({"username": "alice", "password": "password123"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/login",
                serde_json::json!({"username": "alice", "password": "password123"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let user = json_body(response).await;
        let user_id = user["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(empty_request("POST", &format!("/conversations/{user_id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let conversation = json_body(response).await;
        let conversation_id = conversation["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/chat/{conversation_id}"),
                serde_json::json!({"message": "hello"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let reply = json_body(response).await;
        assert!(reply["bot"].is_string());

        let response = app
            .clone()
            .oneshot(empty_request("GET", &format!("/history/{conversation_id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let history = json_body(response).await;
        let entries = history.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["sender"], "user");
        assert_eq!(entries[0]["content"], "hello");
        assert_eq!(entries[1]["sender"], "bot");
        assert_eq!(entries[1]["content"], reply["bot"]);

        let response = app
            .clone()
            .oneshot(empty_request(
                "DELETE",
                &format!("/conversations/{conversation_id}"),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(empty_request("GET", &format!("/conversations/{user_id}")))
            .await
            .unwrap();
        let listed = json_body(response).await;
        assert!(listed.as_array().unwrap().is_empty());
    }
}
