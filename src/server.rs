//! Admin HTTP server.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/api/admin/chatbot/knowledge` | Knowledge entries, most used first |
//! | `GET`  | `/api/admin/chatbot/patterns` | Learning patterns, most successful first |
//! | `POST` | `/api/chatbot/intent` | Classify a chat message |
//! | `GET`  | `/admin/chatbot` | HTML dashboard |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! # Error Contract
//!
//! Store failures are logged with their cause and answered with a generic
//! message and status 500:
//!
//! ```json
//! { "error": "Failed to fetch knowledge base" }
//! ```
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use chatbot_admin_core::intent::{IntentMatch, IntentRouter};
use chatbot_admin_core::models::{KnowledgeEntry, LearningPattern};
use chatbot_admin_core::store::Store;

use crate::config::Config;
use crate::dashboard::render_dashboard;
use crate::db;
use crate::sqlite_store::SqliteStore;

/// Shared state handed to every handler. Both members are read-only.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn Store>,
    router: Arc<IntentRouter>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, router: IntentRouter) -> Self {
        Self {
            store,
            router: Arc::new(router),
        }
    }
}

/// Build the application router. Exposed so tests can drive it without a
/// socket.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/admin/chatbot/knowledge", get(handle_list_knowledge))
        .route("/api/admin/chatbot/patterns", get(handle_list_patterns))
        .route("/api/chatbot/intent", post(handle_detect_intent))
        .route("/admin/chatbot", get(handle_dashboard))
        .route("/health", get(handle_health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the server on `[server].bind` backed by the SQLite store.
///
/// Runs until the process is terminated.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let pool = db::connect(config).await?;
    let store: Arc<dyn Store> = Arc::new(SqliteStore::new(pool));
    let state = AppState::new(store, config.intent_router()?);

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    info!(bind = %config.server.bind, "chatbot admin server listening");
    axum::serve(listener, app).await?;

    Ok(())
}

// ============ Error response ============

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Error type that converts into an Axum HTTP response.
struct AppError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

/// Logs `err` and returns a 500 carrying only `message`.
fn store_failure(err: anyhow::Error, message: &str) -> AppError {
    let cause = format!("{:#}", err);
    error!(error = %cause, "{}", message);
    AppError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: message.to_string(),
    }
}

// ============ GET /api/admin/chatbot/* ============

async fn handle_list_knowledge(
    State(state): State<AppState>,
) -> Result<Json<Vec<KnowledgeEntry>>, AppError> {
    let entries = state
        .store
        .list_knowledge()
        .await
        .map_err(|e| store_failure(e, "Failed to fetch knowledge base"))?;
    Ok(Json(entries))
}

async fn handle_list_patterns(
    State(state): State<AppState>,
) -> Result<Json<Vec<LearningPattern>>, AppError> {
    let patterns = state
        .store
        .list_patterns()
        .await
        .map_err(|e| store_failure(e, "Failed to fetch learning patterns"))?;
    Ok(Json(patterns))
}

// ============ POST /api/chatbot/intent ============

#[derive(Deserialize)]
struct IntentRequest {
    message: String,
}

async fn handle_detect_intent(
    State(state): State<AppState>,
    Json(req): Json<IntentRequest>,
) -> Json<IntentMatch> {
    Json(state.router.classify(&req.message))
}

// ============ GET /admin/chatbot ============

async fn handle_dashboard(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let knowledge = state
        .store
        .list_knowledge()
        .await
        .map_err(|e| store_failure(e, "Failed to fetch knowledge base"))?;
    let patterns = state
        .store
        .list_patterns()
        .await
        .map_err(|e| store_failure(e, "Failed to fetch learning patterns"))?;

    Ok(Html(render_dashboard(&knowledge, &patterns)))
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
