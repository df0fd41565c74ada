//! ODE Relay HTTP API
//!
//! Endpoints:
//! - `GET  /`                  - Solver page
//! - `GET  /static/js/main.js` - Page script
//! - `GET  /health`            - Health check
//! - `POST /solve_ode`         - Relay an equation to the chat model

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::llm_client::LlmClient;
use crate::prompt;

const INDEX_HTML: &str = include_str!("../static/index.html");
const MAIN_JS: &str = include_str!("../static/js/main.js");

// ============================================================================
// SHARED STATE
// ============================================================================

/// Read-only state shared by all handlers.
pub struct RelayState {
    pub config: RelayConfig,
    /// Only built when a credential is configured.
    pub llm: Option<LlmClient>,
}

impl RelayState {
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        let llm = match &config.api_key {
            Some(key) => Some(LlmClient::new(&config.api_url, key, &config.model)?),
            None => {
                warn!("DEEPSEEK_API_KEY is not set; /solve_ode will fail until it is configured");
                None
            }
        };

        Ok(Self { config, llm })
    }
}

// ============================================================================
// REQUEST / RESPONSE TYPES
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct SolveRequest {
    #[serde(default)]
    pub equation: Option<String>,
    #[serde(default)]
    pub initial_conditions: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct SolveResponse {
    pub solution: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub credential_configured: bool,
}

// ============================================================================
// HANDLERS
// ============================================================================

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn main_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        MAIN_JS,
    )
}

pub async fn health(State(state): State<Arc<RelayState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.config.model.clone(),
        credential_configured: state.llm.is_some(),
    })
}

/// POST /solve_ode - Forward an equation to the chat model
///
/// Checks the credential before looking at the body. The model's answer is
/// returned verbatim.
pub async fn solve_ode(
    State(state): State<Arc<RelayState>>,
    payload: Result<Json<SolveRequest>, JsonRejection>,
) -> Result<Json<SolveResponse>, RelayError> {
    let llm = state.llm.as_ref().ok_or_else(|| {
        error!("Rejecting /solve_ode: no API credential configured");
        RelayError::missing_credential()
    })?;

    let Json(req) = payload.map_err(|e| {
        warn!("Invalid /solve_ode body: {}", e.body_text());
        RelayError::invalid_body(e.body_text())
    })?;

    let equation = req
        .equation
        .filter(|e| !e.is_empty())
        .ok_or_else(RelayError::missing_equation)?;
    let initial_conditions = req.initial_conditions.unwrap_or_default();

    info!(
        equation_len = equation.len(),
        conditions = initial_conditions.len(),
        "Solving ODE"
    );

    let messages = prompt::build_messages(&equation, &initial_conditions);
    let solution = llm.complete(&messages).await.map_err(|e| {
        error!("ODE relay failed: {}", e);
        e
    })?;

    Ok(Json(SolveResponse { solution }))
}

// ============================================================================
// ROUTER / SERVER
// ============================================================================

pub fn create_router(state: Arc<RelayState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/static/js/main.js", get(main_js))
        .route("/health", get(health))
        .route("/solve_ode", post(solve_ode))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn run_server(config: RelayConfig) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    let model = config.model.clone();
    let credential = if config.has_api_key() { "set" } else { "MISSING" };

    let state = Arc::new(RelayState::new(config)?);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("╔══════════════════════════════════════════════════════════════╗");
    info!("║                        ODE Relay                             ║");
    info!("╠══════════════════════════════════════════════════════════════╣");
    info!("║  Listening on: {:44} ║", addr);
    info!("║  Model:        {:44} ║", model);
    info!("║  API key:      {:44} ║", credential);
    info!("╠══════════════════════════════════════════════════════════════╣");
    info!("║  Endpoints:                                                  ║");
    info!("║    GET  /           - Solver page                            ║");
    info!("║    GET  /health     - Health check                           ║");
    info!("║    POST /solve_ode  - Solve an ODE via the chat model        ║");
    info!("╚══════════════════════════════════════════════════════════════╝");

    axum::serve(listener, app).await?;

    Ok(())
}
