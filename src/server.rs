//! HTTP server hosting the welcome page.
//!
//! ## Endpoints
//! - GET / - The welcome page (`index.html` from the static dir)
//! - GET /static/* - Static assets (wasm bundle, css)
//! - GET /favicon.ico - 204, keeps browsers quiet
//! - GET /health - Health check
//! - GET /auth/whoami?tokens=... - Forwarded to the configured auth backend

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
    body::Body,
    extract::{RawQuery, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use tower_http::services::ServeDir;

use crate::config::Config;
use crate::query;
use crate::whoami::{whoami_path, WHOAMI_PATH};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    static_dir: PathBuf,
    whoami_upstream: Option<String>,
    client: reqwest::Client,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.upstream_timeout_ms))
            .build()
            .context("failed to build upstream HTTP client")?;
        Ok(Self {
            static_dir: config.static_dir.clone(),
            whoami_upstream: config.whoami_upstream.clone(),
            client,
        })
    }
}

/// Build the router for the given configuration.
pub fn router(config: &Config) -> Result<Router> {
    let state = AppState::from_config(config)?;
    let assets = ServeDir::new(&config.static_dir);

    Ok(Router::new()
        .route("/", get(index_handler))
        .route("/favicon.ico", get(favicon_handler))
        .route("/health", get(health_handler))
        .route(WHOAMI_PATH, get(whoami_handler))
        .nest_service("/static", assets)
        .with_state(state))
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: Config) -> Result<()> {
    let app = router(&config)?;
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    log::info!("[server] listening on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let path = state.static_dir.join("index.html");
    tokio::fs::read_to_string(&path)
        .await
        .map(Html)
        .map_err(|e| {
            log::error!("[server] failed to read {}: {}", path.display(), e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

async fn favicon_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn health_handler() -> &'static str {
    "OK"
}

fn json_error(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

/// Forward a whoami lookup to the auth backend and relay its answer.
///
/// The query is read the way the page reads it: first `tokens` wins, empty
/// counts as missing. The token blob is never logged.
async fn whoami_handler(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Response {
    let Some(tokens) = query::tokens(raw.as_deref().unwrap_or_default()) else {
        return json_error(StatusCode::BAD_REQUEST, "missing tokens parameter");
    };
    let Some(upstream) = state.whoami_upstream.as_deref() else {
        log::warn!("[server] whoami requested but no upstream is configured");
        return json_error(StatusCode::SERVICE_UNAVAILABLE, "whoami upstream not configured");
    };

    log::debug!("[server] forwarding whoami to {}", upstream);
    let url = format!("{upstream}{}", whoami_path(&tokens));

    let resp = match state.client.get(&url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            log::error!("[server] whoami upstream request failed: {}", e.without_url());
            return json_error(StatusCode::BAD_GATEWAY, "whoami upstream unreachable");
        }
    };

    let status = resp.status();
    let body = match resp.bytes().await {
        Ok(body) => body,
        Err(e) => {
            log::error!("[server] failed to read whoami upstream response: {}", e.without_url());
            return json_error(StatusCode::BAD_GATEWAY, "whoami upstream unreachable");
        }
    };
    log::debug!("[server] whoami upstream response: status={}", status);

    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap_or_else(|e| {
            log::error!("[server] failed to build whoami response: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        })
}
