//! leaderboard REST API server.
//!
//! Provides HTTP endpoints for ranking an uploaded players CSV.
//!
//! Run with: `cargo run --bin leaderboard-server --features server`
//!
//! Environment variables:
//! - `LEADERBOARD_PORT` - Port to listen on (default: 8080)
//! - `LEADERBOARD_HOST` - Host to bind to (default: 0.0.0.0)
//! - `LEADERBOARD_API_TOKEN` - Bearer token for authentication (optional, if set all requests require it)

use std::io::Write;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tempfile::NamedTempFile;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leaderboard::cli::args::Args;
use leaderboard::cli::delimiter::parse_delimiter_arg;
use leaderboard::cli::exit::Outcome;
use leaderboard::orchestrator;
use leaderboard::rank::{Algorithm, DEFAULT_REPORTING_INTERVAL};

/// Server configuration from environment.
#[derive(Clone)]
struct Config {
    port: u16,
    host: String,
    api_token: Option<String>,
}

impl Config {
    fn from_env() -> Self {
        Self {
            port: std::env::var("LEADERBOARD_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            host: std::env::var("LEADERBOARD_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            api_token: std::env::var("LEADERBOARD_API_TOKEN")
                .ok()
                .filter(|s| !s.is_empty()),
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leaderboard_server=info,leaderboard=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let addr: SocketAddr = match format!("{}:{}", config.host, config.port).parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!("invalid listen address: {}", e);
            std::process::exit(2);
        }
    };

    if config.api_token.is_some() {
        tracing::info!("API token authentication enabled");
    } else {
        tracing::warn!("No LEADERBOARD_API_TOKEN set - API is unauthenticated");
    }

    let app = Router::new()
        .route("/health", get(health))
        .route("/rank", post(rank))
        .with_state(Arc::new(config))
        .layer(DefaultBodyLimit::max(50 * 1024 * 1024)) // 50MB max
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("leaderboard-server listening on {}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("failed to bind {}: {}", addr, e);
            std::process::exit(2);
        }
    };
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {}", e);
    }
}

/// Health check endpoint.
async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

/// Rank an uploaded players CSV.
///
/// Accepts multipart form data with:
/// - `players`: The players CSV file (`name,level` header)
/// - `algorithm`: (optional) heap, quickselect, or online (default heap)
/// - `interval`: (optional) Online reporting interval (default 50)
/// - `delimiter`: (optional) Force delimiter (comma/tab/semicolon/pipe/caret)
///
/// Requires `Authorization: Bearer <token>` header if `LEADERBOARD_API_TOKEN` is set.
async fn rank(
    State(config): State<Arc<Config>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    if let Some(expected_token) = &config.api_token {
        let auth_header = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        let provided_token = auth_header
            .strip_prefix("Bearer ")
            .or_else(|| auth_header.strip_prefix("bearer "))
            .unwrap_or("");
        if provided_token != expected_token {
            return error_response(StatusCode::UNAUTHORIZED, "Invalid or missing bearer token");
        }
    }

    let mut players_file: Option<NamedTempFile> = None;
    let mut algorithm = Algorithm::Heap;
    let mut interval = DEFAULT_REPORTING_INTERVAL;
    let mut delimiter: Option<u8> = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "players" => {
                let data = match field.bytes().await {
                    Ok(data) => data,
                    Err(e) => {
                        return error_response(
                            StatusCode::BAD_REQUEST,
                            format!("Failed to read 'players' file: {}", e),
                        );
                    }
                };
                let mut temp = match NamedTempFile::new() {
                    Ok(t) => t,
                    Err(e) => {
                        return error_response(
                            StatusCode::INTERNAL_SERVER_ERROR,
                            format!("Failed to create temp file: {}", e),
                        );
                    }
                };
                if let Err(e) = temp.write_all(&data) {
                    return error_response(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Failed to write temp file: {}", e),
                    );
                }
                players_file = Some(temp);
            }
            "algorithm" => {
                if let Ok(text) = field.text().await {
                    match Algorithm::from_str(text.trim()) {
                        Ok(parsed) => algorithm = parsed,
                        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
                    }
                }
            }
            "interval" => {
                if let Ok(text) = field.text().await {
                    match text.trim().parse::<usize>() {
                        Ok(parsed) => interval = parsed,
                        Err(_) => {
                            return error_response(
                                StatusCode::BAD_REQUEST,
                                "interval must be a non-negative integer",
                            );
                        }
                    }
                }
            }
            "delimiter" => {
                if let Ok(text) = field.text().await {
                    match parse_delimiter_arg(text.trim()) {
                        Ok(byte) => delimiter = Some(byte),
                        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
                    }
                }
            }
            _ => {}
        }
    }

    let Some(players_temp) = players_file else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Missing required field: 'players' (CSV file)",
        );
    };

    let args = Args::new(
        players_temp.path().to_path_buf(),
        algorithm,
        interval,
        delimiter,
        true, // Always return JSON from API
    );

    match orchestrator::run(&args) {
        Ok(result) => {
            let status = match result.outcome {
                Outcome::Ranked => StatusCode::OK,
                Outcome::Refusal => StatusCode::UNPROCESSABLE_ENTITY,
            };
            match serde_json::from_str::<serde_json::Value>(&result.output) {
                Ok(json) => (status, Json(json)).into_response(),
                Err(_) => (
                    status,
                    Json(serde_json::json!({
                        "raw_output": result.output
                    })),
                )
                    .into_response(),
            }
        }
        Err(e) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Ranking failed: {}", e),
        ),
    }
}
