//! Web router using Axum

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use develevate_core::{AccountError, AccountHandler, InMemoryAccounts, ServerConfig};
use develevate_types::{AuthResponse, LoginRequest, SignupRequest, UserRecord};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn AccountHandler>,
}

impl AppState {
    pub fn new(accounts: Arc<dyn AccountHandler>) -> Self {
        Self { accounts }
    }

    /// State backed by a fresh [`InMemoryAccounts`]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryAccounts::new()))
    }
}

/// Errors returned by API handlers, rendered as `{"error": "..."}`
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Account(#[from] AccountError),

    #[error("Missing bearer token")]
    MissingToken,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Account(AccountError::EmailTaken) => StatusCode::CONFLICT,
            ApiError::Account(AccountError::InvalidCredentials)
            | ApiError::Account(AccountError::InvalidToken)
            | ApiError::MissingToken => StatusCode::UNAUTHORIZED,
            ApiError::Account(AccountError::Validation { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Account(AccountError::Hashing(_)) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            // Details stay in the log
            error!("Internal error: {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Create the web router
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let users = Router::new()
        .route("/signup", post(signup_handler))
        .route("/login", post(login_handler))
        .route("/me", get(me_handler));

    let mut router = Router::new()
        .route("/api/health", get(health_handler))
        .nest("/api/users", users)
        .with_state(state);

    router = if config.dist_dir.is_dir() {
        // SPA: unknown paths fall back to index.html so client routes resolve
        let index = config.dist_dir.join("index.html");
        router.fallback_service(ServeDir::new(&config.dist_dir).fallback(ServeFile::new(index)))
    } else {
        debug!(dist = %config.dist_dir.display(), "No frontend build found");
        router.fallback(build_required_handler)
    };

    if config.cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router = router.layer(cors);
    }

    router.layer(TraceLayer::new_for_http())
}

async fn signup_handler(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let accounts = state.accounts.clone();
    // Argon2 is CPU-bound
    let response = tokio::task::spawn_blocking(move || accounts.register(request))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok((StatusCode::CREATED, Json(response)))
}

async fn login_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let accounts = state.accounts.clone();
    let response = tokio::task::spawn_blocking(move || accounts.login(request))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(response))
}

/// Current user for `Authorization: Bearer <token>`
async fn me_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UserRecord>, ApiError> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token)
        .ok_or(ApiError::MissingToken)?;

    Ok(Json(state.accounts.resolve_token(token)?))
}

/// Token from a `Bearer <token>` credential; the scheme is case-insensitive
fn bearer_token(credentials: &str) -> Option<&str> {
    let (scheme, token) = credentials.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

async fn health_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "accounts": state.accounts.account_count(),
    }))
}

async fn build_required_handler() -> (StatusCode, Html<&'static str>) {
    (
        StatusCode::NOT_FOUND,
        Html(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>DevElevate - Build Required</title>
    <style>
        body { font-family: system-ui, sans-serif; max-width: 600px; margin: 4rem auto; line-height: 1.6; }
        code { background: #f0f0f0; padding: 0.2rem 0.4rem; border-radius: 4px; }
    </style>
</head>
<body>
    <h1>DevElevate frontend not built</h1>
    <ol>
        <li>Install Trunk: <code>cargo install trunk</code></li>
        <li>Add the WASM target: <code>rustup target add wasm32-unknown-unknown</code></li>
        <li>Build: <code>cd crates/develevate-web &amp;&amp; trunk build --release</code></li>
        <li>Restart: <code>cargo run -- serve</code></li>
    </ol>
    <p>The API is available now: <a href="/api/health">/api/health</a></p>
</body>
</html>"#,
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_scheme_is_case_insensitive() {
        assert_eq!(bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(bearer_token("bearer abc"), Some("abc"));
        assert_eq!(bearer_token("BEARER  abc "), Some("abc"));
        assert_eq!(bearer_token("Basic abc"), None);
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("abc"), None);
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            ApiError::from(AccountError::EmailTaken).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(AccountError::InvalidCredentials).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::MissingToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::Internal("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
