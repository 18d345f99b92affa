//! API client for the account endpoints

use develevate_types::{AuthResponse, LoginRequest, SignupRequest};
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};

pub const SIGNUP_URL: &str = "/api/users/signup";
pub const LOGIN_URL: &str = "/api/users/login";

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// Create an account and start a session
pub async fn signup(request: &SignupRequest) -> Result<AuthResponse, String> {
    post_json(SIGNUP_URL, request).await
}

/// Start a session for an existing account
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, String> {
    post_json(LOGIN_URL, request).await
}

async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<AuthResponse, String> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| format!("Encode error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<AuthResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Prefer the server's message, fall back to the status code
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ApiErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP error: {}", status),
    }
}
