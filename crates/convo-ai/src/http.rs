//! Shared HTTP plumbing for the hosted backends.

use std::time::Duration;

use crate::AiError;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Error bodies are truncated to this many characters.
const ERROR_BODY_LIMIT: usize = 200;

pub(crate) fn build_client(timeout: Duration) -> Result<reqwest::Client, AiError> {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(timeout)
        .build()
        .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))
}

/// Map a transport-level reqwest failure.
pub(crate) fn send_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Timeout
    } else {
        AiError::NetworkError(e.to_string())
    }
}

/// Turn a non-success response into the matching `AiError`.
pub(crate) async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, AiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    Err(status_error(status, &text))
}

pub(crate) fn status_error(status: reqwest::StatusCode, body: &str) -> AiError {
    let body = body.chars().take(ERROR_BODY_LIMIT).collect::<String>();
    match status {
        reqwest::StatusCode::TOO_MANY_REQUESTS => AiError::RateLimited,
        reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
            AiError::Unauthorized(format!("HTTP {status}: {body}"))
        }
        _ => AiError::ApiError(format!("HTTP {status}: {body}")),
    }
}
