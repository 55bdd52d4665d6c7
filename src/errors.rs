//! Error types and response classification for the API client.

use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

/// An error response from one of the Gyazo API's documented client-error
/// statuses, carrying the message the server sent with it.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 400. Gyazo answers these with plain text; the body is carried as-is.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// 401. The access token is missing, invalid, or revoked.
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// 403. The token's account is not allowed to touch this resource.
    #[error("not privileged: {0}")]
    NotPrivilege(String),
    /// 404.
    #[error("not found: {0}")]
    NotFound(String),
    /// 422. A request parameter was rejected.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// 429. The caller decides whether to retry; this client never does.
    #[error("rate limit exceeded: {0}")]
    RateLimit(String),
}

/// Errors that can occur when making API requests.
///
/// [`Error::Api`] is the expected path: the server understood the request and
/// rejected it with one of its documented statuses. The remaining variants
/// signal a transport failure or a response this client does not recognize.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The API rejected the request with a documented client-error status.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The server replied with a status or error body outside its documented
    /// contract. Carries the full response for diagnostics.
    #[error("unexpected response: {status} {status_text} when fetching {url}")]
    UnexpectedResponse {
        status: u16,
        status_text: String,
        body: String,
        url: Url,
    },
    /// The HTTP request could not be completed (connect, send, or body read).
    #[error("request failed")]
    Request(#[source] reqwest::Error),
    /// A success response body did not match the expected shape.
    #[error("failed to deserialize response body")]
    Json(#[from] serde_json::Error),
    /// The base URL and path did not combine into a valid URL.
    #[error("invalid request URL")]
    InvalidUrl(#[source] url::ParseError),
}

impl Error {
    /// Returns the classified API error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// Error bodies are JSON objects with a single string `message` field.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Classifies a completed response, consuming its body exactly once.
///
/// Success statuses yield the raw body text so the caller can pick the type
/// to deserialize into. Documented client-error statuses become [`ApiError`]
/// values; anything else is an [`Error::UnexpectedResponse`].
pub(crate) async fn check_response(response: reqwest::Response) -> Result<String, Error> {
    let status = response.status();
    let url = response.url().clone();
    let text = response.text().await.map_err(|e| {
        tracing::error!("Failed to read response body: {}", e);
        Error::Request(e)
    })?;

    if status.is_success() {
        return Ok(text);
    }

    // 400 bodies are plain text, not JSON.
    if status == StatusCode::BAD_REQUEST {
        return Err(ApiError::BadRequest(text).into());
    }

    let message = match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => body.message,
        Err(_) => return Err(unexpected(status, text, url)),
    };

    match status.as_u16() {
        401 => Err(ApiError::Unauthorized(message).into()),
        403 => Err(ApiError::NotPrivilege(message).into()),
        404 => Err(ApiError::NotFound(message).into()),
        422 => Err(ApiError::InvalidParameter(message).into()),
        429 => Err(ApiError::RateLimit(message).into()),
        _ => Err(unexpected(status, text, url)),
    }
}

fn unexpected(status: StatusCode, body: String, url: Url) -> Error {
    tracing::error!(
        "Unexpected response {} from {}: {}",
        status,
        url,
        truncate_body(&body)
    );
    Error::UnexpectedResponse {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or("").to_string(),
        body,
        url,
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Back off to a char boundary so the slice cannot split a multibyte
    // sequence.
    let mut cut = MAX;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...[truncated]", &body[..cut])
}
