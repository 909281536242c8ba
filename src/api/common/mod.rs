//
//  yacon
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API types for the Directory client.
//!
//! - [`ApiError`] - Unified error type for every client operation
//! - [`Payload`] - Open field map used for query parameters and patch bodies
//! - [`Pagination`] / [`ListResponse`] - Paging pair and list envelope
//!
//! # Example
//!
//! ```rust
//! use yacon::api::common::ApiError;
//!
//! fn describe(result: Result<u64, ApiError>) -> String {
//!     match result {
//!         Ok(id) => format!("found {}", id),
//!         Err(ApiError::NotFound { kind, key }) => format!("no {} '{}'", kind, key),
//!         Err(e) => format!("error: {}", e),
//!     }
//! }
//!
//! let err = ApiError::NotFound { kind: "department", key: "it".to_string() };
//! assert_eq!(describe(Err(err)), "no department 'it'");
//! ```

use reqwest::StatusCode;
use thiserror::Error;

mod pagination;

pub use pagination::*;

/// Field name to JSON value mapping sent with a request.
///
/// For GET requests the entries become query parameters; for POST and PATCH
/// they are the JSON body.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// Unified error type for Directory API operations.
///
/// | Variant | Raised when |
/// |---------|-------------|
/// | `AuthRequired` | The client is built without a token |
/// | `InvalidConfig` | The configured API host is not a valid URL |
/// | `UnsupportedMethod` | A verb other than GET/POST/PATCH/DELETE is requested |
/// | `MissingResourceId` | The endpoint path needs an id that was not given |
/// | `Http` | The API answered with a non-2xx status |
/// | `NotFound` | A label or login lookup matched nothing |
/// | `Timeout` | The request exceeded the configured timeout |
/// | `Network` | Any other transport failure |
/// | `InvalidPayload` | A request body is not a JSON object |
/// | `InvalidResponse` | The response body is not the expected JSON |
#[derive(Error, Debug)]
pub enum ApiError {
    /// No token was supplied to the client.
    #[error("Authentication required: set YANDEX_CONNECT_TOKEN, pass --token, or add `token` to the config file")]
    AuthRequired,

    /// The client configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The requested HTTP verb is not one the Directory API is called with.
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// The endpoint needs a resource identifier.
    ///
    /// Carries the endpoint description, e.g. `PATCH /departments/`.
    #[error("Resource id required for {0}")]
    MissingResourceId(String),

    /// The API returned a non-success status.
    #[error("{}", format_http_error(*status, body))]
    Http {
        /// HTTP status of the response.
        status: StatusCode,
        /// Raw response body.
        body: String,
    },

    /// A lookup by human-readable key found no matching resource.
    #[error("No {kind} found for '{key}'")]
    NotFound {
        /// Resource kind, e.g. `department` or `user`.
        kind: &'static str,
        /// The label or login that was looked up.
        key: String,
    },

    /// The request timed out.
    #[error("Request timed out: {0}")]
    Timeout(reqwest::Error),

    /// A network-level error occurred.
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    /// A request payload was not a JSON object.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// The response body could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Network(err)
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}

impl ApiError {
    /// HTTP status carried by the error, if it came from an API response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Timeout(err) | Self::Network(err) => err.status(),
            _ => None,
        }
    }
}

/// Extracts the human-readable message from a Directory API error body.
///
/// The API reports failures as:
///
/// ```json
/// {"code": "not_found", "message": "Department not found"}
/// ```
///
/// Returns `None` when the body is not JSON or carries no message.
pub fn api_error_message(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;

    let message = json.get("message").and_then(|m| m.as_str());
    let code = json.get("code").and_then(|c| c.as_str());

    match (message, code) {
        (Some(message), Some(code)) => Some(format!("{} ({})", message, code)),
        (Some(message), None) => Some(message.to_string()),
        (None, Some(code)) => Some(code.to_string()),
        (None, None) => None,
    }
}

fn format_http_error(status: StatusCode, body: &str) -> String {
    match api_error_message(body) {
        Some(message) => format!("API error ({}): {}", status, message),
        None if body.trim().is_empty() => format!("API error ({})", status),
        None => format!("API error ({}): {}", status, body.trim()),
    }
}
