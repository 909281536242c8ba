//
//  yacon
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Yandex Connect Directory Client
//!
//! A small client library and CLI for the Yandex Connect Directory REST API.
//!
//! ## Overview
//!
//! Every request goes through one dispatcher,
//! [`DirectoryClient::execute`](api::DirectoryClient::execute), which takes an
//! endpoint descriptor, a payload, an optional resource id and optional
//! pagination. The verb decides where the payload goes: query string for
//! `GET`, JSON body for `POST` and `PATCH`, nowhere for `DELETE`.
//!
//! ## Module Structure
//!
//! - [`api`]: Endpoint descriptors, the HTTP client and resource models
//! - [`cli`]: Command-line interface definitions using clap
//! - [`config`]: Configuration file management
//! - [`output`]: JSON output formatting
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use yacon::api::DirectoryClient;
//! use yacon::config::ApiConfig;
//!
//! # async fn run() -> Result<(), yacon::api::ApiError> {
//! let client = DirectoryClient::new(&ApiConfig::new("oauth-token"))?;
//! let it = client.department_id_by_label("it", None).await?;
//! println!("department id: {it}");
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
pub mod cli;

/// Directory API client, endpoint table and resource models.
pub mod api;

/// Configuration file management.
///
/// The file lives in a platform-specific location:
/// - Linux: `~/.config/yacon/config.toml`
/// - macOS: `~/Library/Application Support/yacon/config.toml`
/// - Windows: `%APPDATA%\yacon\config.toml`
pub mod config;

/// JSON output formatting.
pub mod output;

/// Re-export of the main CLI struct for convenient access.
pub use cli::Cli;

/// Re-export of the configuration struct.
pub use config::Config;

/// Re-export of the API client.
pub use api::DirectoryClient;

/// Application name, used for the binary and configuration paths.
pub const APP_NAME: &str = "yacon";

/// Application version, derived from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: External service issues
pub mod exit_codes {
    use reqwest::StatusCode;

    use crate::api::ApiError;

    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments, including an unsupported HTTP verb.
    pub const USAGE: i32 = 2;

    /// No token configured, or the API rejected it.
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found, either by the API or by a lookup helper.
    pub const NOT_FOUND: i32 = 8;

    /// API rate limit exceeded.
    pub const RATE_LIMIT: i32 = 32;

    /// Maps an error to its exit code.
    ///
    /// Errors that did not originate in the API layer exit with [`ERROR`].
    pub fn for_error(err: &anyhow::Error) -> i32 {
        match err.downcast_ref::<ApiError>() {
            Some(api) => for_api_error(api),
            None => ERROR,
        }
    }

    fn for_api_error(err: &ApiError) -> i32 {
        match err {
            ApiError::AuthRequired => AUTH_ERROR,
            ApiError::UnsupportedMethod(_) | ApiError::MissingResourceId(_) => USAGE,
            ApiError::NotFound { .. } => NOT_FOUND,
            ApiError::Http { status, .. } => match *status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AUTH_ERROR,
                StatusCode::NOT_FOUND => NOT_FOUND,
                StatusCode::TOO_MANY_REQUESTS => RATE_LIMIT,
                _ => ERROR,
            },
            _ => ERROR,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn http(status: StatusCode) -> anyhow::Error {
            ApiError::Http {
                status,
                body: String::new(),
            }
            .into()
        }

        #[test]
        fn test_api_errors_map_to_codes() {
            assert_eq!(for_error(&ApiError::AuthRequired.into()), AUTH_ERROR);
            assert_eq!(
                for_error(&ApiError::UnsupportedMethod("PUT".into()).into()),
                USAGE
            );
            assert_eq!(
                for_error(
                    &ApiError::NotFound {
                        kind: "user",
                        key: "ghost".into()
                    }
                    .into()
                ),
                NOT_FOUND
            );
        }

        #[test]
        fn test_http_statuses_map_to_codes() {
            assert_eq!(for_error(&http(StatusCode::UNAUTHORIZED)), AUTH_ERROR);
            assert_eq!(for_error(&http(StatusCode::FORBIDDEN)), AUTH_ERROR);
            assert_eq!(for_error(&http(StatusCode::NOT_FOUND)), NOT_FOUND);
            assert_eq!(for_error(&http(StatusCode::TOO_MANY_REQUESTS)), RATE_LIMIT);
            assert_eq!(for_error(&http(StatusCode::BAD_REQUEST)), ERROR);
        }

        #[test]
        fn test_context_does_not_hide_api_error() {
            let err = anyhow::Error::from(ApiError::AuthRequired).context("Failed to list users");
            assert_eq!(for_error(&err), AUTH_ERROR);
        }

        #[test]
        fn test_other_errors_are_general() {
            assert_eq!(for_error(&anyhow::anyhow!("boom")), ERROR);
        }
    }
}
