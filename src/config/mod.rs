//
//  yacon
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Loads the CLI configuration from a TOML file stored in the platform config
//! directory and produces the explicit [`ApiConfig`] handed to
//! [`DirectoryClient::new`](crate::api::DirectoryClient::new).
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/yacon/config.toml`
//! - **macOS**: `~/Library/Application Support/yacon/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\yacon\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [api]
//! host = "https://api.directory.yandex.net/v6"
//! timeout_secs = 10
//! token = "AQAAAAA..."
//! ```
//!
//! ## Precedence
//!
//! Command-line flags and environment variables (`--token` /
//! `YANDEX_CONNECT_TOKEN`, `--host` / `YANDEX_CONNECT_HOST`, `--timeout`)
//! override values from the file, which override the built-in defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Base URL of the Directory API, version 6.
pub const DEFAULT_API_HOST: &str = "https://api.directory.yandex.net/v6";

/// Upper bound for a single request, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Shortest token whose first four characters may be shown when masked.
pub const MASK_VISIBLE_MIN_LEN: usize = 12;

/// Top-level configuration file contents.
///
/// # Example
///
/// ```rust
/// use yacon::config::{Config, DEFAULT_API_HOST};
///
/// let config = Config::default();
/// assert_eq!(config.api.host, DEFAULT_API_HOST);
/// assert!(config.api.token.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Connection settings for the Directory API.
    #[serde(default)]
    pub api: ApiConfig,
}

/// Everything the Directory client needs to connect.
///
/// Built from the config file plus overrides and passed explicitly to the
/// client, so nothing in the API layer reads the process environment.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use yacon::config::ApiConfig;
///
/// let api = ApiConfig::new("secret")
///     .with_host("http://127.0.0.1:8080")
///     .with_timeout_secs(3);
/// assert_eq!(api.timeout(), Duration::from_secs(3));
/// assert_eq!(api.base_url(), "http://127.0.0.1:8080");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API base URL including the version prefix.
    #[serde(default = "default_host")]
    pub host: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// OAuth token. Required before a client can be built.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

fn default_host() -> String {
    DEFAULT_API_HOST.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            timeout_secs: default_timeout_secs(),
            token: None,
        }
    }
}

impl ApiConfig {
    /// Creates a configuration for the default host with the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default()
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Applies command-line / environment overrides on top of file values.
    pub fn with_overrides(
        mut self,
        token: Option<&str>,
        host: Option<&str>,
        timeout_secs: Option<u64>,
    ) -> Self {
        if let Some(token) = token {
            self.token = Some(token.to_string());
        }
        if let Some(host) = host {
            self.host = host.to_string();
        }
        if let Some(secs) = timeout_secs {
            self.timeout_secs = secs;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The base URL with any trailing `/` removed.
    pub fn base_url(&self) -> &str {
        self.host.trim_end_matches('/')
    }

    /// The non-empty token, if one is configured.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    /// A copy safe to print: the token is replaced by a short mask.
    ///
    /// Tokens shorter than [`MASK_VISIBLE_MIN_LEN`] characters are masked whole.
    pub fn masked(&self) -> Self {
        let token = self.token().map(|token| {
            if token.chars().count() < MASK_VISIBLE_MIN_LEN {
                return "****".to_string();
            }
            let visible: String = token.chars().take(4).collect();
            format!("{}****", visible)
        });
        Self {
            token,
            ..self.clone()
        }
    }
}

impl Config {
    /// Loads configuration from the default location.
    ///
    /// A missing file is not an error; defaults are returned.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or is not valid TOML.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path, with the same missing-file rule.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Returns the path to the configuration file.
    ///
    /// The file may not exist; this only returns where it would be.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Renders the configuration as TOML with the token masked.
    pub fn to_display_toml(&self) -> Result<String> {
        let display = Self {
            api: self.api.masked(),
        };
        Ok(toml::to_string_pretty(&display)?)
    }
}
