//
//  yacon
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! HTTP client for the Yandex Connect Directory API v6 at
//! `https://api.directory.yandex.net/v6`.
//!
//! ## Architecture
//!
//! - [`endpoint`]: `(path, verb)` descriptors and pure path builders
//! - [`client`]: [`DirectoryClient`], the single request dispatcher plus the
//!   named operations layered on it
//! - [`directory`]: typed request/response models
//! - [`common`]: error type, payload alias, pagination
//!
//! ## Usage
//!
//! ```rust,no_run
//! use yacon::api::DirectoryClient;
//! use yacon::api::common::{Pagination, Payload};
//! use yacon::config::ApiConfig;
//!
//! # async fn example() -> Result<(), yacon::api::ApiError> {
//! let client = DirectoryClient::new(&ApiConfig::new("AQAAAAA..."))?;
//!
//! let mut payload = Payload::new();
//! payload.insert("fields".into(), "name,email,label".into());
//! let departments = client
//!     .list_departments(Some(payload), Some(Pagination::new(1, 1000)))
//!     .await?;
//! println!("{}", departments);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`ApiError`]. Non-2xx responses surface as
//! `ApiError::Http` with the status and body; label and login lookups that
//! match nothing surface as `ApiError::NotFound`.

/// Core HTTP client: request building, dispatch and named operations.
pub mod client;

/// Shared error, payload and pagination types.
pub mod common;

/// Directory resource models.
pub mod directory;

/// Endpoint descriptors.
pub mod endpoint;

pub use client::DirectoryClient;
pub use common::{ApiError, Pagination, Payload};
pub use endpoint::{Endpoint, Method};
