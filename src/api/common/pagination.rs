//
//  yacon
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination types for Directory API list responses.
//!
//! The Directory API pages list endpoints with `page` (1-indexed) and
//! `per_page` query parameters and wraps results in an envelope:
//!
//! ```json
//! {
//!     "page": 1,
//!     "pages": 3,
//!     "per_page": 20,
//!     "total": 47,
//!     "links": {"next": "https://api.directory.yandex.net/v6/users/?page=2"},
//!     "result": [...]
//! }
//! ```
//!
//! The client only passes the pair through; it never walks pages on its own.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Payload;

/// A `{page, per_page}` pair merged into a request payload.
///
/// # Example
///
/// ```rust
/// use yacon::api::common::{Pagination, Payload};
///
/// let mut payload = Payload::new();
/// Pagination::new(2, 100).merge_into(&mut payload);
/// assert_eq!(payload["page"], 2);
/// assert_eq!(payload["per_page"], 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Page number, starting at 1.
    pub page: u32,

    /// Items per page.
    pub per_page: u32,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    /// Builds a pair from optional CLI flags.
    ///
    /// Returns `None` when neither flag is set; a missing half falls back to
    /// page 1 or the API's default page size of 20.
    pub fn from_parts(page: Option<u32>, per_page: Option<u32>) -> Option<Self> {
        match (page, per_page) {
            (None, None) => None,
            (page, per_page) => Some(Self::new(page.unwrap_or(1), per_page.unwrap_or(20))),
        }
    }

    /// Writes both fields into `payload`, overwriting existing values.
    pub fn merge_into(&self, payload: &mut Payload) {
        payload.insert("page".to_string(), Value::from(self.page));
        payload.insert("per_page".to_string(), Value::from(self.per_page));
    }
}

/// Envelope returned by Directory API list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Items on the current page.
    #[serde(default = "Vec::new")]
    pub result: Vec<T>,

    #[serde(default)]
    pub page: Option<u32>,

    #[serde(default)]
    pub pages: Option<u32>,

    #[serde(default)]
    pub per_page: Option<u32>,

    #[serde(default)]
    pub total: Option<u64>,

    /// Navigation links (`next`, `prev`, ...).
    #[serde(default)]
    pub links: Option<Value>,
}

impl<T> ListResponse<T> {
    /// Whether the API reports more pages after this one.
    pub fn has_next(&self) -> bool {
        match (self.page, self.pages) {
            (Some(page), Some(pages)) => page < pages,
            _ => false,
        }
    }
}
