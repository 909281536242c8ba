//
//  yacon
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client for the Directory API
//!
//! [`DirectoryClient`] owns the one place that knows how to turn an
//! [`Endpoint`] plus a payload into an HTTP request and how to interpret the
//! response. Every named operation (list groups, patch a department, ...) is a
//! thin parameter-shaping layer over [`DirectoryClient::execute`].
//!
//! ## Payload placement
//!
//! | Verb | Payload goes to | Extra header |
//! |------|-----------------|--------------|
//! | GET | query string | `Accept: application/json` |
//! | POST | JSON body | `Content-Type: application/json; charset=utf-8` |
//! | PATCH | JSON body, id appended to path | `Content-Type: application/json; charset=utf-8` |
//! | DELETE | nothing, id appended to path | |
//!
//! Every request carries `Authorization: OAuth <token>` and is bounded by the
//! configured timeout. Requests are issued one at a time; lookups that feed a
//! second request complete before it is sent.

use std::fmt;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Request};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::common::{ApiError, ListResponse, Pagination, Payload};
use super::directory::{AliasRequest, Department, MembershipRecord, User};
use super::endpoint::{self, Endpoint, Method};
use crate::config::ApiConfig;

const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Client for the Yandex Connect Directory API.
///
/// # Example
///
/// ```rust,no_run
/// use yacon::api::DirectoryClient;
/// use yacon::config::ApiConfig;
///
/// # async fn example() -> Result<(), yacon::api::ApiError> {
/// let client = DirectoryClient::new(&ApiConfig::new("AQAAAAA..."))?;
/// let it = client.department_id_by_label("it", None).await?;
/// println!("IT department id: {}", it);
/// # Ok(())
/// # }
/// ```
pub struct DirectoryClient {
    http: Client,
    base_url: String,
    token: String,
}

impl fmt::Debug for DirectoryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl DirectoryClient {
    /// Builds a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// - [`ApiError::AuthRequired`] when the configuration carries no token
    /// - [`ApiError::InvalidConfig`] when the host is not an absolute URL
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let token = config.token().ok_or(ApiError::AuthRequired)?.to_string();

        let base_url = config.base_url();
        Url::parse(base_url).map_err(|e| {
            ApiError::InvalidConfig(format!("invalid API host '{}': {}", config.host, e))
        })?;

        let http = Client::builder()
            .user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
            token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Assembles the request for an endpoint without sending it.
    ///
    /// Pagination, when given, is merged into the payload first. The payload
    /// is placed according to the endpoint's verb.
    pub fn build_request(
        &self,
        endpoint: &Endpoint,
        payload: Option<Payload>,
        resource_id: Option<&str>,
        pagination: Option<Pagination>,
    ) -> Result<Request, ApiError> {
        let mut payload = payload.unwrap_or_default();
        if let Some(pagination) = pagination {
            pagination.merge_into(&mut payload);
        }

        let url = format!("{}{}", self.base_url, endpoint.path(resource_id)?);
        let method = endpoint.method();

        let request = self
            .http
            .request(method.into(), &url)
            .header(AUTHORIZATION, format!("OAuth {}", self.token));

        let request = match method {
            Method::Get => request
                .header(ACCEPT, "application/json")
                .query(&query_pairs(&payload)),
            Method::Post | Method::Patch => request
                .header(CONTENT_TYPE, JSON_UTF8)
                .body(Value::Object(payload).to_string()),
            Method::Delete => {
                if !payload.is_empty() {
                    debug!("Ignoring payload for {}", endpoint);
                }
                request
            }
        };

        Ok(request.build()?)
    }

    /// Sends a request for `endpoint` and decodes the JSON response.
    ///
    /// An empty success body decodes to [`Value::Null`].
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] for any non-2xx status, carrying status and body
    /// - [`ApiError::Timeout`] / [`ApiError::Network`] for transport failures
    /// - [`ApiError::MissingResourceId`] when the path needs an id
    /// - [`ApiError::InvalidResponse`] when a success body is not JSON
    pub async fn execute(
        &self,
        endpoint: &Endpoint,
        payload: Option<Payload>,
        resource_id: Option<&str>,
        pagination: Option<Pagination>,
    ) -> Result<Value, ApiError> {
        let request = self.build_request(endpoint, payload, resource_id, pagination)?;
        debug!("{} {}", request.method(), request.url());

        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("{} failed with status {}", endpoint, status);
            return Err(ApiError::Http { status, body });
        }

        debug!("{} -> {} ({} bytes)", endpoint, status, body.len());

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }

    // Groups

    /// Lists groups. The payload (e.g. `fields`) is passed through verbatim.
    pub async fn list_groups(
        &self,
        payload: Option<Payload>,
        pagination: Option<Pagination>,
    ) -> Result<Value, ApiError> {
        self.execute(&endpoint::GROUPS_LIST, payload, None, pagination)
            .await
    }

    /// Lists the members of a group.
    pub async fn group_members(&self, group_id: u64) -> Result<Value, ApiError> {
        self.execute(&endpoint::GROUP_MEMBERS, None, Some(&group_id.to_string()), None)
            .await
    }

    /// Adds a user, group or department to a group.
    pub async fn add_group_member(
        &self,
        group_id: u64,
        member: MembershipRecord,
    ) -> Result<Value, ApiError> {
        self.execute(
            &endpoint::GROUP_ADD_MEMBER,
            Some(to_payload(&member)?),
            Some(&group_id.to_string()),
            None,
        )
        .await
    }

    /// Resolves `login` to a user id and adds that user to the group.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no user has that login; no
    /// membership request is sent in that case.
    pub async fn add_group_member_by_login(
        &self,
        group_id: u64,
        login: &str,
    ) -> Result<Value, ApiError> {
        let user_id = self.user_id_by_login(login).await?;
        self.add_group_member(group_id, MembershipRecord::user(user_id))
            .await
    }

    pub async fn create_group(&self, payload: Payload) -> Result<Value, ApiError> {
        self.execute(&endpoint::GROUP_CREATE, Some(payload), None, None)
            .await
    }

    pub async fn patch_group(&self, group_id: u64, payload: Payload) -> Result<Value, ApiError> {
        self.execute(
            &endpoint::GROUP_PATCH,
            Some(payload),
            Some(&group_id.to_string()),
            None,
        )
        .await
    }

    pub async fn delete_group(&self, group_id: u64) -> Result<Value, ApiError> {
        self.execute(&endpoint::GROUP_DELETE, None, Some(&group_id.to_string()), None)
            .await
    }

    // Departments

    pub async fn list_departments(
        &self,
        payload: Option<Payload>,
        pagination: Option<Pagination>,
    ) -> Result<Value, ApiError> {
        self.execute(&endpoint::DEPARTMENTS_LIST, payload, None, pagination)
            .await
    }

    /// Finds the id of the first department whose label equals `label`.
    ///
    /// The `label` field is forced into the requested field set. Entries are
    /// scanned in the order the API returns them.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no department carries the label.
    pub async fn department_id_by_label(
        &self,
        label: &str,
        payload: Option<Payload>,
    ) -> Result<u64, ApiError> {
        let payload = with_label_field(payload);
        let response = self
            .execute(&endpoint::DEPARTMENTS_LIST, Some(payload), None, None)
            .await?;
        let departments: ListResponse<Department> = decode(response)?;
        let has_next = departments.has_next();

        let found = departments
            .result
            .into_iter()
            .find(|dept| dept.label.as_deref() == Some(label))
            .map(|dept| dept.id);

        if found.is_none() && has_next {
            warn!(
                "Label '{}' not on page {} of {}; raise per_page to search further",
                label,
                departments.page.unwrap_or(1),
                departments.pages.unwrap_or(1)
            );
        }

        found.ok_or_else(|| ApiError::NotFound {
            kind: "department",
            key: label.to_string(),
        })
    }

    pub async fn patch_department(
        &self,
        dept_id: u64,
        payload: Payload,
    ) -> Result<Value, ApiError> {
        self.execute(
            &endpoint::DEPARTMENT_PATCH,
            Some(payload),
            Some(&dept_id.to_string()),
            None,
        )
        .await
    }

    /// Resolves `label` to a department id and patches that department.
    pub async fn patch_department_by_label(
        &self,
        label: &str,
        payload: Payload,
    ) -> Result<Value, ApiError> {
        self.patch_department_by_label_with(label, None, payload)
            .await
    }

    /// Like [`patch_department_by_label`](Self::patch_department_by_label), with
    /// a query payload (e.g. `per_page`) for the label lookup.
    pub async fn patch_department_by_label_with(
        &self,
        label: &str,
        lookup: Option<Payload>,
        payload: Payload,
    ) -> Result<Value, ApiError> {
        let dept_id = self.department_id_by_label(label, lookup).await?;
        self.patch_department(dept_id, payload).await
    }

    pub async fn delete_department(&self, dept_id: u64) -> Result<Value, ApiError> {
        self.execute(
            &endpoint::DEPARTMENT_DELETE,
            None,
            Some(&dept_id.to_string()),
            None,
        )
        .await
    }

    // Users

    pub async fn list_users(
        &self,
        payload: Option<Payload>,
        pagination: Option<Pagination>,
    ) -> Result<Value, ApiError> {
        self.execute(&endpoint::USERS_LIST, payload, None, pagination)
            .await
    }

    /// Finds the id of the user with the given login (nickname).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the API returns no users.
    pub async fn user_id_by_login(&self, login: &str) -> Result<u64, ApiError> {
        let mut payload = Payload::new();
        payload.insert("nickname".to_string(), Value::from(login));
        payload.insert("fields".to_string(), Value::from("id,nickname"));

        let response = self
            .execute(&endpoint::USERS_LIST, Some(payload), None, None)
            .await?;
        let users: ListResponse<User> = decode(response)?;

        users
            .result
            .first()
            .map(|user| user.id)
            .ok_or_else(|| ApiError::NotFound {
                kind: "user",
                key: login.to_string(),
            })
    }

    pub async fn patch_user(&self, user_id: u64, payload: Payload) -> Result<Value, ApiError> {
        self.execute(
            &endpoint::USER_PATCH,
            Some(payload),
            Some(&user_id.to_string()),
            None,
        )
        .await
    }

    /// Adds an alias (extra login) to a user.
    pub async fn set_user_alias(&self, user_id: u64, alias: &str) -> Result<Value, ApiError> {
        let body = AliasRequest {
            name: alias.to_string(),
        };
        self.execute(
            &endpoint::USER_ALIAS_ADD,
            Some(to_payload(&body)?),
            Some(&user_id.to_string()),
            None,
        )
        .await
    }
}

/// Flattens a payload into query parameters.
///
/// Strings are sent verbatim, arrays are comma-joined (`["name", "label"]`
/// becomes `name,label`), nulls are dropped and other values use their JSON
/// text.
fn query_pairs(payload: &Payload) -> Vec<(String, String)> {
    payload
        .iter()
        .filter_map(|(key, value)| query_value(value).map(|v| (key.clone(), v)))
        .collect()
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(query_value)
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => Some(other.to_string()),
    }
}

/// Ensures the `fields` selector of a department listing includes `label`.
fn with_label_field(payload: Option<Payload>) -> Payload {
    let mut payload = payload.unwrap_or_default();

    let fields = match payload.get("fields").and_then(query_value) {
        Some(fields) if !fields.trim().is_empty() => fields,
        _ => {
            payload.insert("fields".to_string(), Value::from("label"));
            return payload;
        }
    };

    let has_label = fields.split(',').any(|field| field.trim() == "label");
    if !has_label {
        let fields = format!("{},label", fields.trim().trim_end_matches(','));
        payload.insert("fields".to_string(), Value::from(fields));
    }
    payload
}

fn to_payload<T: Serialize>(value: &T) -> Result<Payload, ApiError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(ApiError::InvalidPayload(format!(
            "expected a JSON object, got {}",
            other
        ))),
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    Ok(serde_json::from_value(value)?)
}
