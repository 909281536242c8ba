//
//  yacon
//  api/endpoint.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Endpoint descriptors for the Directory API.
//!
//! Every operation the client performs is described by an [`Endpoint`]: a path
//! template relative to the API host plus the HTTP [`Method`] used to call it.
//! Descriptors are `const` values and never mutated; the concrete path for a
//! call is produced by [`Endpoint::path`].
//!
//! Two placement rules exist for the resource identifier:
//!
//! | Template | Verb | Result for id `7` |
//! |----------|------|-------------------|
//! | `/groups/{id}/members/` | any | `/groups/7/members/` |
//! | `/departments/` | PATCH or DELETE | `/departments/7/` |
//! | `/departments/` | GET or POST | `/departments/` |

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use super::common::ApiError;

/// Placeholder substituted with the resource identifier.
const ID_PLACEHOLDER: &str = "{id}";

/// HTTP verbs understood by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    /// Whether the resource identifier is appended to the path for this verb.
    pub fn appends_id(self) -> bool {
        matches!(self, Self::Patch | Self::Delete)
    }

    /// Whether the payload travels as a JSON body (as opposed to query parameters).
    pub fn has_body(self) -> bool {
        matches!(self, Self::Post | Self::Patch)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            _ => Err(ApiError::UnsupportedMethod(s.to_string())),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// An immutable `(path template, verb)` pair identifying one API operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    template: Cow<'static, str>,
    method: Method,
}

impl Endpoint {
    /// Creates a descriptor from a static template.
    pub const fn new(template: &'static str, method: Method) -> Self {
        Self {
            template: Cow::Borrowed(template),
            method,
        }
    }

    /// Creates a descriptor from a runtime path, as typed on the command line.
    ///
    /// A leading `/` is added when missing so the path can be joined to the host.
    pub fn custom(path: &str, method: Method) -> Self {
        let template = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
        Self {
            template: Cow::Owned(template),
            method,
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Whether building a path for this endpoint requires a resource identifier.
    pub fn requires_id(&self) -> bool {
        self.template.contains(ID_PLACEHOLDER) || self.method.appends_id()
    }

    /// Builds the concrete request path for this endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingResourceId`] when the template or verb needs an
    /// identifier and `id` is `None` or blank.
    pub fn path(&self, id: Option<&str>) -> Result<String, ApiError> {
        let id = id.map(str::trim).filter(|id| !id.is_empty());

        if !self.requires_id() {
            return Ok(self.template.to_string());
        }

        let id = id.ok_or_else(|| ApiError::MissingResourceId(self.to_string()))?;
        let id = id.trim_matches('/');

        if self.template.contains(ID_PLACEHOLDER) {
            return Ok(self.template.replace(ID_PLACEHOLDER, id));
        }

        let (path, query) = match self.template.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (self.template.as_ref(), None),
        };
        let path = format!("{}/{}/", path.trim_end_matches('/'), id);
        match query {
            Some(query) => Ok(format!("{}?{}", path, query)),
            None => Ok(path),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.template)
    }
}

pub const GROUPS_LIST: Endpoint = Endpoint::new("/groups/", Method::Get);
pub const GROUP_CREATE: Endpoint = Endpoint::new("/groups/", Method::Post);
pub const GROUP_PATCH: Endpoint = Endpoint::new("/groups/", Method::Patch);
pub const GROUP_DELETE: Endpoint = Endpoint::new("/groups/", Method::Delete);
pub const GROUP_MEMBERS: Endpoint = Endpoint::new("/groups/{id}/members/", Method::Get);
pub const GROUP_ADD_MEMBER: Endpoint = Endpoint::new("/groups/{id}/members/", Method::Post);

pub const DEPARTMENTS_LIST: Endpoint = Endpoint::new("/departments/", Method::Get);
pub const DEPARTMENT_PATCH: Endpoint = Endpoint::new("/departments/", Method::Patch);
pub const DEPARTMENT_DELETE: Endpoint = Endpoint::new("/departments/", Method::Delete);

pub const USERS_LIST: Endpoint = Endpoint::new("/users/", Method::Get);
pub const USER_PATCH: Endpoint = Endpoint::new("/users/", Method::Patch);
pub const USER_ALIAS_ADD: Endpoint = Endpoint::new("/users/{id}/aliases/", Method::Post);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse() {
        assert_eq!("get".parse::<Method>().unwrap(), Method::Get);
        assert_eq!(" PATCH ".parse::<Method>().unwrap(), Method::Patch);
        assert_eq!("Delete".parse::<Method>().unwrap(), Method::Delete);
    }

    #[test]
    fn test_method_parse_unsupported() {
        let err = "PUT".parse::<Method>().unwrap_err();
        assert!(matches!(err, ApiError::UnsupportedMethod(ref m) if m == "PUT"));
    }

    #[test]
    fn test_list_path_ignores_id() {
        assert_eq!(GROUPS_LIST.path(None).unwrap(), "/groups/");
        assert_eq!(GROUPS_LIST.path(Some("5")).unwrap(), "/groups/");
    }

    #[test]
    fn test_patch_appends_id_once() {
        assert_eq!(DEPARTMENT_PATCH.path(Some("2")).unwrap(), "/departments/2/");
        assert_eq!(USER_PATCH.path(Some("/42/")).unwrap(), "/users/42/");
        assert_eq!(GROUP_DELETE.path(Some("9")).unwrap(), "/groups/9/");
    }

    #[test]
    fn test_custom_patch_without_trailing_slash() {
        let endpoint = Endpoint::custom("departments", Method::Patch);
        assert_eq!(endpoint.path(Some("3")).unwrap(), "/departments/3/");
    }

    #[test]
    fn test_custom_id_goes_before_query() {
        let endpoint = Endpoint::custom("/users/?fields=id", Method::Delete);
        assert_eq!(endpoint.path(Some("42")).unwrap(), "/users/42/?fields=id");

        let endpoint = Endpoint::custom("/departments?x=1", Method::Patch);
        assert_eq!(endpoint.path(Some("3")).unwrap(), "/departments/3/?x=1");
    }

    #[test]
    fn test_placeholder_substitution() {
        assert_eq!(GROUP_MEMBERS.path(Some("17")).unwrap(), "/groups/17/members/");
        assert_eq!(USER_ALIAS_ADD.path(Some("42")).unwrap(), "/users/42/aliases/");
    }

    #[test]
    fn test_missing_id() {
        assert!(matches!(
            DEPARTMENT_PATCH.path(None),
            Err(ApiError::MissingResourceId(_))
        ));
        assert!(matches!(
            GROUP_MEMBERS.path(Some("  ")),
            Err(ApiError::MissingResourceId(_))
        ));
    }

    #[test]
    fn test_descriptors_are_not_mutated() {
        let _ = GROUP_MEMBERS.path(Some("1")).unwrap();
        assert_eq!(GROUP_MEMBERS.template(), "/groups/{id}/members/");
    }
}
