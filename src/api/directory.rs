//
//  yacon
//  api/directory.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Typed models for Directory API resources.
//!
//! Only the fields the client reasons about are typed. Everything else the API
//! returns is kept in `extra` so that round-tripping a resource to the
//! terminal loses nothing.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A department (organisational unit).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    /// Numeric department id.
    pub id: u64,

    /// Human-readable label, unique within the organisation (e.g. `it`).
    #[serde(default)]
    pub label: Option<String>,

    /// Localised name; either a string or a `{"ru": ..., "en": ...}` map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// A user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Numeric user id.
    pub id: u64,

    /// Login without the domain part.
    #[serde(default)]
    pub nickname: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Kind of object that can be a group member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MemberType {
    User,
    Group,
    Department,
}

impl fmt::Display for MemberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::User => "user",
            Self::Group => "group",
            Self::Department => "department",
        };
        f.write_str(name)
    }
}

/// Body of a membership POST: `{"type": "user", "id": 42}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipRecord {
    #[serde(rename = "type")]
    pub member_type: MemberType,
    pub id: u64,
}

impl MembershipRecord {
    pub fn new(member_type: MemberType, id: u64) -> Self {
        Self { member_type, id }
    }

    pub fn user(id: u64) -> Self {
        Self::new(MemberType::User, id)
    }
}

/// Body of an alias POST: `{"name": "ivan.ivanov"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRequest {
    pub name: String,
}
