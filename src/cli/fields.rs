//
//  yacon
//  cli/fields.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Shared argument groups that turn command-line flags into request payloads.
//!
//! ```bash
//! # Typed fields: numbers, booleans, null, JSON arrays/objects
//! yacon user patch 42 -F is_enabled=false -F department_id=5
//!
//! # Nested keys with dots
//! yacon department patch --label it -F name.ru="Отдел ИТ" -F name.en="IT"
//!
//! # Strings kept verbatim
//! yacon group create --raw-field label=007 -F name=Agents
//!
//! # Whole body from a file or stdin
//! yacon group create --input group.json
//! ```

use std::fs;
use std::io::Read;

use anyhow::{bail, Context, Result};
use clap::Args;
use serde_json::Value;

use crate::api::common::{Pagination, Payload};

/// Body fields for POST and PATCH commands.
#[derive(Args, Debug, Default)]
pub struct BodyArgs {
    /// Body field as key=value; values are parsed as JSON when possible
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,

    /// Body field as key=value; value is always a string
    #[arg(long, action = clap::ArgAction::Append)]
    pub raw_field: Vec<String>,

    /// Read the JSON body from a file (- for stdin)
    #[arg(long, short = 'i', conflicts_with_all = ["field", "raw_field"])]
    pub input: Option<String>,
}

impl BodyArgs {
    /// Builds the payload, or `None` when no field was given.
    pub fn payload(&self) -> Result<Option<Payload>> {
        if let Some(input) = &self.input {
            return read_payload(input).map(Some);
        }

        if self.field.is_empty() && self.raw_field.is_empty() {
            return Ok(None);
        }

        let mut payload = Payload::new();
        for field in &self.field {
            let (key, value) = split_field(field)?;
            set_nested_value(&mut payload, key, parse_value(value));
        }
        for field in &self.raw_field {
            let (key, value) = split_field(field)?;
            set_nested_value(&mut payload, key, Value::String(value.to_string()));
        }
        Ok(Some(payload))
    }

    /// Like [`payload`](Self::payload) but an empty body is a usage error.
    pub fn required_payload(&self) -> Result<Payload> {
        match self.payload()? {
            Some(payload) if !payload.is_empty() => Ok(payload),
            _ => bail!("No fields given. Use -F key=value, --raw-field key=value or --input FILE"),
        }
    }
}

/// Filters, field selection and paging for list commands.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Comma-separated fields to return (e.g. name,email,label)
    #[arg(long)]
    pub fields: Option<String>,

    /// Extra query parameter as key=value (e.g. -q parent_id=1)
    #[arg(long = "query", short = 'q', action = clap::ArgAction::Append)]
    pub query: Vec<String>,

    /// Page number, starting at 1
    #[arg(long)]
    pub page: Option<u32>,

    /// Items per page
    #[arg(long)]
    pub per_page: Option<u32>,
}

impl ListArgs {
    /// Query payload, or `None` when no filter was given.
    pub fn payload(&self) -> Result<Option<Payload>> {
        if self.fields.is_none() && self.query.is_empty() {
            return Ok(None);
        }

        let mut payload = Payload::new();
        for param in &self.query {
            let (key, value) = split_field(param)?;
            payload.insert(key.to_string(), Value::String(value.to_string()));
        }
        if let Some(fields) = &self.fields {
            payload.insert("fields".to_string(), Value::String(fields.clone()));
        }
        Ok(Some(payload))
    }

    pub fn pagination(&self) -> Option<Pagination> {
        Pagination::from_parts(self.page, self.per_page)
    }
}

fn read_payload(input: &str) -> Result<Payload> {
    let content = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))?
    };

    match serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", input))? {
        Value::Object(map) => Ok(map),
        _ => bail!("{} must contain a JSON object", input),
    }
}

fn split_field(field: &str) -> Result<(&str, &str)> {
    match field.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => bail!("Invalid field format: {}. Expected key=value", field),
    }
}

/// Infers a JSON value from a command-line string.
///
/// A number is only inferred when it prints back exactly as typed, so `007`
/// and `1.50` stay strings.
fn parse_value(raw: &str) -> Value {
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => {
            if let Some(n) = parse_number(raw) {
                return Value::Number(n);
            }
            if raw.starts_with('[') || raw.starts_with('{') {
                if let Ok(value) = serde_json::from_str(raw) {
                    return value;
                }
            }
            Value::String(raw.to_string())
        }
    }
}

fn parse_number(raw: &str) -> Option<serde_json::Number> {
    let number = match raw.parse::<i64>() {
        Ok(n) => serde_json::Number::from(n),
        Err(_) => serde_json::Number::from_f64(raw.parse::<f64>().ok()?)?,
    };
    (number.to_string() == raw).then_some(number)
}

fn set_nested_value(obj: &mut Payload, key: &str, value: Value) {
    match key.split_once('.') {
        None => {
            obj.insert(key.to_string(), value);
        }
        Some((first, rest)) => {
            let entry = obj
                .entry(first.to_string())
                .or_insert_with(|| Value::Object(Payload::new()));
            if !entry.is_object() {
                *entry = Value::Object(Payload::new());
            }
            if let Value::Object(nested) = entry {
                set_nested_value(nested, rest, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_value_types() {
        assert_eq!(parse_value("true"), json!(true));
        assert_eq!(parse_value("null"), Value::Null);
        assert_eq!(parse_value("42"), json!(42));
        assert_eq!(parse_value("1.5"), json!(1.5));
        assert_eq!(parse_value("[1,2]"), json!([1, 2]));
        assert_eq!(parse_value("{broken"), json!("{broken"));
        assert_eq!(parse_value("Отдел ИТ"), json!("Отдел ИТ"));
    }

    #[test]
    fn test_numbers_keep_their_text() {
        assert_eq!(parse_value("007"), json!("007"));
        assert_eq!(parse_value("1.50"), json!("1.50"));
        assert_eq!(parse_value("+5"), json!("+5"));
        assert_eq!(parse_value("-3"), json!(-3));

        let args = BodyArgs {
            field: vec!["nickname=007".to_string(), "fields=1.50".to_string()],
            ..Default::default()
        };
        let payload = args.payload().unwrap().unwrap();
        assert_eq!(payload["nickname"], "007");
        assert_eq!(payload["fields"], "1.50");
    }

    #[test]
    fn test_body_fields_nested() {
        let args = BodyArgs {
            field: vec![
                "name.ru=Отдел ИТ".to_string(),
                "name.en=IT".to_string(),
                "parent_id=1".to_string(),
            ],
            raw_field: vec!["label=007".to_string()],
            input: None,
        };
        let payload = args.payload().unwrap().unwrap();
        assert_eq!(
            Value::Object(payload),
            json!({
                "name": {"ru": "Отдел ИТ", "en": "IT"},
                "parent_id": 1,
                "label": "007"
            })
        );
    }

    #[test]
    fn test_body_value_may_contain_equals() {
        let args = BodyArgs {
            field: vec!["description=a=b".to_string()],
            ..Default::default()
        };
        let payload = args.payload().unwrap().unwrap();
        assert_eq!(payload["description"], "a=b");
    }

    #[test]
    fn test_invalid_field() {
        let args = BodyArgs {
            field: vec!["no-equals".to_string()],
            ..Default::default()
        };
        assert!(args.payload().is_err());
        assert!(BodyArgs::default().required_payload().is_err());
    }

    #[test]
    fn test_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("body.json");
        std::fs::write(&path, r#"{"name": "Admins", "label": "admins"}"#).unwrap();

        let args = BodyArgs {
            input: Some(path.display().to_string()),
            ..Default::default()
        };
        let payload = args.required_payload().unwrap();
        assert_eq!(payload["label"], "admins");

        std::fs::write(&path, "[1, 2]").unwrap();
        assert!(args.payload().is_err());
    }

    #[test]
    fn test_list_args() {
        let args = ListArgs {
            fields: Some("name,email".to_string()),
            query: vec!["parent_id=1".to_string()],
            page: None,
            per_page: Some(1000),
        };
        let payload = args.payload().unwrap().unwrap();
        assert_eq!(payload["fields"], "name,email");
        assert_eq!(payload["parent_id"], "1");
        assert_eq!(args.pagination(), Some(Pagination::new(1, 1000)));

        assert!(ListArgs::default().payload().unwrap().is_none());
        assert!(ListArgs::default().pagination().is_none());
    }
}
