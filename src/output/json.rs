//
//  yacon
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # JSON Output Formatting
//!
//! API results are printed as JSON. Non-ASCII text (Cyrillic department
//! names, for instance) is written as-is rather than escaped.
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`render_json`] | Pretty or single-line rendering |
//! | [`write_json_to`] | Rendering to any [`Write`] destination |
//! | [`select_path`] | Dotted path extraction such as `.result.0.id` |

use std::io::Write;

use anyhow::{bail, Result};
use serde::Serialize;
use serde_json::Value;

/// Renders a value as JSON text.
///
/// # Example
///
/// ```rust
/// use yacon::output::render_json;
/// use serde_json::json;
///
/// let value = json!({"name": "ИТ"});
/// assert_eq!(render_json(&value, false).unwrap(), r#"{"name":"ИТ"}"#);
/// ```
pub fn render_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

/// Writes a value as JSON followed by a newline.
pub fn write_json_to<W: Write, T: Serialize>(writer: &mut W, value: &T, pretty: bool) -> Result<()> {
    writeln!(writer, "{}", render_json(value, pretty)?)?;
    Ok(())
}

/// Extracts a sub-value using a dotted path.
///
/// The path starts with `.`; segments are object keys or array indices.
/// `.` alone returns the whole value.
///
/// # Example
///
/// ```rust
/// use yacon::output::select_path;
/// use serde_json::json;
///
/// let value = json!({"result": [{"id": 2, "label": "it"}]});
/// assert_eq!(select_path(&value, ".result.0.id").unwrap(), &json!(2));
/// ```
///
/// # Errors
///
/// Fails when the path does not start with `.` or a segment does not exist.
pub fn select_path<'a>(value: &'a Value, path: &str) -> Result<&'a Value> {
    let Some(rest) = path.trim().strip_prefix('.') else {
        bail!("Selector must start with '.': {}", path);
    };

    let mut current = value;
    for segment in rest.split('.').filter(|s| !s.is_empty()) {
        let next = match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        current = match next {
            Some(value) => value,
            None => bail!("Selector {} does not match the response (no '{}')", path, segment),
        };
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_pretty_keeps_unicode() {
        let value = json!({"description": "Отдел"});
        let rendered = render_json(&value, true).unwrap();
        assert!(rendered.contains("Отдел"));
        assert!(rendered.contains('\n'));
    }

    #[test]
    fn test_write_json_to_buffer() {
        let mut buffer = Vec::new();
        write_json_to(&mut buffer, &json!([1, 2]), false).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "[1,2]\n");
    }

    #[test]
    fn test_select_identity() {
        let value = json!({"a": 1});
        assert_eq!(select_path(&value, ".").unwrap(), &value);
    }

    #[test]
    fn test_select_nested() {
        let value = json!({"result": [{"id": 7, "name": {"ru": "ИТ"}}]});
        assert_eq!(select_path(&value, ".result.0.name.ru").unwrap(), &json!("ИТ"));
    }

    #[test]
    fn test_select_missing() {
        let value = json!({"result": []});
        assert!(select_path(&value, ".result.0").is_err());
        assert!(select_path(&value, "result").is_err());
    }
}
