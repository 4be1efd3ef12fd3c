//! Common utilities for output formatters

use serde::Serialize;

use crate::config::defaults;

/// Render a raw JSON field for display, N/A for null or empty strings
pub fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => defaults::MISSING.to_string(),
        serde_json::Value::String(s) if s.is_empty() => defaults::MISSING.to_string(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}

/// Print any serializable value as YAML
pub fn print_yaml<T: Serialize + ?Sized>(data: &T) {
    match serde_yml::to_string(data) {
        Ok(yaml) => print!("{}", yaml),
        Err(e) => eprintln!("Error serializing to YAML: {}", e),
    }
}
