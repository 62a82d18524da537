//! Small helpers over [`serde_yaml::Value`] shared by the parser and validator.

use serde_yaml::Value;

/// Human-readable name of a YAML node kind, used in error messages.
pub fn node_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Plain text of a key as it appears in validation messages.
///
/// Scalars render without quotes (`appname`, `42`, `true`, `~`). Other nodes
/// fall back to their flow-less YAML rendering.
pub fn display_key(key: &Value) -> String {
    match key {
        Value::Null => "~".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| node_kind(other).to_string()),
    }
}
