use serde_json::Value;

/// Strings that count as "no answer" once trimmed and lowercased.
pub const EMPTY_STRINGS: [&str; 7] = ["", " ", "null", "none", "n/a", "na", "undefined"];

/// Single source of truth for "treat as missing", shared by the canonical
/// normalizers and the output pruner.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => {
            let folded = s.trim().to_lowercase();
            EMPTY_STRINGS.contains(&folded.as_str())
        }
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
