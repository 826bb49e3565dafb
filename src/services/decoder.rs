use serde_json::Value;

use crate::models::{Field, FieldOption};

/// Display text for an option id, if one of the options declares it.
/// Ids compare as raw JSON, so `1` and `"1"` are different ids.
pub fn option_text<'a>(options: &'a [FieldOption], option_id: &Value) -> Option<&'a Value> {
    options
        .iter()
        .find(|opt| opt.id == *option_id)
        .map(|opt| &opt.text)
        .filter(|text| !text.is_null())
}

/// Resolves one choice identifier, falling back to the identifier itself
/// for stale or unknown ids.
fn resolve_one(value: &Value, options: &[FieldOption]) -> Value {
    option_text(options, value)
        .cloned()
        .unwrap_or_else(|| value.clone())
}

/// Maps choice identifiers to their display text. Arrays are resolved
/// element-wise, strings as a single id, anything else is left alone.
pub fn resolve_choice(value: &Value, options: &[FieldOption]) -> Value {
    match value {
        Value::Array(ids) => Value::Array(ids.iter().map(|id| resolve_one(id, options)).collect()),
        Value::String(_) => resolve_one(value, options),
        other => other.clone(),
    }
}

/// Display-ready value of a field. Only multiple-choice fields are decoded;
/// every other type is returned verbatim.
pub fn decode_field_value(field: &Field) -> Value {
    if field.is_multiple_choice() {
        resolve_choice(&field.value, field.options())
    } else {
        field.value.clone()
    }
}
