use serde_json::{Map, Value};

use crate::models::Canonical;
use crate::utils::is_empty;

/// Keeps only attributes that carry a meaningful value, so that nothing
/// downstream receives null placeholders. Order follows the canonical.
pub fn drop_empty(canonical: &Canonical) -> Map<String, Value> {
    canonical
        .entries()
        .iter()
        .filter(|(_, value)| !is_empty(value))
        .map(|(attribute, value)| (attribute.as_str().to_string(), value.clone()))
        .collect()
}
