use log::{debug, warn};

use crate::models::{AnswerMap, AnswerNode, Bundle, META_KEY};
use super::decoder::decode_field_value;

/// Decodes every addressable field of the bundle into a keyed answer map.
/// Keyless fields and fields keyed `_meta` are skipped; duplicate keys keep
/// the last field.
pub fn build_answers(bundle: &Bundle) -> AnswerMap {
    let mut answers = AnswerMap::new(bundle.meta.clone());

    for (index, field) in bundle.fields.iter().enumerate() {
        let key = match field.address() {
            Some(key) => key,
            None => {
                debug!("Skipping field {} without key", index);
                continue;
            }
        };

        if key == META_KEY {
            warn!("Skipping field {}: key {} is reserved for submission metadata", index, key);
            continue;
        }

        let node = AnswerNode {
            label: field.label.clone(),
            field_type: field.field_type.clone(),
            value: decode_field_value(field),
        };

        if answers.insert(key, node).is_some() {
            debug!("Field key {} repeated, keeping the later value", key);
        }
    }

    answers
}
