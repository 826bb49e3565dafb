use std::collections::HashMap;
use serde::Serialize;
use serde_json::Value;

use super::SubmissionMeta;

/// Decoded answer for one field key.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AnswerNode {
    pub label: Value,
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    pub value: Value,
}

/// Key the submission metadata is serialized under. Form fields may not use it.
pub const META_KEY: &str = "_meta";

/// Decoded answers keyed by field key, plus the submission metadata
/// (serialized under the reserved `_meta` key, which `build_answers`
/// never lets a field take).
#[derive(Debug, Serialize, Clone, Default)]
pub struct AnswerMap {
    #[serde(rename = "_meta")]
    pub meta: SubmissionMeta,
    #[serde(flatten)]
    pub answers: HashMap<String, AnswerNode>,
}

impl AnswerMap {
    pub fn new(meta: SubmissionMeta) -> Self {
        AnswerMap {
            meta,
            answers: HashMap::new(),
        }
    }

    /// Last write wins.
    pub fn insert(&mut self, key: &str, node: AnswerNode) -> Option<AnswerNode> {
        self.answers.insert(key.to_string(), node)
    }

    pub fn get(&self, key: &str) -> Option<&AnswerNode> {
        self.answers.get(key)
    }

    /// Decoded value stored under `key`, if any.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.get(key).map(|node| &node.value)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
