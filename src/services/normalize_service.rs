use log::{debug, info};
use serde_json::Value;

use crate::models::{Bundle, DocumentError, NormalizeResponse};
use super::answer_builder::build_answers;
use super::canonical_mapper::{build_canonical_with, FieldMapping, FIELD_MAPPINGS};
use super::pruner::drop_empty;

/// Runs the bundle → answers → canonical → sparse pipeline. Holds no
/// per-request state and can be shared across workers.
#[derive(Clone)]
pub struct NormalizeService {
    mappings: &'static [FieldMapping],
}

impl Default for NormalizeService {
    fn default() -> Self {
        Self::new(&FIELD_MAPPINGS)
    }
}

impl NormalizeService {
    pub fn new(mappings: &'static [FieldMapping]) -> Self {
        NormalizeService { mappings }
    }

    pub fn mappings(&self) -> &[FieldMapping] {
        self.mappings
    }

    /// `raw` is the submitted bundle. Malformed parts degrade to empty values;
    /// this never fails.
    pub fn normalize(&self, raw: &Value) -> NormalizeResponse {
        let bundle = Bundle::from_raw(raw);
        let answers = build_answers(&bundle);
        debug!("Decoded {} answers from {} fields", answers.len(), bundle.fields.len());

        let canonical = build_canonical_with(&answers, self.mappings);
        let sparse = drop_empty(&canonical);
        info!(
            "Normalized submission {}: {} of {} attributes present",
            bundle.meta.submission_id, sparse.len(), self.mappings.len()
        );

        NormalizeResponse {
            canonical: sparse,
            meta: answers.meta,
        }
    }

    /// Offline entry point: parses a bundle document, normalizes it and
    /// renders the response as JSON text.
    pub fn normalize_document(&self, text: &str, pretty: bool) -> Result<String, DocumentError> {
        let raw: Value = serde_json::from_str(text)?;
        if !raw.is_object() {
            return Err(DocumentError::NotAnObject);
        }

        let response = self.normalize(&raw);
        let output = if pretty {
            serde_json::to_string_pretty(&response)?
        } else {
            serde_json::to_string(&response)?
        };
        Ok(output)
    }
}
