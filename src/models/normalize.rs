use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::SubmissionMeta;

#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    /// The submitted bundle. Must be a JSON object.
    pub raw: Value,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct NormalizeResponse {
    pub canonical: Map<String, Value>,
    pub meta: SubmissionMeta,
}
