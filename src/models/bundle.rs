use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const MULTIPLE_CHOICE: &str = "MULTIPLE_CHOICE";

/// One predefined choice of a choice-type field. Ids and texts are kept as
/// raw JSON so that numeric ids still match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldOption {
    pub id: Value,
    pub text: Value,
}

impl FieldOption {
    /// `None` for entries that are not objects.
    pub fn from_value(value: &Value) -> Option<Self> {
        let option = value.as_object()?;
        Some(FieldOption {
            id: option.get("id").cloned().unwrap_or(Value::Null),
            text: option.get("text").cloned().unwrap_or(Value::Null),
        })
    }
}

/// One question/answer unit of a submitted form.
#[derive(Debug, Clone, Default)]
pub struct Field {
    pub key: Option<String>,
    pub label: Value,
    pub field_type: Option<String>,
    pub value: Value,
    pub options: Vec<FieldOption>,
}

impl Field {
    /// Reads a field attribute by attribute, so a mistyped `type`, `key` or
    /// option never costs the field its `value`. `None` only for entries
    /// that are not objects.
    pub fn from_value(value: &Value) -> Option<Self> {
        let field = value.as_object()?;
        let options = field
            .get("options")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().filter_map(FieldOption::from_value).collect())
            .unwrap_or_default();

        Some(Field {
            key: field.get("key").and_then(Value::as_str).map(str::to_string),
            label: field.get("label").cloned().unwrap_or(Value::Null),
            field_type: field.get("type").and_then(Value::as_str).map(str::to_string),
            value: field.get("value").cloned().unwrap_or(Value::Null),
            options,
        })
    }

    pub fn is_multiple_choice(&self) -> bool {
        self.field_type.as_deref() == Some(MULTIPLE_CHOICE)
    }

    pub fn options(&self) -> &[FieldOption] {
        &self.options
    }

    /// The key this field is addressable by, if it has a usable one.
    pub fn address(&self) -> Option<&str> {
        self.key.as_deref().filter(|k| !k.is_empty())
    }
}

/// Submission metadata carried next to the field list.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionMeta {
    #[serde(default)]
    pub response_id: Value,
    #[serde(default)]
    pub submission_id: Value,
    #[serde(default)]
    pub respondent_id: Value,
    #[serde(default)]
    pub form_id: Value,
    #[serde(default)]
    pub form_name: Value,
    #[serde(default)]
    pub created_at: Value,
}

impl SubmissionMeta {
    fn from_data(data: &Map<String, Value>) -> Self {
        let take = |key: &str| data.get(key).cloned().unwrap_or(Value::Null);
        SubmissionMeta {
            response_id: take("responseId"),
            submission_id: take("submissionId"),
            respondent_id: take("respondentId"),
            form_id: take("formId"),
            form_name: take("formName"),
            created_at: take("createdAt"),
        }
    }
}

/// A submitted form response, read leniently from an untyped payload.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    pub meta: SubmissionMeta,
    pub fields: Vec<Field>,
}

impl Bundle {
    /// Never fails: missing or mistyped containers read as empty, and field
    /// entries that are not objects are dropped.
    pub fn from_raw(raw: &Value) -> Self {
        let data = match raw.get("data").and_then(Value::as_object) {
            Some(data) => data,
            None => {
                log::debug!("Bundle has no data object, treating as empty");
                return Bundle::default();
            }
        };

        let fields = data
            .get("fields")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .enumerate()
                    .filter_map(|(index, entry)| {
                        let field = Field::from_value(entry);
                        if field.is_none() {
                            log::warn!("Skipping field at index {}: not an object", index);
                        }
                        field
                    })
                    .collect()
            })
            .unwrap_or_default();

        Bundle {
            meta: SubmissionMeta::from_data(data),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_raw_reads_meta_and_fields() {
        let raw = json!({
            "eventType": "FORM_RESPONSE",
            "data": {
                "responseId": "r-1",
                "submissionId": "s-1",
                "formName": "Estimation",
                "createdAt": "2024-05-01T10:00:00.000Z",
                "fields": [
                    {"key": "question_a", "label": "Ville", "type": "INPUT_TEXT", "value": "Lyon"},
                    {"key": "question_b", "label": "Role", "type": "MULTIPLE_CHOICE", "value": ["x"],
                     "options": [{"id": "x", "text": "Vendeur"}]}
                ]
            }
        });

        let bundle = Bundle::from_raw(&raw);
        assert_eq!(bundle.meta.response_id, json!("r-1"));
        assert_eq!(bundle.meta.form_name, json!("Estimation"));
        assert_eq!(bundle.meta.respondent_id, Value::Null);
        assert_eq!(bundle.meta.form_id, Value::Null);
        assert_eq!(bundle.fields.len(), 2);
        assert!(bundle.fields[1].is_multiple_choice());
        assert_eq!(bundle.fields[1].options()[0].text, json!("Vendeur"));
    }

    #[test]
    fn test_from_raw_tolerates_missing_structures() {
        assert!(Bundle::from_raw(&json!({})).fields.is_empty());
        assert!(Bundle::from_raw(&json!({"data": "oops"})).fields.is_empty());
        assert!(Bundle::from_raw(&json!({"data": {"fields": null}})).fields.is_empty());
        assert!(Bundle::from_raw(&json!({"data": {"fields": {"a": 1}}})).fields.is_empty());
        assert_eq!(Bundle::from_raw(&json!({})).meta, SubmissionMeta::default());
    }

    #[test]
    fn test_from_raw_skips_malformed_entries() {
        let raw = json!({"data": {"fields": [
            "not a field",
            {"key": 12, "value": "bad key type"},
            {"key": "question_ok", "value": "kept", "options": null}
        ]}});

        let bundle = Bundle::from_raw(&raw);
        assert_eq!(bundle.fields.len(), 2);
        assert_eq!(bundle.fields[0].address(), None);
        assert_eq!(bundle.fields[0].value, json!("bad key type"));
        assert_eq!(bundle.fields[1].address(), Some("question_ok"));
        assert!(bundle.fields[1].options().is_empty());
    }

    #[test]
    fn test_mistyped_attributes_keep_the_value() {
        let raw = json!({"data": {"fields": [
            {"key": "question_jyovg9", "type": "INPUT_EMAIL", "value": "a@b.c",
             "options": [{"id": 1, "text": "x"}, "stray", {"id": "o2", "text": 5}]},
            {"key": "question_487zEo", "type": 7, "label": ["odd"], "value": "0612345678"}
        ]}});

        let bundle = Bundle::from_raw(&raw);
        assert_eq!(bundle.fields.len(), 2);

        let email = &bundle.fields[0];
        assert_eq!(email.value, json!("a@b.c"));
        assert_eq!(email.options().len(), 2);
        assert_eq!(email.options()[0], FieldOption { id: json!(1), text: json!("x") });
        assert_eq!(email.options()[1].text, json!(5));

        let phone = &bundle.fields[1];
        assert_eq!(phone.address(), Some("question_487zEo"));
        assert_eq!(phone.field_type, None);
        assert!(!phone.is_multiple_choice());
        assert_eq!(phone.label, json!(["odd"]));
        assert_eq!(phone.value, json!("0612345678"));
    }

    #[test]
    fn test_meta_serializes_every_key() {
        let value = serde_json::to_value(SubmissionMeta::default()).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            vec!["responseId", "submissionId", "respondentId", "formId", "formName", "createdAt"]
        );
        assert!(value.as_object().unwrap().values().all(Value::is_null));
    }
}
