use serde_json::Value;

use crate::models::{AnswerMap, Canonical, CanonicalAttribute};
use crate::utils::{as_int, norm_email, norm_phone, norm_text};

/// How a decoded answer becomes a canonical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalizer {
    /// Empty to null, otherwise trimmed text.
    Text,
    /// Decoded value as-is, no trim and no empty check.
    Passthrough,
    Phone,
    Email,
    Integer,
}

impl Normalizer {
    pub fn apply(&self, value: Option<&Value>) -> Value {
        let value = match value {
            Some(value) => value,
            None => return Value::Null,
        };
        match self {
            Normalizer::Text => norm_text(value).map(Value::from).unwrap_or(Value::Null),
            Normalizer::Passthrough => value.clone(),
            Normalizer::Phone => norm_phone(value).map(Value::from).unwrap_or(Value::Null),
            Normalizer::Email => norm_email(value).map(Value::from).unwrap_or(Value::Null),
            Normalizer::Integer => as_int(value).map(Value::from).unwrap_or(Value::Null),
        }
    }
}

/// One row of the mapping table.
#[derive(Debug, Clone, Copy)]
pub struct FieldMapping {
    pub attribute: CanonicalAttribute,
    pub source_key: &'static str,
    pub normalizer: Normalizer,
}

const fn mapping(
    attribute: CanonicalAttribute,
    source_key: &'static str,
    normalizer: Normalizer,
) -> FieldMapping {
    FieldMapping { attribute, source_key, normalizer }
}

/// Field keys of the estimation form. These are opaque ids issued by the
/// form builder; if the form is edited, the keys here must follow.
pub const FIELD_MAPPINGS: [FieldMapping; 12] = [
    mapping(CanonicalAttribute::Role, "question_OzXkVA_7be398b7-7e42-4736-b35e-b9a78d556f22", Normalizer::Text),
    mapping(CanonicalAttribute::CityProject, "question_V0PDxl", Normalizer::Text),
    mapping(CanonicalAttribute::FirstName, "question_EXlMAL", Normalizer::Text),
    mapping(CanonicalAttribute::LastName, "question_r6OvgL", Normalizer::Text),
    mapping(CanonicalAttribute::Phone, "question_487zEo", Normalizer::Phone),
    mapping(CanonicalAttribute::Email, "question_jyovg9", Normalizer::Email),
    mapping(CanonicalAttribute::PriceNetSeller, "question_EXlMaL", Normalizer::Integer),
    mapping(CanonicalAttribute::BudgetMax, "question_P69kP0", Normalizer::Integer),
    mapping(CanonicalAttribute::PropertyType, "question_WNEKXe", Normalizer::Passthrough),
    mapping(CanonicalAttribute::SurfaceM2, "question_9WZMr4", Normalizer::Integer),
    mapping(CanonicalAttribute::LandSurfaceM2, "question_e6rvoo", Normalizer::Integer),
    mapping(CanonicalAttribute::Bedrooms, "question_WNR1ZQ", Normalizer::Integer),
];

/// Applies each mapping row in order. Absent keys produce null attributes.
pub fn build_canonical_with(answers: &AnswerMap, mappings: &[FieldMapping]) -> Canonical {
    let mut canonical = Canonical::default();
    for row in mappings {
        let value = row.normalizer.apply(answers.value(row.source_key));
        canonical.push(row.attribute, value);
    }
    canonical
}

pub fn build_canonical(answers: &AnswerMap) -> Canonical {
    build_canonical_with(answers, &FIELD_MAPPINGS)
}
