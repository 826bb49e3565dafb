pub mod decoder;
pub mod answer_builder;
pub mod canonical_mapper;
pub mod pruner;
mod normalize_service;

pub use decoder::decode_field_value;
pub use answer_builder::build_answers;
pub use canonical_mapper::{build_canonical, FieldMapping, Normalizer, FIELD_MAPPINGS};
pub use pruner::drop_empty;
pub use normalize_service::NormalizeService;
