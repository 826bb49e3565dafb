pub mod normalize_handler;

pub use normalize_handler::*;
