pub mod emptiness;
pub mod scalars;

pub use emptiness::is_empty;
pub use scalars::{as_int, norm_email, norm_phone, norm_text, stringify};
