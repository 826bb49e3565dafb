mod answer;
mod bundle;
mod canonical;
mod error;
mod normalize;

pub use answer::*;
pub use bundle::*;
pub use canonical::*;
pub use error::*;
pub use normalize::*;
