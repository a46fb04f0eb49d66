mod core;
mod dsl;
mod sequence;

pub use self::core::{GraphTraversal, __, g};
pub use sequence::Steps;
