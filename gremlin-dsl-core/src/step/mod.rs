mod args;
mod core;
mod tests;

pub use args::IntoArgs;
pub use self::core::{Step, ANONYMOUS, G};
