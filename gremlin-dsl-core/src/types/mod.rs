mod error;
mod result;

pub use error::GremlinError;
pub use result::GremlinResult;
