use super::error::GremlinError;

pub type GremlinResult<T> = std::result::Result<T, GremlinError>;
