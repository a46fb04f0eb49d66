//! A fluent builder for Gremlin graph traversal strings.
//!
//! Steps are accumulated on a [`GraphTraversal`] and rendered into a single
//! dot-joined query, which can then be handed to a [`SendHandler`] for execution.

#![allow(unused_extern_crates)]
extern crate self as gremlin_dsl_core;

pub mod send;
pub mod step;
pub mod traversal;
pub mod types;

pub mod prelude {
    //! Convenient re-exports of commonly used types
    pub use crate::send::{
        AsyncSendHandler, Configuration, ConfigurationBuilder, HttpTransport, HttpTransportConfig,
        SendHandler, SharedAsyncSendHandler, SharedSendHandler, ENDPOINT_ENV, TIMEOUT_ENV,
    };
    pub use crate::step::{IntoArgs, Step, ANONYMOUS, G};
    pub use crate::traversal::{GraphTraversal, Steps, __, g};
    pub use crate::types::{GremlinError, GremlinResult};
}

// Re-export main types
pub use prelude::*;
