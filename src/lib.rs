//! Gremlin DSL is a fluent, type-safe builder for Gremlin graph traversal strings.
//!
//! ```
//! use gremlin_dsl::prelude::*;
//!
//! let mut traversal = g();
//! traversal.v(()).has_label("'person'").values("'name'");
//! traversal.assign("names = ");
//!
//! assert_eq!(traversal.render(), "names = g.V().hasLabel('person').values('name')");
//! ```

pub mod prelude {
    //! Convenient re-exports of commonly used types
    pub use gremlin_dsl_core::prelude::*;
}

pub use gremlin_dsl_core::{send, step, traversal, types};

// Re-export main types
pub use prelude::*;
