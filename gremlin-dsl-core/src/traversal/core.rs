use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

use super::sequence::Steps;
use crate::step::{IntoArgs, Step};

const SEPARATOR: &str = ".";

/// A fluent builder for a Gremlin traversal string
///
/// Every chain method mutates the builder in place and returns it, so calls
/// can be strung together and the result rendered at the end:
///
/// ```
/// use gremlin_dsl_core::g;
///
/// assert_eq!(g().v(1).out("'knows'").values("'name'").render(), "g.V(1).out('knows').values('name')");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphTraversal {
    steps: Steps,
}

impl GraphTraversal {
    /// Create an empty traversal with no start marker
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing step sequence
    pub fn with_steps(steps: Steps) -> Self {
        Self { steps }
    }

    /// Start a traversal rooted at the graph (`g`)
    pub fn g() -> Self {
        let mut traversal = Self::new();
        traversal.steps.append(Step::G);
        traversal
    }

    /// Start an anonymous traversal (`__`), usually nested as an argument of another step
    pub fn __() -> Self {
        let mut traversal = Self::new();
        traversal.steps.append(Step::Anonymous);
        traversal
    }

    pub fn steps(&self) -> &Steps {
        &self.steps
    }

    pub fn into_steps(self) -> Steps {
        self.steps
    }

    /// Put raw text in front of everything added so far, including the start marker.
    pub fn raw(&mut self, text: impl Into<String>) -> &mut Self {
        self.steps.prepend(Step::raw(text));
        self
    }

    /// Put an assignment such as `x = ` in front of everything added so far.
    pub fn assign(&mut self, expr: impl Into<String>) -> &mut Self {
        self.steps.prepend(Step::assign(expr));
        self
    }

    /// Append a `next(...)` step
    pub fn next<A: IntoArgs>(&mut self, args: A) -> &mut Self {
        self.step("next", args)
    }

    /// Append a method step with an arbitrary name
    pub fn step<A: IntoArgs>(&mut self, name: impl Into<String>, args: A) -> &mut Self {
        self.steps.append(Step::method(name, args.into_args()));
        self
    }

    /// Render the traversal to its query string
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for GraphTraversal {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut previous: Option<&Step> = None;
        for (index, step) in self.steps.iter() {
            // Only the previous step decides; a prefix step mid-sequence still gets a dot
            if index != 0 && !previous.is_some_and(Step::is_prefix) {
                f.write_str(SEPARATOR)?;
            }
            write!(f, "{}", step)?;
            previous = Some(step);
        }
        Ok(())
    }
}

/// Start a traversal rooted at the graph (`g`)
pub fn g() -> GraphTraversal {
    GraphTraversal::g()
}

/// Start an anonymous traversal (`__`)
pub fn __() -> GraphTraversal {
    GraphTraversal::__()
}
