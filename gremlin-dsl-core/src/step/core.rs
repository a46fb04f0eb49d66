use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// Keyword that starts a traversal bound to a graph instance
pub const G: &str = "g";
/// Keyword that starts an anonymous (nested) traversal
pub const ANONYMOUS: &str = "__";

const ARG_SEPARATOR: &str = ", ";

/// One fragment of a rendered traversal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Step {
    /// Start of a traversal rooted at the graph: `g`
    G,
    /// Start of an anonymous traversal: `__`
    Anonymous,
    /// A method call: `name(arg1, arg2)`
    Method { name: String, args: Vec<String> },
    /// Pre-formatted text inserted verbatim
    Raw(String),
    /// An assignment expression such as `x = `, inserted verbatim
    Assign(String),
}

impl Step {
    pub fn method(name: impl Into<String>, args: Vec<String>) -> Self {
        Step::Method {
            name: name.into(),
            args,
        }
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Step::Raw(text.into())
    }

    pub fn assign(expr: impl Into<String>) -> Self {
        Step::Assign(expr.into())
    }

    /// Render this step to its own text fragment.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Prefix steps are never followed by a separator.
    pub fn is_prefix(&self) -> bool {
        matches!(self, Step::Raw(_) | Step::Assign(_))
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Step::G => f.write_str(G),
            Step::Anonymous => f.write_str(ANONYMOUS),
            Step::Method { name, args } => write!(f, "{}({})", name, args.join(ARG_SEPARATOR)),
            Step::Raw(text) => f.write_str(text),
            Step::Assign(expr) => f.write_str(expr),
        }
    }
}
