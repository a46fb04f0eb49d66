use crate::traversal::GraphTraversal;
use async_trait::async_trait;

/// Receives a rendered traversal and hands it to whatever executes it
///
/// Closures taking `(&GraphTraversal, &str)` implement this directly:
///
/// ```
/// use gremlin_dsl_core::{g, GraphTraversal};
///
/// let echo = |_: &GraphTraversal, query: &str| query.len();
/// assert_eq!(g().count(()).send_with(&echo), 9);
/// ```
pub trait SendHandler<R> {
    fn send(&self, traversal: &GraphTraversal, rendered: &str) -> R;
}

impl<R, F> SendHandler<R> for F
where
    F: Fn(&GraphTraversal, &str) -> R,
{
    fn send(&self, traversal: &GraphTraversal, rendered: &str) -> R {
        self(traversal, rendered)
    }
}

/// Async counterpart of [`SendHandler`], for transports that suspend
#[async_trait]
pub trait AsyncSendHandler<R>: Send + Sync {
    async fn send(&self, traversal: &GraphTraversal, rendered: &str) -> R;
}
