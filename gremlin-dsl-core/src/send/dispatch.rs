use tracing::{debug, warn};

use super::config::Configuration;
use super::handler::{AsyncSendHandler, SendHandler};
use crate::traversal::GraphTraversal;
use crate::types::{GremlinError, GremlinResult};

impl GraphTraversal {
    /// Render the traversal and hand it to a send handler.
    ///
    /// The explicit `handler` wins; otherwise the default from `config` is
    /// used. The handler is invoked exactly once and its return value is
    /// passed through unchanged. Without an explicit handler, prefer
    /// [`send`](Self::send), which needs no type annotation for `None`.
    ///
    /// # Errors
    ///
    /// [`GremlinError::NoSendHandler`] if neither source provides a handler.
    /// Nothing is dispatched in that case.
    pub fn dispatch<R, H>(&self, handler: Option<&H>, config: &Configuration<R>) -> GremlinResult<R>
    where
        H: SendHandler<R> + ?Sized,
    {
        if let Some(handler) = handler {
            return Ok(self.send_with(handler));
        }

        match config.send_handler() {
            Some(configured) => {
                debug!("using configured send handler");
                Ok(self.send_with(configured))
            }
            None => {
                warn!("traversal not sent, no send handler available");
                Err(GremlinError::NoSendHandler)
            }
        }
    }

    /// Send using the default handler from `config`
    pub fn send<R>(&self, config: &Configuration<R>) -> GremlinResult<R> {
        self.dispatch::<R, dyn SendHandler<R>>(None, config)
    }

    /// Send using an explicit handler
    pub fn send_with<R, H>(&self, handler: &H) -> R
    where
        H: SendHandler<R> + ?Sized,
    {
        let rendered = self.render();
        debug!(traversal = %rendered, "dispatching traversal");
        handler.send(self, &rendered)
    }

    /// Async counterpart of [`dispatch`](Self::dispatch), falling back to the
    /// async default from `config`.
    ///
    /// # Errors
    ///
    /// [`GremlinError::NoSendHandler`] if neither source provides a handler.
    pub async fn dispatch_async<R, H>(
        &self,
        handler: Option<&H>,
        config: &Configuration<R>,
    ) -> GremlinResult<R>
    where
        H: AsyncSendHandler<R> + ?Sized,
    {
        if let Some(handler) = handler {
            return Ok(self.send_async(handler).await);
        }

        match config.async_send_handler() {
            Some(configured) => {
                debug!("using configured async send handler");
                Ok(self.send_async(configured).await)
            }
            None => {
                warn!("traversal not sent, no async send handler available");
                Err(GremlinError::NoSendHandler)
            }
        }
    }

    /// Send using the async default handler from `config`
    pub async fn send_configured_async<R>(&self, config: &Configuration<R>) -> GremlinResult<R> {
        self.dispatch_async::<R, dyn AsyncSendHandler<R>>(None, config)
            .await
    }

    /// Send through an async handler. The query string is fixed before the handler is awaited.
    pub async fn send_async<R, H>(&self, handler: &H) -> R
    where
        H: AsyncSendHandler<R> + ?Sized,
    {
        let rendered = self.render();
        debug!(traversal = %rendered, "dispatching traversal");
        handler.send(self, &rendered).await
    }
}
