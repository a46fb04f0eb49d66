use std::fmt::{Debug, Formatter, Result};
use std::sync::Arc;

use super::handler::{AsyncSendHandler, SendHandler};

/// Shared handle to a send handler that can be stored in a [`Configuration`]
pub type SharedSendHandler<R> = Arc<dyn SendHandler<R> + Send + Sync>;

/// Shared handle to an async send handler, such as an [`HttpTransport`](super::HttpTransport)
pub type SharedAsyncSendHandler<R> = Arc<dyn AsyncSendHandler<R>>;

/// Context holding the default send handlers
///
/// Passed explicitly to [`GraphTraversal::send`](crate::GraphTraversal::send)
/// and [`GraphTraversal::send_configured_async`](crate::GraphTraversal::send_configured_async);
/// there is no process-wide instance.
pub struct Configuration<R> {
    send_handler: Option<SharedSendHandler<R>>,
    async_send_handler: Option<SharedAsyncSendHandler<R>>,
}

impl<R> Configuration<R> {
    /// Create a configuration without a default handler
    pub fn new() -> Self {
        Self {
            send_handler: None,
            async_send_handler: None,
        }
    }

    pub fn builder() -> ConfigurationBuilder<R> {
        ConfigurationBuilder::new()
    }

    pub fn send_handler(&self) -> Option<&(dyn SendHandler<R> + Send + Sync)> {
        self.send_handler.as_deref()
    }

    pub fn set_send_handler<H>(&mut self, handler: H)
    where
        H: SendHandler<R> + Send + Sync + 'static,
    {
        self.send_handler = Some(Arc::new(handler));
    }

    pub fn clear_send_handler(&mut self) {
        self.send_handler = None;
    }

    pub fn async_send_handler(&self) -> Option<&dyn AsyncSendHandler<R>> {
        self.async_send_handler.as_deref()
    }

    pub fn set_async_send_handler<H>(&mut self, handler: H)
    where
        H: AsyncSendHandler<R> + 'static,
    {
        self.async_send_handler = Some(Arc::new(handler));
    }

    pub fn clear_async_send_handler(&mut self) {
        self.async_send_handler = None;
    }
}

impl<R> Default for Configuration<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for Configuration<R> {
    fn clone(&self) -> Self {
        Self {
            send_handler: self.send_handler.clone(),
            async_send_handler: self.async_send_handler.clone(),
        }
    }
}

// Manual Debug implementation
impl<R> Debug for Configuration<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("Configuration")
            .field(
                "send_handler",
                &self.send_handler.as_ref().map(|_| "<send handler>"),
            )
            .field(
                "async_send_handler",
                &self.async_send_handler.as_ref().map(|_| "<async send handler>"),
            )
            .finish()
    }
}

/// Builder for configuration
pub struct ConfigurationBuilder<R> {
    config: Configuration<R>,
}

impl<R> ConfigurationBuilder<R> {
    pub fn new() -> Self {
        Self {
            config: Configuration::new(),
        }
    }

    pub fn send_handler<H>(mut self, handler: H) -> Self
    where
        H: SendHandler<R> + Send + Sync + 'static,
    {
        self.config.set_send_handler(handler);
        self
    }

    /// Reuse a handler that is already shared elsewhere
    pub fn shared_send_handler(mut self, handler: SharedSendHandler<R>) -> Self {
        self.config.send_handler = Some(handler);
        self
    }

    pub fn async_send_handler<H>(mut self, handler: H) -> Self
    where
        H: AsyncSendHandler<R> + 'static,
    {
        self.config.set_async_send_handler(handler);
        self
    }

    pub fn shared_async_send_handler(mut self, handler: SharedAsyncSendHandler<R>) -> Self {
        self.config.async_send_handler = Some(handler);
        self
    }

    pub fn build(self) -> Configuration<R> {
        self.config
    }
}

impl<R> Default for ConfigurationBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}
