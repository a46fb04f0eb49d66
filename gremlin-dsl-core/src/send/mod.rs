mod config;
mod dispatch;
mod handler;
mod http;

pub use config::{Configuration, ConfigurationBuilder, SharedAsyncSendHandler, SharedSendHandler};
pub use handler::{AsyncSendHandler, SendHandler};
pub use http::{HttpTransport, HttpTransportConfig, ENDPOINT_ENV, TIMEOUT_ENV};
