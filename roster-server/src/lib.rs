//! HTTP boundary for the roster directory: axum router, runtime, and a blocking client.

pub mod api;
pub mod client;
pub mod config;
mod error;
mod runtime;

pub use api::{router, AppState, ErrorBody, MessageResponse};
pub use config::{LogFormat, ServerConfig, DEFAULT_BIND};
pub use error::ServerError;
pub use runtime::{run, serve, start_blocking};
