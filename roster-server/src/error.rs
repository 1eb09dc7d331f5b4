use std::net::SocketAddr;

use thiserror::Error;

/// Error surface for the server runtime and the HTTP client.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("I/O error ({context}): {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog error: {0}")]
    Catalog(#[from] roster_core::CatalogError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("roster server is not reachable at {url}")]
    NotRunning { url: String },

    /// The server answered with a non-success status.
    #[error("request rejected ({status}): {detail}")]
    Rejected { status: u16, detail: String },

    #[error("HTTP transport error: {0}")]
    Transport(String),
}

pub(crate) fn io_err(context: impl Into<String>, source: std::io::Error) -> ServerError {
    ServerError::Io {
        context: context.into(),
        source,
    }
}
