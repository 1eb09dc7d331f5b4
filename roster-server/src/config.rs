use std::net::SocketAddr;
use std::path::PathBuf;

use roster_core::{catalog, Directory};

use crate::error::ServerError;

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Runtime configuration for `roster serve`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// YAML catalog to seed the directory from; the built-in seed when `None`.
    pub catalog: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
            catalog: None,
            log_format: LogFormat::default(),
        }
    }
}

impl ServerConfig {
    /// Build the directory this configuration describes.
    pub fn load_directory(&self) -> Result<Directory, ServerError> {
        match &self.catalog {
            Some(path) => Ok(Directory::try_new(catalog::load_catalog_at(path)?)?),
            None => Ok(Directory::seeded()),
        }
    }
}
