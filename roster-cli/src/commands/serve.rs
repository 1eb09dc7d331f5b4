//! `roster serve`: run the HTTP server in the foreground.

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Args;

use roster_server::{start_blocking, LogFormat, ServerConfig, DEFAULT_BIND};

/// Arguments for `roster serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on.
    #[arg(long, env = "ROSTER_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// YAML catalog to seed activities from. Uses the built-in catalog when omitted.
    #[arg(long, env = "ROSTER_CATALOG", value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Log output: text | json.
    #[arg(long, env = "ROSTER_LOG_FORMAT", default_value_t = LogFormatArg::default())]
    pub log_format: LogFormatArg,
}

impl ServeArgs {
    pub fn run(self) -> Result<()> {
        let config = ServerConfig::from(self);
        let bind = config.bind;
        start_blocking(config).with_context(|| format!("roster server on {bind} exited with error"))
    }
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            bind: args.bind,
            catalog: args.catalog,
            log_format: args.log_format.into(),
        }
    }
}

/// Thin wrapper so clap can parse `LogFormat` from CLI args.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFormatArg(pub LogFormat);

impl FromStr for LogFormatArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self(LogFormat::Text)),
            "json" => Ok(Self(LogFormat::Json)),
            other => Err(format!("unknown log format '{other}'; expected: text, json")),
        }
    }
}

impl fmt::Display for LogFormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        arg.0
    }
}
