//! `roster unregister <activity> <email>`

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use roster_server::client;

use super::with_hint;
use crate::ServerArg;

/// Arguments for `roster unregister`.
#[derive(Args, Debug)]
pub struct UnregisterArgs {
    /// Activity name, e.g. "Chess Club".
    pub activity: String,

    /// Participant email address to remove.
    pub email: String,

    #[command(flatten)]
    pub server: ServerArg,
}

impl UnregisterArgs {
    pub fn run(self) -> Result<()> {
        let message = client::unregister(&self.server.url, &self.activity, &self.email)
            .map_err(with_hint)
            .with_context(|| format!("could not unregister from '{}'", self.activity))?;
        println!("{} {message}", "✓".green().bold());
        Ok(())
    }
}
