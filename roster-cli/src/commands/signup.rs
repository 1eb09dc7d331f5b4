//! `roster signup <activity> <email>`

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use roster_server::client;

use super::with_hint;
use crate::ServerArg;

/// Arguments for `roster signup`.
#[derive(Args, Debug)]
pub struct SignupArgs {
    /// Activity name, e.g. "Chess Club".
    pub activity: String,

    /// Participant email address.
    pub email: String,

    #[command(flatten)]
    pub server: ServerArg,
}

impl SignupArgs {
    pub fn run(self) -> Result<()> {
        let message = client::signup(&self.server.url, &self.activity, &self.email)
            .map_err(with_hint)
            .with_context(|| format!("could not sign up for '{}'", self.activity))?;
        println!("{} {message}", "✓".green().bold());
        Ok(())
    }
}
