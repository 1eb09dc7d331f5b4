//! Roster: activity signup directory server and client.
//!
//! # Usage
//!
//! ```text
//! roster serve [--bind ADDR] [--catalog FILE] [--log-format text|json]
//! roster list [--server URL] [--json]
//! roster signup <ACTIVITY> <EMAIL> [--server URL]
//! roster unregister <ACTIVITY> <EMAIL> [--server URL]
//! ```

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use commands::{
    list::ListArgs, serve::ServeArgs, signup::SignupArgs, unregister::UnregisterArgs,
};
use roster_server::client::DEFAULT_SERVER_URL;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    version,
    about = "Run and use an in-memory activity signup directory",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server in the foreground until Ctrl-C.
    Serve(ServeArgs),

    /// List every activity with its schedule and free spots.
    List(ListArgs),

    /// Sign a participant up for an activity.
    Signup(SignupArgs),

    /// Remove a participant from an activity.
    Unregister(UnregisterArgs),
}

/// Where client commands send their requests.
#[derive(Args, Debug, Clone)]
pub struct ServerArg {
    /// Base URL of a running `roster serve`.
    #[arg(long = "server", env = "ROSTER_SERVER", default_value = DEFAULT_SERVER_URL)]
    pub url: String,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Serve(args) => args.run(),
        Commands::List(args) => args.run(),
        Commands::Signup(args) => args.run(),
        Commands::Unregister(args) => args.run(),
    }
}
