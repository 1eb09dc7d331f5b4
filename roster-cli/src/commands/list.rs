//! `roster list`: show the activity catalog of a running server.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use roster_core::{Activity, Catalog};
use roster_server::client;

use super::with_hint;
use crate::ServerArg;

/// Arguments for `roster list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show only this activity, including every participant.
    #[arg(long)]
    pub activity: Option<String>,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub server: ServerArg,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let catalog = client::list_activities(&self.server.url)
            .map_err(with_hint)
            .context("failed to fetch activities")?;

        if let Some(name) = self.activity.as_deref() {
            let activity = catalog
                .get(name)
                .with_context(|| format!("no activity named '{name}'"))?;
            if self.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(activity).context("failed to render JSON")?
                );
            } else {
                print_activity(name, activity);
            }
            return Ok(());
        }

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&catalog).context("failed to render JSON")?
            );
            return Ok(());
        }

        print_table(&catalog);
        Ok(())
    }
}

#[derive(Tabled)]
struct ActivityRow {
    #[tabled(rename = "activity")]
    name: String,
    #[tabled(rename = "schedule")]
    schedule: String,
    #[tabled(rename = "enrolled")]
    enrolled: String,
    #[tabled(rename = "spots")]
    spots: String,
}

fn print_table(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("No activities available.");
        return;
    }

    let rows: Vec<ActivityRow> = catalog
        .iter()
        .map(|(name, activity)| ActivityRow {
            name: name.to_string(),
            schedule: activity.schedule.clone().unwrap_or_else(|| "-".to_string()),
            enrolled: format!("{}/{}", activity.participants.len(), activity.capacity),
            spots: spots_label(activity),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}

fn print_activity(name: &str, activity: &Activity) {
    println!("{}", name.bold());
    println!("  {}", activity.description);
    if let Some(schedule) = &activity.schedule {
        println!("  Schedule: {schedule}");
    }
    println!("  Spots:    {}", spots_label(activity));
    if activity.participants.is_empty() {
        println!("  No participants yet.");
        return;
    }
    println!("  Participants:");
    for email in &activity.participants {
        println!("    - {email}");
    }
}

fn spots_label(activity: &Activity) -> String {
    match activity.remaining_spots() {
        0 => "FULL".red().bold().to_string(),
        n => format!("{n} left").green().to_string(),
    }
}
