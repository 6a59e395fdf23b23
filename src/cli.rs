//! CLI interface for Courier.
//!
//! Each subcommand is non-interactive: arguments in, structured output out.
//! Records and histories go to stdout as JSON; narration goes to stderr
//! through `tracing` (see `COURIER_LOG`).

mod demo;
mod notify;
mod report;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::Config;

/// Courier — dispatch order notifications and generate reports.
#[derive(Debug, Parser)]
#[command(name = "courier", after_long_help = USAGE_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

const USAGE_HELP: &str = r#"Examples:
  courier notify --order order.json --channel email --channel sms
  courier report sales --data sales.json --format pdf --delivery email
  cat inventory.json | courier report inventory --data - --format excel
  courier demo

Channels: email, sms, push
Report types: sales, inventory, financial
Formats: pdf, excel, html (anything else renders as html)
Deliveries: email, download, cloud (anything else is offered as a download)"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Notify a customer that their order is confirmed.
    ///
    /// Channels are processed in the order given. The first unsupported
    /// channel or missing contact field stops the run.
    /// Prints the notification history as JSON.
    Notify {
        /// Order JSON file, or `-` for stdin.
        #[arg(long)]
        order: PathBuf,

        /// Channel to notify on. Can be specified multiple times.
        /// Defaults to email.
        #[arg(long)]
        channel: Vec<String>,
    },

    /// Generate, format, and deliver a report.
    ///
    /// Prints the formatted document to stdout.
    /// An unknown report type produces nothing and is not an error.
    Report {
        /// Report type: sales, inventory, or financial.
        report_type: String,

        /// Report data JSON file, or `-` for stdin.
        #[arg(long)]
        data: PathBuf,

        /// Output format.
        #[arg(long, default_value = "html")]
        format: String,

        /// Delivery method.
        #[arg(long, default_value = "download")]
        delivery: String,
    },

    /// Run the built-in sample orders and reports.
    ///
    /// Prints both histories as JSON.
    Demo,
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config) -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Command::Notify { order, channel } => notify::cmd_notify(&order, channel),
        Command::Report {
            report_type,
            data,
            format,
            delivery,
        } => report::cmd_report(config, &report_type, &data, &format, &delivery),
        Command::Demo => demo::cmd_demo(config),
    }
}

/// Read and parse a JSON input. `-` reads stdin.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let (contents, source) = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read stdin: {e}"))?;
        (buf, "stdin".to_string())
    } else {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        (contents, path.display().to_string())
    };

    serde_json::from_str(&contents).map_err(|e| format!("invalid JSON in {source}: {e}"))
}

/// Print a value as pretty JSON on stdout.
fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("failed to serialize output: {e}"))?;
    println!("{json}");
    Ok(())
}
