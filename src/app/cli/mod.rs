//! CLI Adapter.

mod countdown;
mod info;
mod respond;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::config::load_config;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "rsvp")]
#[command(version)]
#[command(about = "Event announcement with a live countdown and a guided response form", long_about = None)]
struct Cli {
    /// Configuration file (defaults to $RSVP_CONFIG, then ./rsvp.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show event details and the time left until it starts
    #[clap(visible_alias = "i")]
    Info,
    /// Show frequently asked questions
    Faq {
        /// Expand question N (1-based)
        #[arg(short, long, value_name = "N")]
        open: Option<usize>,
    },
    /// Run the live countdown
    #[clap(visible_alias = "c")]
    Countdown(countdown::CountdownArgs),
    /// Fill in and send your response
    #[clap(visible_alias = "r")]
    Respond(respond::RespondArgs),
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Info => info::run_info(&config),
        Commands::Faq { open } => info::run_faq(&config, open),
        Commands::Countdown(args) => countdown::run_countdown(&config, args),
        Commands::Respond(args) => respond::run_respond(&config, args),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn parse_instant_arg(value: &str) -> Result<chrono::DateTime<chrono::Utc>, AppError> {
    Ok(crate::domain::TargetInstant::parse(value)?.as_utc())
}
