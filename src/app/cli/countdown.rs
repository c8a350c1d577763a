use std::sync::mpsc;

use clap::{Args, ValueEnum};

use super::parse_instant_arg;
use crate::adapters::{FixedTimeSource, SystemTimeSource};
use crate::app::api;
use crate::domain::{AppConfig, AppError, Countdown};
use crate::ports::TimeSource;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct CountdownArgs {
    /// Print a single reading and exit
    #[arg(long)]
    once: bool,
    /// Stop after N readings
    #[arg(long, value_name = "N")]
    ticks: Option<usize>,
    /// Pretend the current time is INSTANT (RFC 3339 or local YYYY-MM-DDTHH:MM:SS)
    #[arg(long, value_name = "INSTANT")]
    now: Option<String>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

pub fn run_countdown(config: &AppConfig, args: CountdownArgs) -> Result<(), AppError> {
    let source: Box<dyn TimeSource + Send> = match &args.now {
        Some(value) => Box::new(FixedTimeSource(parse_instant_arg(value)?)),
        None => Box::new(SystemTimeSource),
    };

    if args.once {
        let reading = api::countdown(config, &source)?;
        return print_reading(reading, args.format);
    }

    let limit = args.ticks.unwrap_or(usize::MAX);
    if limit == 0 {
        return Ok(());
    }

    let (tx, rx) = mpsc::channel();
    let clock = api::start_countdown(config, source, move |reading| {
        // The receiver hangs up once it has printed enough readings.
        let _ = tx.send(reading);
    })?;

    let mut printed = 0;
    for reading in rx.iter() {
        print_reading(reading, args.format)?;
        printed += 1;
        if printed >= limit || reading.is_elapsed() {
            break;
        }
    }

    clock.stop();
    Ok(())
}

fn print_reading(reading: Countdown, format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => println!("{}", reading),
        OutputFormat::Json => {
            let line = serde_json::to_string(&reading).map_err(std::io::Error::from)?;
            println!("{}", line);
        }
    }
    Ok(())
}
