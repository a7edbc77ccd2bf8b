//! Contact Book - Main entry point
//!
//! Runs the interactive assistant over stdin/stdout. Logs go to stderr.

use anyhow::Result;
use contact_book::{BirthdayReminder, Config, FixedClock, Session, SystemClock};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can pick the filter
    let config = Config::from_env();
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to keep the conversation on stdout clean)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let reminder = BirthdayReminder::new(config.birthday_window_days);
    info!(window_days = reminder.window_days(), "Starting contact book");

    let stdin = io::stdin();
    let stdout = io::stdout();
    match config.today {
        Some(today) => {
            info!(%today, "Using fixed date");
            Session::new(FixedClock(today), reminder).run(stdin.lock(), stdout.lock())?;
        }
        None => Session::new(SystemClock, reminder).run(stdin.lock(), stdout.lock())?,
    }

    info!("Contact book shutdown complete");
    Ok(())
}
