//! Address Book Assistant - Main entry point
//!
//! Runs the interactive command loop on stdin/stdout. The address book lives
//! in memory only and is discarded on exit.

use address_book_assistant::{assistant, Assistant, Config};
use anyhow::Result;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to keep stdout for assistant replies)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
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

    let mut assistant = Assistant::new(config);

    info!("Starting command loop");
    let stdin = io::stdin();
    assistant::run(&mut assistant, stdin.lock(), io::stdout().lock())?;

    info!(
        contacts = assistant.store().len(),
        "Address book assistant shutdown complete"
    );
    Ok(())
}
