//! Contact Book - Main entry point
//!
//! Runs the interactive assistant: loads the address book, reads commands from
//! stdin one line at a time, and saves the book when the operator closes it.

use anyhow::{Context, Result};
use chrono::Local;
use contact_book::commands::{messages, Assistant};
use contact_book::{Config, JsonFileRepository};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logs go to stderr so they never interleave with replies on stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using address book file: {}", config.book_file.display());

    let repository = JsonFileRepository::new(config.book_file.clone());
    let mut assistant = match Assistant::load(Box::new(repository)) {
        Ok(assistant) => assistant,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e).with_context(|| {
                format!("Could not load {}", config.book_file.display())
            });
        }
    };

    println!("{}", messages::WELCOME);
    println!("{}", messages::SUPPORTED_COMMANDS_INFO);

    if let Err(e) = assistant.run(io::stdin().lock(), io::stdout(), || Local::now().date_naive()) {
        error!("Console session ended with an error: {}", e);
        return Err(e).context("Console session failed");
    }

    info!("Contact book session finished");
    Ok(())
}
