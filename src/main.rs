//! Spellbook Archive - command line front end
//!
//! Reads commands from the script file given as the first argument, or from
//! stdin when none is given, and writes response blocks to stdout.

use std::{
    env,
    fs::File,
    io::{self, BufReader},
};

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spellbook_archive::{config::AppConfig, Archive};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing; stdout is reserved for response blocks
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("spellbook_archive={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }

    tracing::info!("Starting Spellbook Archive v{}", env!("CARGO_PKG_VERSION"));

    let mut archive = Archive::new(config.archive);
    let stdout = io::stdout();

    match env::args_os().nth(1) {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script {}", path.to_string_lossy()))?;
            tracing::info!("Reading commands from {}", path.to_string_lossy());
            archive.run(BufReader::new(file), stdout.lock())?;
        }
        None => {
            let stdin = io::stdin();
            archive.run(stdin.lock(), stdout.lock())?;
        }
    }

    tracing::info!("Archive process ended");
    Ok(())
}
