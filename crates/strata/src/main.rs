//! Strata CLI binary.
//!
//! Drives every fragment operation against the configured backend:
//! - Create, update, read and delete fragments
//! - Browse, read and restore versions
//! - Inspect the format registry

use clap::Parser;
use strata::{StrataConfig, init_tracing};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, handle_command};

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut config = StrataConfig::load_with(cli.config.as_deref())?;
    if cli.verbose {
        config.logging = config.logging.with_level("debug".to_string());
    }

    init_tracing(&config.logging)?;
    tracing::debug!(backend = %config.storage.backend, "Configuration loaded");

    handle_command(cli.command, &config).await?;

    Ok(())
}
