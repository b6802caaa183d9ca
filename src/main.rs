//! Employee Registry - provision, fill and query an employees table in PostgreSQL.

use anyhow::Context;
use clap::Parser;
use employee_registry as app;

use app::cli::Cli;
use app::config::AppConfig;
use app::{commands, logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config_path();
    let config = AppConfig::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    // Initialize logging
    let _guard = logging::init(cli.verbose, &config.logging);
    tracing::debug!("Config path: {:?}", config_path);

    // Create tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;

    rt.block_on(commands::run(cli.command, &config, &config_path))?;

    Ok(())
}
