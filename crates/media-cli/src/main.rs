mod args;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use args::{Cli, Commands};
use media_core::{Config, Dispatcher};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors exit 1; --help and --version exit 0
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // Initialize logging based on verbosity
    let filter = match cli.verbose {
        0 => "media_cli=info,media_core=info",
        1 => "media_cli=debug,media_core=debug",
        2 => "media_cli=trace,media_core=trace",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let config_path = cli.config.as_deref();
    let config = Config::load(config_path).context("Failed to load configuration")?;

    match cli.command {
        Commands::Download { url, resolution } => {
            commands::download::run(&Dispatcher::new(config), &url, &resolution).await
        }
        Commands::Audio { url } => commands::audio::run(&Dispatcher::new(config), &url).await,
        Commands::ListFormats { url } => {
            commands::list_formats::run(&Dispatcher::new(config), &url).await
        }
        Commands::Doctor => commands::doctor::run(&config).await,
        Commands::Config => commands::config::run(&config, config_path).await,
    }
}
