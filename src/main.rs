//! scm-insights CLI entry point.

use anyhow::Result;
use clap::Parser;

use scm_insights::cli::{commands, handle_error, Cli, Commands};
use scm_insights::infrastructure::logging::{LogConfig, LoggerImpl};
use scm_insights::ConfigLoader;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli).await {
        handle_error(err, json);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // init writes the config, so it must not require one
    if let Commands::Init { force } = cli.command {
        return commands::init::execute(force, cli.json);
    }

    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    let _logger = LoggerImpl::init(&LogConfig::try_from(&config.logging)?)?;

    match cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Run { catalog_file } => {
            commands::run::execute(&config, catalog_file.as_deref(), cli.json).await
        }
        Commands::Check {
            entity_ref,
            catalog_file,
        } => commands::check::execute(&config, &entity_ref, catalog_file.as_deref(), cli.json).await,
        Commands::Schema => commands::schema::execute(cli.json),
    }
}
