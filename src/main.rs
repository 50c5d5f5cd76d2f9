use anyhow::Result;
use clap::Parser;
use std::path::Path;

mod cli;
mod commands;

use house_price_estimator::{
    config::{self, Config},
    init_file_tracing, init_tracing,
};

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();
    let config_path = args.config.as_deref();

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::Form => {
            let cfg = config::load_config(config_path)?;

            // The form owns the terminal, so it only logs to a file
            let _guard = match &cfg.logging.file {
                Some(path) => Some(init_file_tracing(&cfg.logging.level, path)?),
                None => None,
            };

            commands::form::execute(&cfg)?;
        }
        cli::Commands::Predict(predict_args) => {
            let cfg = load_with_tracing(config_path)?;
            commands::predict::execute(predict_args, &cfg)?;
        }
        cli::Commands::Model { residuals } => {
            load_with_tracing(config_path)?;
            commands::model::execute(residuals)?;
        }
        cli::Commands::Config { action } => {
            // The config under inspection may itself be invalid
            init_tracing("info");
            match action {
                cli::ConfigCommands::Show => commands::config::show(config_path)?,
                cli::ConfigCommands::Validate => commands::config::validate(config_path)?,
            }
        }
        cli::Commands::Version => {
            println!("House Price Estimator v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Load configuration and initialize stderr tracing at its log level
fn load_with_tracing(path: Option<&Path>) -> Result<Config> {
    let cfg = config::load_config(path)?;
    init_tracing(&cfg.logging.level);
    Ok(cfg)
}
