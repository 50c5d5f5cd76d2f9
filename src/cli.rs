use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "house-price", version, about = "House price estimator")]
pub struct Cli {
    /// Configuration file path (default: ./house-price.toml, if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive estimator form (default)
    Form,

    /// Estimate a single price without opening the form
    Predict(crate::commands::predict::PredictArgs),

    /// Show the fitted model
    Model {
        /// Also list actual vs. predicted price for every sample row
        #[arg(short, long)]
        residuals: bool,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Form if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_form() {
        let cli = Cli {
            config: None,
            command: None,
        };

        assert!(matches!(cli.get_command(), Commands::Form));
    }

    #[test]
    fn test_cli_parsing_no_args() {
        let cli = Cli::try_parse_from(["house-price"]).unwrap();
        assert!(cli.config.is_none());
        assert!(matches!(cli.get_command(), Commands::Form));
    }

    #[test]
    fn test_cli_parsing_predict() {
        let args = vec![
            "house-price",
            "predict",
            "--area",
            "1200",
            "--bedrooms",
            "3",
            "--location",
            "Standard",
            "--json",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Predict(args) => {
                assert_eq!(args.area, "1200");
                assert_eq!(args.bedrooms, "3");
                assert_eq!(args.location, "Standard");
                assert_eq!(args.parking, "");
                assert!(args.json);
            }
            _ => panic!("Expected Predict command"),
        }
    }

    #[test]
    fn test_cli_parsing_model_residuals() {
        let cli = Cli::try_parse_from(["house-price", "model", "--residuals"]).unwrap();

        match cli.get_command() {
            Commands::Model { residuals } => assert!(residuals),
            _ => panic!("Expected Model command"),
        }
    }

    #[test]
    fn test_cli_parsing_global_config() {
        let cli =
            Cli::try_parse_from(["house-price", "config", "show", "--config", "custom.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));

        match cli.get_command() {
            Commands::Config { action } => assert!(matches!(action, ConfigCommands::Show)),
            _ => panic!("Expected Config command"),
        }
    }
}
