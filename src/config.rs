use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_NAME: &str = "house-price";

/// Environment variable prefix, e.g. `HOUSE_PRICE__DISPLAY__CURRENCY_SYMBOL`
pub const ENV_PREFIX: &str = "HOUSE_PRICE";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Log file for the interactive form, which owns the terminal
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Load configuration: defaults, then the config file, then environment
///
/// An explicit `path` must exist; the default `house-price.toml` is optional.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let defaults = Config::default();

    let mut builder = config::Config::builder()
        .set_default("display.currency_symbol", defaults.display.currency_symbol)?
        .set_default("logging.level", defaults.logging.level)?;

    builder = match path {
        Some(path) => builder.add_source(config::File::from(path)),
        None => builder.add_source(config::File::with_name(DEFAULT_CONFIG_NAME).required(false)),
    };

    let config = builder
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.display.currency_symbol.trim().is_empty() {
        anyhow::bail!("Currency symbol cannot be empty");
    }

    let level = cfg.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        anyhow::bail!(
            "Invalid log level: '{}'. Must be one of: {}",
            cfg.logging.level,
            LOG_LEVELS.join(", ")
        );
    }

    if let Some(file) = &cfg.logging.file {
        if file.as_os_str().is_empty() {
            anyhow::bail!("Log file path cannot be empty");
        }
    }

    Ok(())
}
