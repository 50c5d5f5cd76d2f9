use anyhow::Result;
use colored::Colorize;
use house_price_estimator::config::{self, Config};
use std::path::Path;
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration after defaults, file and environment
pub fn show(path: Option<&Path>) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!("Loading configuration for display");

    let cfg = config::load_config(path)?;

    println!("{}", "Current Configuration:".green().bold());
    println!();

    // Serialize to TOML format
    let toml_string = toml::to_string_pretty(&cfg)?;
    println!("{}", toml_string);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config validate command
pub fn validate(path: Option<&Path>) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration file");

    let cfg = config::load_config(path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    for line in summary(&cfg) {
        println!("  {}", line);
    }

    info!("Configuration validation successful");
    Ok(())
}

fn summary(cfg: &Config) -> Vec<String> {
    vec![
        format!("Currency Symbol: {}", cfg.display.currency_symbol),
        format!("Log Level: {}", cfg.logging.level),
        format!(
            "Form Log File: {}",
            cfg.logging
                .file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".to_string())
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_summary() {
        let mut cfg = Config::default();
        assert_eq!(
            summary(&cfg),
            vec![
                "Currency Symbol: ₹".to_string(),
                "Log Level: info".to_string(),
                "Form Log File: (none)".to_string(),
            ]
        );

        cfg.logging.file = Some(PathBuf::from("logs/form.log"));
        assert_eq!(summary(&cfg)[2], "Form Log File: logs/form.log");
    }
}
