//! Configuration management commands.

use capable_core::{Config, ConfigError};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Key: clear_confirm_threshold or default_view
        key: String,
        /// New value
        value: String,
    },
    /// Print the configuration file path
    Path,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("clear_confirm_threshold = {}", config.clear_confirm_threshold);
            println!("default_view = {}", config.default_view);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            match key.as_str() {
                "clear_confirm_threshold" => {
                    config.clear_confirm_threshold =
                        value.parse().map_err(|_| ConfigError::InvalidValue {
                            key: key.clone(),
                            message: format!("'{value}' is not a count"),
                        })?;
                }
                "default_view" => {
                    config.default_view = value.parse()?;
                }
                _ => {
                    return Err(Box::new(ConfigError::InvalidValue {
                        key,
                        message: "unknown key".to_string(),
                    }));
                }
            }
            config.save()?;
            println!("Saved.");
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
    }

    Ok(())
}
