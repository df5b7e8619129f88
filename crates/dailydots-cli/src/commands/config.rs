//! Config command handlers

use anyhow::{bail, Context, Result};

use dailydots_core::Config;

use crate::output::{Output, OutputFormat};

/// Show current configuration
pub fn show(output: &Output) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "data_dir": config.data_dir,
                    "log_file": config.log_file,
                    "recent_count": config.recent_count,
                    "entries_file": config.entries_path(),
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.data_dir.display());
        }
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  data_dir:     {}", config.data_dir.display());
            println!(
                "  log_file:     {}",
                config
                    .log_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(not set)".to_string())
            );
            println!("  recent_count: {}", config.recent_count);
            println!();
            println!("Entries file: {}", config.entries_path().display());
            println!("Config file:  {}", Config::config_file_path().display());
        }
    }

    Ok(())
}

/// Set a configuration value
pub fn set(key: String, value: String, output: &Output) -> Result<()> {
    let mut config = Config::load().context("Failed to load configuration")?;

    match key.as_str() {
        "data_dir" => {
            config.data_dir = value.clone().into();
        }
        "log_file" => {
            config.log_file = if value.is_empty() || value == "none" {
                None
            } else {
                Some(value.clone().into())
            };
        }
        "recent_count" => {
            config.recent_count = value
                .parse()
                .context("Invalid value for recent_count. Use a whole number.")?;
        }
        _ => {
            bail!(
                "Unknown configuration key: '{}'\n\
                 Valid keys: data_dir, log_file, recent_count",
                key
            );
        }
    }

    config.save().context("Failed to save configuration")?;

    output.success(&format!("Set {} = {}", key, value));

    Ok(())
}
