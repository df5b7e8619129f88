//! Logging setup
//!
//! Logging is off unless DAILYDOTS_LOG is set (e.g. `DAILYDOTS_LOG=debug`).
//! Output goes to `config.log_file` when configured, stderr otherwise.

use std::fs::OpenOptions;
use std::sync::Mutex;

use dailydots_core::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn init(config: &Config) {
    let Ok(log_level) = std::env::var("DAILYDOTS_LOG") else {
        return;
    };

    let env_filter = EnvFilter::new(format!(
        "dailydots_core={},dailydots_cli={}",
        log_level, log_level
    ));

    match &config.log_file {
        Some(log_path) => {
            let log_file = match OpenOptions::new().create(true).append(true).open(log_path) {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("Warning: Could not open log file {:?}: {}", log_path, e);
                    return;
                }
            };

            // Ignore error if already initialized
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(log_file))
                .try_init();

            info!("Logging to {:?}", log_path);
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}
