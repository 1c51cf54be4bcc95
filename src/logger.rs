use crate::error::{Error, Result};
use crate::parser::Config;
use simplelog::{
    ColorChoice, CombinedLogger, Config as SLConfig, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::{self, OpenOptions};

/// Initialize logging utilities. This uses the simplelog and log crates and
/// must be done once at the beginning of the program, before any flags are
/// registered if the registration trace is wanted. Terminal output goes to
/// stderr so it never mixes with what callbacks print.
///
/// # Arguments
///
/// * `config` - parser::Config; uses the log level and log file within.
///
/// # Errors
///
/// This function may throw the following errors:
///
/// * LoggerInitFailed
pub fn init(config: &Config) -> Result<()> {
    let level_filter = config.log_level;
    let log_config = SLConfig::default();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level_filter,
        log_config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    if let Some(ref log_path) = config.log_file {
        if let Some(log_dir) = log_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(log_dir).map_err(|e| {
                Error::LoggerInitFailed(format!(
                    "Could not create log directories '{}': {:?}",
                    log_dir.display(),
                    e
                ))
            })?;
        }

        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .map_err(|e| {
                Error::LoggerInitFailed(format!(
                    "Could not create log file for WriteLogger: {:?}",
                    e
                ))
            })?;

        loggers.push(WriteLogger::new(level_filter, log_config, log_file));
    }

    CombinedLogger::init(loggers)
        .map_err(|e| Error::LoggerInitFailed(format!("Logger init failed: {:?}", e)))?;

    Ok(())
}
