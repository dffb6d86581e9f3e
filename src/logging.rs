//! File logging for the terminal binary.
//!
//! The terminal is in raw mode while playing, so log records go to a file
//! (`SNAKE_LOG_PATH`) instead of stdout/stderr.

use std::fs::File;

use anyhow::{Context, Result};
use simplelog::{Config, WriteLogger};

use crate::config::GameConfig;

/// Install the global logger. Returns `false` when logging is disabled.
pub fn init(config: &GameConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };
    let file = File::create(path).with_context(|| format!("creating log file {path}"))?;
    WriteLogger::init(config.log_level, Config::default(), file)
        .context("installing logger")?;
    Ok(true)
}
