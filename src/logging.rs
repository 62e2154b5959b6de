use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Default log location. The dashboard owns stdout, so logs go to a file.
pub fn default_log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dailyvocab")
        .join("dailyvocab.log")
}

pub fn level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

pub fn init(path: &Path, verbose: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let log_file =
        File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    WriteLogger::init(level(verbose), log_config, log_file).context("installing logger")?;
    Ok(())
}

/// Log a failure at error level and hand the result back unchanged.
pub fn log_failure<T>(result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        log::error!("{err:#}");
    }
    result
}
