//! Diagnostics and calculation tape logging.
//!
//! The terminal belongs to the UI, so diagnostics go to
//! `<log_dir>/pianocalc.log` when enabled. Independently, completed
//! calculations can be appended to daily tape files named
//! `tape_<date>.log` in the same directory.

use crate::calc::Calculation;
use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Expand a leading `~` to the home directory.
pub fn resolve_log_dir(log_dir: &str) -> PathBuf {
    if log_dir == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    if let Some(rest) = log_dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(log_dir)
}

/// Install the diagnostics subscriber. No-op when logging is disabled.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }
    let dir = resolve_log_dir(&config.log_dir);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let path = dir.join("pianocalc.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pianocalc={}", config.level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;
    Ok(())
}

/// Appends completed calculations to daily tape files.
///
/// File handles are cached for the lifetime of the logger. A tape file that
/// cannot be opened is skipped.
pub struct TapeLogger {
    enabled: bool,
    log_dir: PathBuf,
    file_handles: HashMap<String, fs::File>,
}

impl TapeLogger {
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.tape,
            log_dir: resolve_log_dir(&config.log_dir),
            file_handles: HashMap::new(),
        }
    }

    pub fn log_calculation(&mut self, timestamp: &str, calc: &Calculation) {
        if !self.enabled {
            return;
        }

        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let filename = format!("tape_{}.log", date);
        let line = format!("[{}] {}", timestamp, calc.describe());

        if !self.file_handles.contains_key(&filename) {
            let _ = fs::create_dir_all(&self.log_dir);
            let filepath = self.log_dir.join(&filename);
            match OpenOptions::new().create(true).append(true).open(&filepath) {
                Ok(file) => {
                    self.file_handles.insert(filename.clone(), file);
                }
                Err(e) => {
                    tracing::warn!(path = %filepath.display(), error = %e, "cannot open tape file");
                    return;
                }
            }
        }

        if let Some(handle) = self.file_handles.get_mut(&filename) {
            let _ = writeln!(handle, "{}", line);
        }
    }
}
