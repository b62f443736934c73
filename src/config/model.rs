//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the calculator works out of the box.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub sound: SoundConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundMode {
    /// No feedback at all.
    Off,
    /// Ring the terminal bell.
    Bell,
    /// Run an external player on the note's sound file.
    Command,
}

/// Key-press sound feedback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundConfig {
    #[serde(default = "default_sound_mode")]
    pub mode: SoundMode,
    /// Player executable; the asset path is passed as its last argument.
    #[serde(default = "default_player")]
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Directory holding the `.ogg` note files.
    #[serde(default = "default_asset_dir")]
    pub asset_dir: PathBuf,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            mode: default_sound_mode(),
            program: default_player(),
            args: Vec::new(),
            asset_dir: default_asset_dir(),
        }
    }
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_tape: bool,
    #[serde(default = "default_max_tape")]
    pub max_tape: usize,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    /// How long a pressed button stays highlighted.
    #[serde(default = "default_press_highlight_ms")]
    pub press_highlight_ms: u64,
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_tape: true,
            max_tape: default_max_tape(),
            timestamp_format: default_timestamp_format(),
            press_highlight_ms: default_press_highlight_ms(),
            mouse: true,
        }
    }
}

impl UiConfig {
    /// The configured timestamp format, or the default when chrono cannot
    /// render it.
    pub fn checked_timestamp_format(&self) -> String {
        let invalid = StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error));
        if invalid {
            tracing::warn!(
                format = %self.timestamp_format,
                "invalid timestamp_format, using the default"
            );
            default_timestamp_format()
        } else {
            self.timestamp_format.clone()
        }
    }
}

/// Diagnostics and tape logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write diagnostics to `<log_dir>/pianocalc.log`.
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Append every completed calculation to a daily tape file.
    #[serde(default)]
    pub tape: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_log_level(),
            log_dir: default_log_dir(),
            tape: false,
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_sound_mode() -> SoundMode {
    SoundMode::Command
}
fn default_player() -> String {
    if cfg!(target_os = "macos") {
        "afplay".to_string()
    } else {
        "paplay".to_string()
    }
}
fn default_asset_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pianocalc")
        .join("sounds")
}
fn default_max_tape() -> usize {
    200
}
fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}
fn default_press_highlight_ms() -> u64 {
    150
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/pianocalc/logs".to_string()
}
