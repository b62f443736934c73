//! Piano-note feedback for key presses.
//!
//! Every key except `.`, `%` and `±` maps to a note file. Playback is
//! fire-and-forget: a missing file or a player that fails to start is logged
//! at debug level and otherwise ignored.

use crate::calc::{Key, Operator};
use crate::config::{SoundConfig, SoundMode};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;

/// Note file played for `key`, if any.
pub fn sound_asset(key: Key) -> Option<&'static str> {
    let asset = match key {
        Key::Digit(0) => "c4_1_1.ogg",
        Key::Digit(1) => "d4_1_1.ogg",
        Key::Digit(2) => "e4_1.ogg",
        Key::Digit(3) => "f4_1_1.ogg",
        Key::Digit(4) => "g4_1_1.ogg",
        Key::Digit(5) => "a4_1_1.ogg",
        Key::Digit(6) => "b4_1.ogg",
        Key::Digit(7) => "c5_1_1.ogg",
        Key::Digit(8) => "d5_1_1.ogg",
        Key::Digit(9) => "e5_1.ogg",
        Key::Clear => "f5_1_1.ogg",
        Key::Operator(Operator::Add) => "a4_1_1.ogg",
        Key::Operator(Operator::Subtract) => "b4_1.ogg",
        Key::Operator(Operator::Multiply) => "c5_1_1.ogg",
        Key::Operator(Operator::Divide) => "d5_1_1.ogg",
        Key::Equals => "e5_1.ogg",
        _ => return None,
    };
    Some(asset)
}

#[derive(Debug, Error)]
pub enum SoundError {
    #[error("sound file not found: {}", .0.display())]
    MissingAsset(PathBuf),
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to ring bell: {0}")]
    Bell(#[source] io::Error),
}

pub struct SoundPlayer {
    config: SoundConfig,
}

impl SoundPlayer {
    pub fn new(config: &SoundConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Play the note for `key`. Never fails; problems are only logged.
    pub fn play(&self, key: Key) {
        if let Err(e) = self.try_play(key) {
            tracing::debug!(%key, error = %e, "key sound skipped");
        }
    }

    fn try_play(&self, key: Key) -> Result<(), SoundError> {
        let Some(asset) = sound_asset(key) else {
            return Ok(());
        };
        match self.config.mode {
            SoundMode::Off => Ok(()),
            SoundMode::Bell => {
                let mut stdout = io::stdout();
                stdout
                    .write_all(b"\x07")
                    .and_then(|_| stdout.flush())
                    .map_err(SoundError::Bell)
            }
            SoundMode::Command => self.spawn_player(asset),
        }
    }

    pub fn asset_path(&self, asset: &str) -> PathBuf {
        self.config.asset_dir.join(asset)
    }

    fn spawn_player(&self, asset: &str) -> Result<(), SoundError> {
        let path = self.asset_path(asset);
        if !path.is_file() {
            return Err(SoundError::MissingAsset(path));
        }
        let mut child = Command::new(&self.config.program)
            .args(&self.config.args)
            .arg(&path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| SoundError::Spawn {
                program: self.config.program.clone(),
                source,
            })?;
        // Reap the player in the background so it does not linger as a zombie.
        tokio::spawn(async move {
            let _ = child.wait().await;
        });
        Ok(())
    }
}
