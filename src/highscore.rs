//! High-score persistence
//!
//! One non-negative integer in a plain text file, decimal ASCII. A missing
//! or unparsable file is a recoverable condition that reads as 0; a failed
//! write is logged and otherwise ignored. I/O stays contained here - nothing
//! in sim or the state machine ever sees a storage error.

use std::fs;
use std::path::{Path, PathBuf};

/// Default store location, next to the executable's working directory
pub const DEFAULT_HIGH_SCORE_FILE: &str = "highscore.txt";

/// File-backed store for the single persisted high score
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl Default for HighScoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_HIGH_SCORE_FILE)
    }
}

impl HighScoreStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the persisted high score; 0 when absent or corrupt
    pub fn load(&self) -> u64 {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match contents.trim().parse::<u64>() {
                Ok(value) => value,
                Err(_) => {
                    log::warn!(
                        "could not parse {}, resetting high score",
                        self.path.display()
                    );
                    0
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => 0,
            Err(err) => {
                log::warn!(
                    "could not read {}: {err}, resetting high score",
                    self.path.display()
                );
                0
            }
        }
    }

    /// Persist a new high score, best effort
    pub fn save(&self, value: u64) {
        if let Err(err) = fs::write(&self.path, value.to_string()) {
            log::warn!("could not save high score to {}: {err}", self.path.display());
        }
    }
}
