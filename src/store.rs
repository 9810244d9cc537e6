//! High-score persistence
//!
//! A tiny JSON file with the best score. The core never touches this;
//! the binary hydrates once at startup and records new bests as they
//! appear. Writes are skipped unless the score actually improves on
//! what is already on disk.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the score file location.
pub const SCORES_ENV: &str = "QUADFALL_SCORES";

const DEFAULT_PATH: &str = "quadfall-scores.json";

#[derive(Debug, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

#[derive(Debug)]
pub struct ScoreStore {
    path: PathBuf,
    last_written: u32,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_written: 0,
        }
    }

    /// Store at the path named by `QUADFALL_SCORES`, or the default
    /// file in the working directory.
    pub fn from_env() -> Self {
        let path = std::env::var(SCORES_ENV).unwrap_or_else(|_| DEFAULT_PATH.to_string());
        Self::new(path)
    }

    /// Read the stored best. A missing file is a fresh profile, not an
    /// error.
    pub fn load(&mut self) -> Result<u32> {
        if !self.path.exists() {
            self.last_written = 0;
            return Ok(0);
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("reading score file {}", self.path.display()))?;
        let file: ScoreFile = serde_json::from_str(&raw)
            .with_context(|| format!("parsing score file {}", self.path.display()))?;
        self.last_written = file.high_score;
        Ok(file.high_score)
    }

    /// Persist `score` if it beats everything written so far.
    pub fn record(&mut self, score: u32) -> Result<()> {
        if score <= self.last_written {
            return Ok(());
        }
        let body = serde_json::to_string_pretty(&ScoreFile { high_score: score })?;
        fs::write(&self.path, body)
            .with_context(|| format!("writing score file {}", self.path.display()))?;
        self.last_written = score;
        Ok(())
    }
}
