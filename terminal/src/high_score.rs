use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use common::HighScoreStore;

#[derive(Debug, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u32,
}

/// High score kept in a small JSON file. A missing or unreadable file counts as 0.
#[derive(Debug, Clone)]
pub struct FileHighScore {
    path: PathBuf,
}

impl FileHighScore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileHighScore {
    fn load(&self) -> u32 {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return 0,
        };
        match serde_json::from_str::<HighScoreFile>(&contents) {
            Ok(file) => file.high_score,
            Err(e) => {
                warn!("Ignoring unreadable high score file {:?}: {}", self.path, e);
                0
            }
        }
    }

    fn save(&mut self, score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }
        let body = serde_json::to_string(&HighScoreFile { high_score: score })?;
        fs::write(&self.path, body)
            .with_context(|| format!("Failed to write high score file {:?}", self.path))?;
        Ok(())
    }
}
