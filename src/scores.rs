use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
struct SavedScores {
    #[serde(default)]
    hi_score: u32,
}

/// The flat JSON high-score file.
#[derive(Clone, Debug)]
pub struct ScoreFile {
    path: PathBuf,
}

impl ScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ScoreFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the saved high score. A missing, empty or malformed file counts
    /// as zero and is replaced with a fresh one.
    pub fn load(&self) -> u32 {
        match self.read() {
            Ok(hi_score) => hi_score,
            Err(e) => {
                info!("No usable score file at {} ({}), starting from 0", self.path.display(), e);
                self.save(0);
                0
            }
        }
    }

    fn read(&self) -> io::Result<u32> {
        let data = fs::read(&self.path)?;
        if data.is_empty() {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "empty score file"));
        }
        let scores: SavedScores = serde_json::from_slice(&data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(scores.hi_score)
    }

    /// Writes the high score. Failures are logged and otherwise ignored.
    pub fn save(&self, hi_score: u32) {
        if let Err(e) = self.write(hi_score) {
            warn!("Could not save scores to {}: {}", self.path.display(), e);
        }
    }

    fn write(&self, hi_score: u32) -> io::Result<()> {
        let contents = serde_json::to_string_pretty(&SavedScores { hi_score })
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, contents)
    }
}
