use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::storage::{self, data_dir, read_json, write_json};

const SCORE_FILE_NAME: &str = "scores.json";

/// Where the best score lives between runs.
///
/// Both calls are fail-soft: implementations log problems and carry on, so
/// gameplay never waits on storage.
pub trait ScoreStore {
    fn load_best_score(&self) -> u32;
    fn save_best_score(&mut self, value: u32);
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    best_score: u32,
}

/// Best score kept in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    /// Store at the platform-correct data location.
    #[must_use]
    pub fn new() -> Self {
        Self::at(data_dir().join(SCORE_FILE_NAME))
    }

    #[must_use]
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the stored score, surfacing errors instead of swallowing them.
    pub fn try_load(&self) -> Result<u32, storage::StoreError> {
        Ok(read_json::<ScoreFile>(&self.path)?.map_or(0, |file| file.best_score))
    }
}

impl Default for JsonScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreStore for JsonScoreStore {
    fn load_best_score(&self) -> u32 {
        self.try_load().unwrap_or_else(|error| {
            tracing::warn!(%error, "ignoring unreadable score file");
            0
        })
    }

    fn save_best_score(&mut self, value: u32) {
        if let Err(error) = write_json(&self.path, &ScoreFile { best_score: value }) {
            tracing::warn!(%error, best_score = value, "failed to save best score");
        }
    }
}

/// In-memory store for tests and `--no-save` runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    best_score: u32,
    saves: usize,
}

impl MemoryScoreStore {
    #[must_use]
    pub fn with_best_score(best_score: u32) -> Self {
        Self {
            best_score,
            saves: 0,
        }
    }

    /// Number of times a score was saved.
    #[must_use]
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load_best_score(&self) -> u32 {
        self.best_score
    }

    fn save_best_score(&mut self, value: u32) {
        self.best_score = value;
        self.saves += 1;
    }
}
