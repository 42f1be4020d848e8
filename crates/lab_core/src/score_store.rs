// crates/lab_core/src/score_store.rs

use std::fs;
use std::path::{Path, PathBuf};

use lab_shared::ScoreStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::CoreError;

const MAGIC: [u8; 4] = *b"YLAB";
const VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct ScoreRecord {
    magic: [u8; 4],
    version: u32,
    best: u32,
}

/// Best score persisted as a small bincode record.
///
/// Failures never reach the game: a missing file reads as 0, a corrupt one
/// is logged and read as 0, a failed write is logged and dropped.
#[derive(Clone, Debug)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<u32, CoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(CoreError::io(&self.path, e)),
        };

        let record: ScoreRecord = bincode::deserialize(&bytes)?;
        if record.magic != MAGIC || record.version != VERSION {
            return Err(CoreError::ScoreHeader {
                magic: record.magic,
                version: record.version,
            });
        }
        Ok(record.best)
    }

    /// Writes through a sibling temp file so a crash never leaves half a record.
    pub fn write(&self, best: u32) -> Result<(), CoreError> {
        let record = ScoreRecord {
            magic: MAGIC,
            version: VERSION,
            best,
        };
        let bytes = bincode::serialize(&record)?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| CoreError::io(dir, e))?;
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, bytes).map_err(|e| CoreError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| CoreError::io(&self.path, e))
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&mut self) -> u32 {
        match self.read() {
            Ok(best) => {
                debug!(best, path = %self.path.display(), "Best score loaded");
                best
            }
            Err(e) => {
                warn!("Ignoring best score file: {e}");
                0
            }
        }
    }

    fn save(&mut self, best: u32) {
        if let Err(e) = self.write(best) {
            warn!("Could not save best score: {e}");
        }
    }
}

/// Process-local store for runs without a score file, and for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryScoreStore {
    pub best: u32,
    pub saves: u32,
}

impl MemoryScoreStore {
    pub fn with_best(best: u32) -> Self {
        Self { best, saves: 0 }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&mut self) -> u32 {
        self.best
    }

    fn save(&mut self, best: u32) {
        self.best = best;
        self.saves += 1;
    }
}
