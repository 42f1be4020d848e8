// crates/lab_core/src/error.rs

use std::path::PathBuf;

use lab_game::{ConfigError, GameError, LevelError};
use thiserror::Error;

/// Everything that can go wrong outside the simulation step.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Ron {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("failed to write RON: {0}")]
    RonWrite(#[from] ron::Error),

    #[error("score record is unreadable: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("score record has bad header (magic {magic:?}, version {version})")]
    ScoreHeader { magic: [u8; 4], version: u32 },

    #[error("bad input script token '{token}': {reason}")]
    Script { token: String, reason: String },

    #[error(transparent)]
    Level(#[from] LevelError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Game(#[from] GameError),
}

impl CoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CoreError::Io {
            path: path.into(),
            source,
        }
    }
}
