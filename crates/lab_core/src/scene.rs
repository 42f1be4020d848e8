// crates/lab_core/src/scene.rs

//! Loading of the two human-edited RON files: the level and the game config.
//! A missing path means "use the built-in default".

use std::fs;
use std::path::Path;

use lab_game::{GameConfig, LevelDesc};
use ron::ser::PrettyConfig;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::CoreError;

fn read_ron<T: DeserializeOwned>(path: &Path) -> Result<T, CoreError> {
    let text = fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
    ron::from_str(&text).map_err(|source| CoreError::Ron {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads and validates a level, or returns the built-in one.
pub fn load_level(path: Option<&Path>) -> Result<LevelDesc, CoreError> {
    let Some(path) = path else {
        return Ok(LevelDesc::yellow_lab());
    };

    let desc: LevelDesc = read_ron(path)?;
    desc.validate()?;
    info!(path = %path.display(), "Level file loaded");
    Ok(desc)
}

pub fn load_config(path: Option<&Path>) -> Result<GameConfig, CoreError> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };

    let config: GameConfig = read_ron(path)?;
    config.validate()?;
    info!(path = %path.display(), "Config file loaded");
    Ok(config)
}

/// Writes `desc` as pretty RON, e.g. to start a new level from the stock one.
pub fn save_level(path: &Path, desc: &LevelDesc) -> Result<(), CoreError> {
    let text = ron::ser::to_string_pretty(desc, PrettyConfig::default())?;
    fs::write(path, text).map_err(|e| CoreError::io(path, e))
}
