// crates/lab_shared/src/components.rs
//! Kind tags and small state enums shared by the simulation and its renderers.

use serde::{Deserialize, Serialize};

/// Visual category of a platform. Every kind collides the same way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformKind {
    #[default]
    Ground,
    Floating,
    Obstacle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    Squirrel,
    Cat,
}

impl EnemyKind {
    /// Patrol speed in pixels per second.
    pub const fn patrol_speed(self) -> f32 {
        match self {
            EnemyKind::Squirrel => 80.0,
            EnemyKind::Cat => 50.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectibleKind {
    #[default]
    Treat,
    TennisBall,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub const fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Player animation pose. Always derived from motion state, never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Pose {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub fn is_playing(self) -> bool {
        self == GameState::Playing
    }

    pub fn is_won(self) -> bool {
        self == GameState::Won
    }

    pub fn is_lost(self) -> bool {
        self == GameState::Lost
    }

    /// Title shown over a finished round, if any.
    pub fn banner(self) -> Option<&'static str> {
        match self {
            GameState::Playing => None,
            GameState::Won => Some("Level Complete!"),
            GameState::Lost => Some("Game Over!"),
        }
    }
}
