// crates/lab_game/src/lib.rs
//! Game rules for the Yellow Lab platformer: entity models, camera, level,
//! score and the fixed-step `Game` simulation.

pub mod config;
mod content;
pub mod level;
pub mod score;
pub mod state;
pub mod systems;

pub use config::{CameraConfig, ConfigError, FallPolicy, GameConfig};
pub use level::{Level, LevelDesc, LevelError, Platform};
pub use score::Score;
pub use state::{Game, GameError};
pub use systems::animation::Animator;
pub use systems::camera::Camera;
pub use systems::collectible::{Collectible, CollectibleSpawn};
pub use systems::enemy::{Enemy, EnemySpawn};
pub use systems::goal::Goal;
pub use systems::player::{Player, PlayerInput};
