// crates/lab_game/src/systems/mod.rs
pub mod animation;
pub mod camera;
pub mod collectible;
pub mod enemy;
pub mod goal;
pub mod player;
