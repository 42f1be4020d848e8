// crates/lab_ecs/src/lib.rs
//! Minimal entity arena used for the level's live entity sets.

mod entity;
mod storage;
mod world;

pub use entity::Entity;
pub use storage::{SparseSet, Storage};
pub use world::World;
