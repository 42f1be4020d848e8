// crates/lab_physics/src/lib.rs
//! Discrete AABB physics: gravity, per-axis integration, downward-only
//! collision resolution. No swept tests; every step is re-checked from scratch.

mod body;
pub mod collision;
pub mod gravity;

pub use body::Body;
pub use collision::{check_ground_collision, check_platform_collision, resolve_platform_landing, Landing};
pub use gravity::{apply_gravity, integrate_x, integrate_y, GRAVITY};
