// crates/lab_shared/src/lib.rs

pub mod components;
pub mod geometry;
pub mod host;
pub mod input_types;

pub use components::{CollectibleKind, EnemyKind, Facing, GameState, PlatformKind, Pose};
pub use geometry::Aabb;
pub use host::{
    AudioSink, CameraOffset, HudView, NullAudio, Renderer, ScoreStore, Services, SoundEvent,
    SpriteKind, SpriteView,
};
pub use input_types::{ActionId, InputState, ACTION_NOT_FOUND, canonical_actions};
