// crates/lab_shared/src/host.rs
//! Collaborator interfaces the simulation talks to. Implementations live in
//! the host; failures on their side never reach the simulation.

use glam::Vec2;

use crate::components::{CollectibleKind, EnemyKind, Facing, GameState, PlatformKind, Pose};
use crate::geometry::Aabb;

// ==================================================================================
// 1. CAMERA OFFSET
// ==================================================================================

/// World-to-screen transform handed to every renderable.
/// `origin` is the world position of the screen's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraOffset {
    pub origin: Vec2,
}

impl CameraOffset {
    pub const fn new(origin: Vec2) -> Self {
        Self { origin }
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world - self.origin
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen + self.origin
    }

    pub fn project(&self, bounds: &Aabb) -> Aabb {
        bounds.translated(-self.origin)
    }
}

// ==================================================================================
// 2. RENDERING
// ==================================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpriteKind {
    Platform(PlatformKind),
    Collectible(CollectibleKind),
    Enemy(EnemyKind),
    Goal,
    Player { pose: Pose, facing: Facing, frame: u32 },
}

/// Everything a renderer needs to draw one entity: where and what.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteView {
    pub bounds: Aabb,
    pub kind: SpriteKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HudView {
    pub score: u32,
    pub best: u32,
    pub state: GameState,
}

pub trait Renderer {
    fn begin_frame(&mut self, _camera: CameraOffset) {}
    fn draw_sprite(&mut self, sprite: &SpriteView, camera: CameraOffset);
    fn draw_hud(&mut self, _hud: &HudView) {}
    fn end_frame(&mut self) {}
}

// ==================================================================================
// 3. AUDIO + SCORE STORAGE
// ==================================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    Collect,
    Jump,
    Win,
    Lose,
}

/// Fire-and-forget sound trigger.
pub trait AudioSink {
    fn play(&mut self, event: SoundEvent);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _event: SoundEvent) {}
}

/// Persistence for the single best-score value.
pub trait ScoreStore {
    fn load(&mut self) -> u32;
    fn save(&mut self, best: u32);
}

/// Per-step handles to the host's sinks.
pub struct Services<'a> {
    pub audio: &'a mut dyn AudioSink,
    pub scores: &'a mut dyn ScoreStore,
}

impl<'a> Services<'a> {
    pub fn new(audio: &'a mut dyn AudioSink, scores: &'a mut dyn ScoreStore) -> Self {
        Self { audio, scores }
    }
}
