// crates/lab_game/src/systems/collectible.rs

use glam::Vec2;
use lab_shared::{Aabb, CollectibleKind};
use serde::{Deserialize, Serialize};

/// Peak bob displacement in pixels.
pub const BOB_AMOUNT: f32 = 8.0;
/// Milliseconds per radian of bob phase.
pub const BOB_PERIOD_MS: f32 = 500.0;

/// Vertical bob at simulation time `sim_time` (seconds). Shared by every
/// collectible, so they all bob in phase.
pub fn bob_offset(sim_time: f32) -> f32 {
    (sim_time * 1000.0 / BOB_PERIOD_MS).sin() * BOB_AMOUNT
}

pub fn default_value(kind: CollectibleKind) -> u32 {
    match kind {
        CollectibleKind::Treat => 10,
        CollectibleKind::TennisBall => 50,
    }
}

pub fn default_size(kind: CollectibleKind) -> Vec2 {
    match kind {
        CollectibleKind::Treat => Vec2::new(16.0, 12.0),
        CollectibleKind::TennisBall => Vec2::new(20.0, 20.0),
    }
}

/// Immutable spawn record. `value` and `size` fall back to the kind's defaults.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollectibleSpawn {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub kind: CollectibleKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Vec2>,
}

impl CollectibleSpawn {
    pub const fn new(x: f32, y: f32, kind: CollectibleKind) -> Self {
        Self {
            x,
            y,
            kind,
            value: None,
            size: None,
        }
    }

    pub const fn with_value(mut self, value: u32) -> Self {
        self.value = Some(value);
        self
    }

    pub fn resolved_size(&self) -> Vec2 {
        self.size.unwrap_or_else(|| default_size(self.kind))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Collectible {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: CollectibleKind,
    pub value: u32,
    collected: bool,
    bob: f32,
}

impl Collectible {
    pub fn from_spawn(spawn: &CollectibleSpawn) -> Self {
        Self {
            pos: Vec2::new(spawn.x, spawn.y),
            size: spawn.resolved_size(),
            kind: spawn.kind,
            value: spawn.value.unwrap_or_else(|| default_value(spawn.kind)),
            collected: false,
            bob: 0.0,
        }
    }

    pub fn update(&mut self, sim_time: f32) {
        if self.collected {
            return;
        }
        self.bob = bob_offset(sim_time);
    }

    /// Marks the collectible taken and reports its value. Idempotent.
    pub fn collect(&mut self) -> u32 {
        self.collected = true;
        self.value
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Collision bounds. The bob is visual only.
    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn bob_offset(&self) -> f32 {
        self.bob
    }

    /// Bounds shifted by the current bob, for drawing.
    pub fn render_bounds(&self) -> Aabb {
        self.bounds().translated(Vec2::new(0.0, self.bob))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn kind_defaults() {
        let treat = Collectible::from_spawn(&CollectibleSpawn::new(150.0, 460.0, CollectibleKind::Treat));
        assert_eq!(treat.value, 10);
        assert_eq!(treat.size, Vec2::new(16.0, 12.0));

        let ball = Collectible::from_spawn(&CollectibleSpawn::new(0.0, 0.0, CollectibleKind::TennisBall));
        assert_eq!(ball.value, 50);
        assert_eq!(ball.size, Vec2::new(20.0, 20.0));
    }

    #[test]
    fn explicit_value_overrides_kind() {
        let spawn = CollectibleSpawn::new(0.0, 0.0, CollectibleKind::Treat).with_value(25);
        assert_eq!(Collectible::from_spawn(&spawn).value, 25);
    }

    #[test]
    fn collect_is_idempotent() {
        let mut c = Collectible::from_spawn(&CollectibleSpawn::new(0.0, 0.0, CollectibleKind::TennisBall));
        assert!(!c.is_collected());
        assert_eq!(c.collect(), 50);
        assert_eq!(c.collect(), 50);
        assert!(c.is_collected());
    }

    #[test]
    fn bob_follows_sim_clock_and_stops_once_collected() {
        assert_eq!(bob_offset(0.0), 0.0);
        let quarter = std::f32::consts::FRAC_PI_2 * BOB_PERIOD_MS / 1000.0;
        assert_relative_eq!(bob_offset(quarter), BOB_AMOUNT, epsilon = 1e-4);

        let mut c = Collectible::from_spawn(&CollectibleSpawn::new(10.0, 20.0, CollectibleKind::Treat));
        c.update(quarter);
        assert_relative_eq!(c.bob_offset(), BOB_AMOUNT, epsilon = 1e-4);
        assert_eq!(c.bounds().pos, Vec2::new(10.0, 20.0));
        assert_relative_eq!(c.render_bounds().pos.y, 28.0, epsilon = 1e-4);

        c.collect();
        c.update(0.0);
        assert_relative_eq!(c.bob_offset(), BOB_AMOUNT, epsilon = 1e-4);
    }
}
