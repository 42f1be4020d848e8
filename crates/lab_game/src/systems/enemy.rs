// crates/lab_game/src/systems/enemy.rs

//! Patrolling enemies. An enemy walks between two x bounds and turns around
//! at each; the sign of its velocity is its only state.

use glam::Vec2;
use lab_shared::{Aabb, EnemyKind};
use serde::{Deserialize, Serialize};

pub const ENEMY_SIZE: Vec2 = Vec2::new(48.0, 48.0);
/// Patrol half-width used when a spawn leaves a bound out.
pub const DEFAULT_PATROL_RANGE: f32 = 100.0;

/// Immutable spawn record kept by the level.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub x: f32,
    pub y: f32,
    pub kind: EnemyKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patrol_start: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patrol_end: Option<f32>,
}

impl EnemySpawn {
    pub const fn new(x: f32, y: f32, kind: EnemyKind) -> Self {
        Self {
            x,
            y,
            kind,
            patrol_start: None,
            patrol_end: None,
        }
    }

    pub const fn with_patrol(mut self, start: f32, end: f32) -> Self {
        self.patrol_start = Some(start);
        self.patrol_end = Some(end);
        self
    }

    /// Resolved `(start, end)`, falling back to `x ∓ DEFAULT_PATROL_RANGE`.
    pub fn patrol_range(&self) -> (f32, f32) {
        (
            self.patrol_start.unwrap_or(self.x - DEFAULT_PATROL_RANGE),
            self.patrol_end.unwrap_or(self.x + DEFAULT_PATROL_RANGE),
        )
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(Vec2::new(self.x, self.y), ENEMY_SIZE)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    pub kind: EnemyKind,
    pub patrol_start: f32,
    pub patrol_end: f32,
    pub velocity_x: f32,
    /// Inactive enemies neither move, collide nor render.
    pub active: bool,
}

impl Enemy {
    /// Starts active and walking left.
    pub fn from_spawn(spawn: &EnemySpawn) -> Self {
        let (patrol_start, patrol_end) = spawn.patrol_range();
        Self {
            pos: Vec2::new(spawn.x, spawn.y),
            kind: spawn.kind,
            patrol_start,
            patrol_end,
            velocity_x: -spawn.kind.patrol_speed(),
            active: true,
        }
    }

    pub fn speed(&self) -> f32 {
        self.kind.patrol_speed()
    }

    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }

        self.pos.x += self.velocity_x * dt;

        if self.pos.x <= self.patrol_start {
            self.pos.x = self.patrol_start;
            self.velocity_x = self.speed();
        } else if self.pos.x >= self.patrol_end {
            self.pos.x = self.patrol_end;
            self.velocity_x = -self.speed();
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, ENEMY_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_patrol_is_centred_on_spawn() {
        let enemy = Enemy::from_spawn(&EnemySpawn::new(600.0, 452.0, EnemyKind::Cat));
        assert_eq!((enemy.patrol_start, enemy.patrol_end), (500.0, 700.0));
        assert_eq!(enemy.velocity_x, -50.0);
        assert!(enemy.active);
    }

    #[test]
    fn squirrel_turns_at_the_right_bound() {
        let spawn = EnemySpawn::new(600.0, 452.0, EnemyKind::Squirrel).with_patrol(500.0, 750.0);
        let mut enemy = Enemy::from_spawn(&spawn);

        // Walk left into the start bound first.
        enemy.update(2.0);
        assert_eq!(enemy.pos.x, 500.0);
        assert_eq!(enemy.velocity_x, 80.0);

        enemy.update(4.0);
        assert_eq!(enemy.pos.x, 750.0);
        assert_eq!(enemy.velocity_x, -80.0);
    }

    #[test]
    fn stays_inside_patrol_range() {
        let spawn = EnemySpawn::new(600.0, 452.0, EnemyKind::Squirrel).with_patrol(500.0, 750.0);
        let mut enemy = Enemy::from_spawn(&spawn);
        for step in 0..2_000 {
            enemy.update(if step % 7 == 0 { 0.5 } else { 1.0 / 60.0 });
            assert!(enemy.pos.x >= 500.0 && enemy.pos.x <= 750.0);
        }
    }

    #[test]
    fn inactive_enemy_is_frozen() {
        let mut enemy = Enemy::from_spawn(&EnemySpawn::new(600.0, 452.0, EnemyKind::Squirrel));
        enemy.active = false;
        enemy.update(1.0);
        assert_eq!(enemy.pos.x, 600.0);
    }
}
