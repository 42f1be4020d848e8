// crates/lab_game/src/level.rs

//! Level layout and live entity sets.
//!
//! A `Level` keeps its `LevelDesc` untouched for its whole life. The live
//! enemies and collectibles sit in an ECS `World` that is rebuilt from those
//! descriptors on every reset, so a restarted level is indistinguishable from
//! a freshly loaded one.

use glam::Vec2;
use lab_ecs::{Entity, World};
use lab_shared::{Aabb, PlatformKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::systems::collectible::{Collectible, CollectibleSpawn};
use crate::systems::enemy::{Enemy, EnemySpawn};
use crate::systems::goal::Goal;

/// Static, one-way rectangle. Every kind collides the same way.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub kind: PlatformKind,
}

impl Platform {
    pub const fn new(x: f32, y: f32, width: f32, height: f32, kind: PlatformKind) -> Self {
        Self {
            x,
            y,
            width,
            height,
            kind,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    /// Inclusive point test.
    pub fn contains(&self, point: Vec2) -> bool {
        self.bounds().contains_point(point)
    }
}

fn default_player_start() -> Vec2 {
    Vec2::new(50.0, 452.0)
}

/// Serializable level description: layout plus spawn descriptors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelDesc {
    pub width: f32,
    pub height: f32,
    /// Order matters: the first platform landed on wins.
    #[serde(default)]
    pub platforms: Vec<Platform>,
    #[serde(default)]
    pub collectibles: Vec<CollectibleSpawn>,
    #[serde(default)]
    pub enemies: Vec<EnemySpawn>,
    pub goal: Vec2,
    #[serde(default = "default_player_start")]
    pub player_start: Vec2,
}

impl LevelDesc {
    /// An empty world of the given size, goal at the far right.
    pub fn empty(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            platforms: Vec::new(),
            collectibles: Vec::new(),
            enemies: Vec::new(),
            goal: Vec2::new(width - 64.0, height - 164.0),
            player_start: default_player_start(),
        }
    }

    pub fn validate(&self) -> Result<(), LevelError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(LevelError::InvalidWorldSize {
                width: self.width,
                height: self.height,
            });
        }

        for (index, platform) in self.platforms.iter().enumerate() {
            if !platform.bounds().is_valid() {
                return Err(LevelError::InvalidPlatform {
                    index,
                    width: platform.width,
                    height: platform.height,
                });
            }
        }

        for (index, spawn) in self.collectibles.iter().enumerate() {
            let size = spawn.resolved_size();
            if !(size.x > 0.0 && size.y > 0.0) {
                return Err(LevelError::InvalidCollectible { index, size });
            }
        }

        for (index, spawn) in self.enemies.iter().enumerate() {
            let (start, end) = spawn.patrol_range();
            if !(start <= spawn.x && spawn.x <= end) {
                return Err(LevelError::InvalidPatrol {
                    index,
                    start,
                    end,
                    x: spawn.x,
                });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LevelError {
    #[error("world size must be positive, got {width}x{height}")]
    InvalidWorldSize { width: f32, height: f32 },
    #[error("platform #{index} has non-positive size {width}x{height}")]
    InvalidPlatform { index: usize, width: f32, height: f32 },
    #[error("collectible #{index} has non-positive size {size}")]
    InvalidCollectible { index: usize, size: Vec2 },
    #[error("enemy #{index} patrol {start}..{end} does not contain its spawn x {x}")]
    InvalidPatrol {
        index: usize,
        start: f32,
        end: f32,
        x: f32,
    },
}

pub struct Level {
    desc: LevelDesc,
    world: World,
}

impl Level {
    pub fn new(desc: LevelDesc) -> Result<Self, LevelError> {
        desc.validate()?;

        let mut world = World::new();
        world.register_component::<Enemy>();
        world.register_component::<Collectible>();

        let mut level = Self { desc, world };
        level.spawn_all();

        info!(
            width = level.desc.width,
            height = level.desc.height,
            platforms = level.desc.platforms.len(),
            enemies = level.desc.enemies.len(),
            collectibles = level.desc.collectibles.len(),
            "Level loaded"
        );
        Ok(level)
    }

    fn spawn_all(&mut self) {
        for spawn in &self.desc.enemies {
            let entity = self.world.spawn();
            self.world.add_component(entity, Enemy::from_spawn(spawn));
        }
        for spawn in &self.desc.collectibles {
            let entity = self.world.spawn();
            self.world.add_component(entity, Collectible::from_spawn(spawn));
        }
    }

    /// Drops every live entity and replays the descriptors.
    pub fn reset(&mut self) {
        self.world.clear();
        self.spawn_all();
        debug!(live = self.world.entity_count(), "Level reset");
    }

    pub fn desc(&self) -> &LevelDesc {
        &self.desc
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.desc.platforms
    }

    pub fn platform_bounds(&self) -> impl Iterator<Item = Aabb> + '_ {
        self.desc.platforms.iter().map(Platform::bounds)
    }

    /// `(width, height)`. The world spans `[0, width] x [0, height]`.
    pub fn world_bounds(&self) -> Vec2 {
        Vec2::new(self.desc.width, self.desc.height)
    }

    pub fn goal(&self) -> Goal {
        Goal::new(self.desc.goal)
    }

    pub fn player_start(&self) -> Vec2 {
        self.desc.player_start
    }

    pub fn enemies(&self) -> impl Iterator<Item = (Entity, &Enemy)> + '_ {
        self.world
            .query::<Enemy>()
            .into_iter()
            .flat_map(|set| set.iter())
            .map(|(entity, enemy)| (*entity, enemy))
    }

    pub fn collectibles(&self) -> impl Iterator<Item = (Entity, &Collectible)> + '_ {
        self.world
            .query::<Collectible>()
            .into_iter()
            .flat_map(|set| set.iter())
            .map(|(entity, collectible)| (*entity, collectible))
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies().count()
    }

    pub fn collectible_count(&self) -> usize {
        self.collectibles().count()
    }

    pub fn enemy_mut(&mut self, entity: Entity) -> Option<&mut Enemy> {
        self.world.get_component_mut::<Enemy>(entity)
    }

    /// Enemies patrol, collectibles bob on the shared clock.
    pub fn update(&mut self, dt: f32, sim_time: f32) {
        if let Some(enemies) = self.world.query_mut::<Enemy>() {
            for (_, enemy) in enemies.iter_mut() {
                enemy.update(dt);
            }
        }
        if let Some(collectibles) = self.world.query_mut::<Collectible>() {
            for (_, collectible) in collectibles.iter_mut() {
                collectible.update(sim_time);
            }
        }
    }

    pub fn collectibles_touching(&self, bounds: &Aabb) -> Vec<Entity> {
        self.collectibles()
            .filter(|(_, c)| !c.is_collected() && c.bounds().overlaps(bounds))
            .map(|(entity, _)| entity)
            .collect()
    }

    /// Collects and removes the entity from the live set.
    /// `None` if it was already gone.
    pub fn collect(&mut self, entity: Entity) -> Option<u32> {
        let value = self.world.get_component_mut::<Collectible>(entity)?.collect();
        self.world.despawn(entity);
        Some(value)
    }

    /// True if any active enemy overlaps `bounds`.
    pub fn enemy_touching(&self, bounds: &Aabb) -> bool {
        self.enemies()
            .any(|(_, enemy)| enemy.active && enemy.bounds().overlaps(bounds))
    }
}
