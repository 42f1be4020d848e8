// crates/lab_game/src/content.rs
// Built-in level, used when no level file is given.

use glam::Vec2;
use lab_shared::{CollectibleKind, EnemyKind, PlatformKind};

use crate::level::{LevelDesc, Platform};
use crate::systems::collectible::CollectibleSpawn;
use crate::systems::enemy::EnemySpawn;

use CollectibleKind::{TennisBall, Treat};
use PlatformKind::{Floating, Ground, Obstacle};

pub const WORLD_WIDTH: f32 = 3000.0;
pub const WORLD_HEIGHT: f32 = 600.0;

const PLATFORMS: [Platform; 24] = [
    // Ground with gaps.
    Platform::new(0.0, 500.0, 400.0, 100.0, Ground),
    Platform::new(500.0, 500.0, 300.0, 100.0, Ground),
    Platform::new(900.0, 500.0, 250.0, 100.0, Ground),
    Platform::new(1250.0, 500.0, 500.0, 100.0, Ground),
    Platform::new(1850.0, 500.0, 200.0, 100.0, Ground),
    Platform::new(2150.0, 500.0, 180.0, 100.0, Ground),
    Platform::new(2450.0, 500.0, 550.0, 100.0, Ground),
    // Low tier
    Platform::new(250.0, 380.0, 120.0, 20.0, Floating),
    Platform::new(420.0, 350.0, 100.0, 20.0, Floating),
    Platform::new(650.0, 380.0, 140.0, 20.0, Floating),
    // Mid tier
    Platform::new(1000.0, 300.0, 100.0, 20.0, Floating),
    Platform::new(1180.0, 280.0, 90.0, 20.0, Floating),
    Platform::new(1400.0, 250.0, 120.0, 20.0, Floating),
    // High tier
    Platform::new(1650.0, 220.0, 100.0, 20.0, Floating),
    Platform::new(1850.0, 200.0, 80.0, 20.0, Floating),
    // Obstacles
    Platform::new(2050.0, 420.0, 60.0, 20.0, Obstacle),
    Platform::new(2180.0, 380.0, 60.0, 20.0, Obstacle),
    Platform::new(2300.0, 340.0, 60.0, 20.0, Obstacle),
    Platform::new(2600.0, 180.0, 150.0, 20.0, Floating),
    Platform::new(2350.0, 450.0, 80.0, 15.0, Obstacle),
    Platform::new(800.0, 400.0, 110.0, 20.0, Floating),
    Platform::new(1550.0, 380.0, 100.0, 20.0, Floating),
    Platform::new(2700.0, 320.0, 90.0, 20.0, Floating),
    Platform::new(2850.0, 280.0, 100.0, 20.0, Floating),
];

// Treats rest just above platform tops; balls sit on the harder platforms.
const COLLECTIBLES: [CollectibleSpawn; 12] = [
    CollectibleSpawn::new(150.0, 460.0, Treat),
    CollectibleSpawn::new(300.0, 355.0, Treat),
    CollectibleSpawn::new(460.0, 320.0, TennisBall),
    CollectibleSpawn::new(710.0, 355.0, Treat),
    CollectibleSpawn::new(1040.0, 275.0, Treat),
    CollectibleSpawn::new(1215.0, 250.0, TennisBall),
    CollectibleSpawn::new(1450.0, 225.0, Treat),
    CollectibleSpawn::new(1690.0, 195.0, Treat),
    CollectibleSpawn::new(1880.0, 170.0, TennisBall),
    CollectibleSpawn::new(2230.0, 460.0, Treat),
    CollectibleSpawn::new(2665.0, 150.0, TennisBall),
    CollectibleSpawn::new(2890.0, 255.0, Treat),
];

const ENEMIES: [EnemySpawn; 4] = [
    EnemySpawn::new(600.0, 452.0, EnemyKind::Squirrel).with_patrol(500.0, 750.0),
    EnemySpawn::new(1000.0, 452.0, EnemyKind::Cat).with_patrol(920.0, 1100.0),
    EnemySpawn::new(1500.0, 452.0, EnemyKind::Cat).with_patrol(1300.0, 1700.0),
    EnemySpawn::new(2600.0, 452.0, EnemyKind::Squirrel).with_patrol(2500.0, 2800.0),
];

impl LevelDesc {
    /// The stock Yellow Lab level: a 3000x600 run with gaps, floating tiers
    /// and obstacle steps, ending at a goal on the last ground section.
    pub fn yellow_lab() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            platforms: PLATFORMS.to_vec(),
            collectibles: COLLECTIBLES.to_vec(),
            enemies: ENEMIES.to_vec(),
            goal: Vec2::new(2900.0, 436.0),
            player_start: Vec2::new(50.0, 452.0),
        }
    }
}

impl Default for LevelDesc {
    fn default() -> Self {
        Self::yellow_lab()
    }
}
