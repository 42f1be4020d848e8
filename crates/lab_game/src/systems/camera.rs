// crates/lab_game/src/systems/camera.rs

use glam::Vec2;
use lab_shared::{Aabb, CameraOffset};

use crate::config::CameraConfig;

/// Dead-zone follow camera. `position` is the world-space top-left of the view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    viewport: Vec2,
    position: Vec2,
    dead_zone: Vec2,
    smoothing: f32,
    min: Vec2,
    max: Vec2,
}

impl Camera {
    pub fn new(viewport: Vec2, config: &CameraConfig) -> Self {
        Self {
            viewport,
            position: Vec2::ZERO,
            dead_zone: viewport * config.dead_zone,
            smoothing: config.smoothing,
            min: Vec2::ZERO,
            max: Vec2::splat(f32::INFINITY),
        }
    }

    pub fn set_bounds(&mut self, min: Vec2, max: Vec2) {
        self.min = min;
        self.max = max;
    }

    /// One follow step toward `target`. The target is borrowed per call, never kept.
    pub fn update(&mut self, target: Aabb) {
        let centre = target.center();
        let zone = self.dead_zone();

        // Both sides re-centre the target in the view.
        let recentre = centre - (self.viewport - self.dead_zone) / 2.0 - self.dead_zone / 2.0;

        let desired_x = if centre.x < zone.left() || centre.x > zone.right() {
            recentre.x
        } else {
            self.position.x
        };
        let desired_y = if centre.y < zone.top() || centre.y > zone.bottom() {
            recentre.y
        } else {
            self.position.y
        };

        self.position += (Vec2::new(desired_x, desired_y) - self.position) * self.smoothing;

        // max() last: a world smaller than the viewport pins to `min`.
        self.position = self.position.min(self.max - self.viewport).max(self.min);
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn offset(&self) -> CameraOffset {
        CameraOffset::new(self.position)
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        self.offset().world_to_screen(world)
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        self.offset().screen_to_world(screen)
    }

    /// Dead-zone rectangle in world space, centred on the current view.
    pub fn dead_zone(&self) -> Aabb {
        Aabb::from_pos_size(
            self.position + (self.viewport - self.dead_zone) / 2.0,
            self.dead_zone,
        )
    }

    pub fn reset(&mut self) {
        self.position = self.min;
    }
}
