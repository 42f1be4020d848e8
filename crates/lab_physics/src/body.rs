// crates/lab_physics/src/body.rs
use glam::Vec2;
use lab_shared::Aabb;

/// A moving rectangle with its own fall-speed cap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub max_fall_speed: f32,
    pub grounded: bool,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2, max_fall_speed: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            max_fall_speed,
            grounded: false,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}
