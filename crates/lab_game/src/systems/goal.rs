// crates/lab_game/src/systems/goal.rs

use glam::Vec2;
use lab_shared::Aabb;

pub const GOAL_SIZE: Vec2 = Vec2::new(64.0, 64.0);

/// End-of-level trigger. Stateless.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Goal {
    pub pos: Vec2,
}

impl Goal {
    pub const fn new(pos: Vec2) -> Self {
        Self { pos }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, GOAL_SIZE)
    }

    pub fn is_reached_by(&self, bounds: &Aabb) -> bool {
        self.bounds().overlaps(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edge_does_not_trigger() {
        let goal = Goal::new(Vec2::new(2900.0, 436.0));
        assert!(!goal.is_reached_by(&Aabb::new(2852.0, 452.0, 48.0, 48.0)));
        assert!(goal.is_reached_by(&Aabb::new(2853.0, 452.0, 48.0, 48.0)));
    }
}
