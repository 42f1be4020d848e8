// crates/lab_physics/src/collision.rs
use lab_shared::Aabb;

use crate::Body;

/// Result of a successful one-way landing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Landing {
    /// Position of the platform in the list that was landed on.
    pub index: usize,
    /// Y that puts the body's bottom exactly on the platform top.
    pub corrected_y: f32,
}

/// Flat ground line used by single-floor levels.
pub fn check_ground_collision(body: &mut Body, ground_level: f32) {
    if body.pos.y + body.size.y > ground_level {
        body.pos.y = ground_level - body.size.y;
        body.vel.y = 0.0;
        body.grounded = true;
    } else {
        body.grounded = false;
    }
}

/// One-way, top-only landing test.
///
/// Only a falling body (`vy > 0`) can land. A platform matches when the body's
/// bottom has reached its top while the body's top is still above it, with
/// strict horizontal overlap. The first match in list order wins.
pub fn check_platform_collision<I>(bounds: Aabb, vy: f32, platforms: I) -> Option<Landing>
where
    I: IntoIterator<Item = Aabb>,
{
    if vy <= 0.0 {
        return None;
    }

    platforms
        .into_iter()
        .enumerate()
        .find(|(_, platform)| {
            bounds.bottom() >= platform.top()
                && bounds.top() < platform.top()
                && bounds.overlaps_x(platform)
        })
        .map(|(index, platform)| Landing {
            index,
            corrected_y: platform.top() - bounds.size.y,
        })
}

/// Applies the landing policy to the body: snap, stop, ground.
/// Without a landing the body is marked airborne and keeps its velocity.
pub fn resolve_platform_landing<I>(body: &mut Body, platforms: I) -> Option<Landing>
where
    I: IntoIterator<Item = Aabb>,
{
    let landing = check_platform_collision(body.bounds(), body.vel.y, platforms);
    match landing {
        Some(hit) => {
            body.pos.y = hit.corrected_y;
            body.vel.y = 0.0;
            body.grounded = true;
        }
        None => body.grounded = false,
    }
    landing
}
