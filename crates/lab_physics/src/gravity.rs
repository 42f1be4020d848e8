// crates/lab_physics/src/gravity.rs
use crate::Body;

/// Downward acceleration in pixels/sec².
pub const GRAVITY: f32 = 1200.0;

/// Accelerates the body downward and caps the fall speed.
/// Upward (negative) velocity is never capped.
pub fn apply_gravity(body: &mut Body, dt: f32) {
    body.vel.y += GRAVITY * dt;

    if body.vel.y > body.max_fall_speed {
        body.vel.y = body.max_fall_speed;
    }
}

pub fn integrate_x(body: &mut Body, dt: f32) {
    body.pos.x += body.vel.x * dt;
}

pub fn integrate_y(body: &mut Body, dt: f32) {
    body.pos.y += body.vel.y * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec2;

    fn body() -> Body {
        Body::new(Vec2::ZERO, Vec2::splat(48.0), 600.0)
    }

    #[test]
    fn one_frame_of_gravity() {
        let mut b = body();
        apply_gravity(&mut b, 1.0 / 60.0);
        assert_relative_eq!(b.vel.y, 20.0, epsilon = 1e-4);
    }

    #[test]
    fn fall_speed_never_exceeds_cap_and_never_decreases() {
        let mut b = body();
        let mut previous = b.vel.y;
        for dt in [0.0, 0.016, 0.1, 0.25, 1.0, 3.0, 0.001] {
            apply_gravity(&mut b, dt);
            assert!(b.vel.y <= b.max_fall_speed);
            assert!(b.vel.y >= previous);
            previous = b.vel.y;
        }
        assert_eq!(b.vel.y, 600.0);
    }

    #[test]
    fn upward_speed_is_not_capped() {
        let mut b = body();
        b.vel.y = -900.0;
        apply_gravity(&mut b, 0.01);
        assert_relative_eq!(b.vel.y, -888.0, epsilon = 1e-3);
    }

    #[test]
    fn axes_integrate_independently() {
        let mut b = body();
        b.vel = Vec2::new(300.0, -120.0);
        integrate_x(&mut b, 0.5);
        assert_eq!(b.pos, Vec2::new(150.0, 0.0));
        integrate_y(&mut b, 0.5);
        assert_eq!(b.pos, Vec2::new(150.0, -60.0));
    }
}
