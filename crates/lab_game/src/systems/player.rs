// crates/lab_game/src/systems/player.rs

use glam::Vec2;
use lab_physics::Body;
use lab_shared::{canonical_actions, Aabb, Facing, InputState, Pose};

use super::animation::Animator;

pub const PLAYER_SIZE: Vec2 = Vec2::new(48.0, 48.0);
pub const MOVE_SPEED: f32 = 300.0;
/// Initial vertical velocity of a jump (negative is up).
pub const JUMP_FORCE: f32 = -500.0;
pub const MAX_FALL_SPEED: f32 = 600.0;

/// The three inputs the player reacts to, sampled once per step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl PlayerInput {
    pub fn from_state(state: &InputState) -> Self {
        Self {
            left: state.is_active(canonical_actions::MOVE_LEFT),
            right: state.is_active(canonical_actions::MOVE_RIGHT),
            jump: state.is_active(canonical_actions::JUMP),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    pub body: Body,
    pub facing: Facing,
    animator: Animator,
}

impl Player {
    pub fn new(start: Vec2) -> Self {
        Self {
            body: Body::new(start, PLAYER_SIZE, MAX_FALL_SPEED),
            facing: Facing::Right,
            animator: Animator::new(),
        }
    }

    /// Horizontal control, jump and horizontal integration for one step.
    /// Gravity and landing are the caller's job. Returns true on takeoff.
    pub fn update(&mut self, input: PlayerInput, dt: f32) -> bool {
        // Left wins when both are held.
        if input.left {
            self.body.vel.x = -MOVE_SPEED;
            self.facing = Facing::Left;
        } else if input.right {
            self.body.vel.x = MOVE_SPEED;
            self.facing = Facing::Right;
        } else {
            self.body.vel.x = 0.0;
        }

        let jumped = input.jump && self.body.grounded;
        if jumped {
            self.body.vel.y = JUMP_FORCE;
            self.body.grounded = false;
        }

        lab_physics::integrate_x(&mut self.body, dt);

        self.animator.update(self.pose(), dt);
        jumped
    }

    pub fn pose(&self) -> Pose {
        if !self.body.grounded {
            if self.body.vel.y < 0.0 {
                Pose::Jump
            } else {
                Pose::Fall
            }
        } else if self.body.vel.x != 0.0 {
            Pose::Run
        } else {
            Pose::Idle
        }
    }

    pub fn respawn(&mut self, pos: Vec2) {
        self.body.pos = pos;
        self.body.vel = Vec2::ZERO;
        self.body.grounded = false;
        self.facing = Facing::Right;
        self.animator.reset();
    }

    pub fn bounds(&self) -> Aabb {
        self.body.bounds()
    }

    pub fn position(&self) -> Vec2 {
        self.body.pos
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.vel
    }

    pub fn is_grounded(&self) -> bool {
        self.body.grounded
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn frame(&self) -> u32 {
        self.animator.frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lab_shared::canonical_actions::*;

    const DT: f32 = 1.0 / 60.0;

    fn grounded_player() -> Player {
        let mut player = Player::new(Vec2::new(50.0, 452.0));
        player.body.grounded = true;
        player
    }

    #[test]
    fn input_is_read_from_canonical_actions() {
        let input = PlayerInput::from_state(&InputState::with(&[MOVE_RIGHT, JUMP]));
        assert_eq!(
            input,
            PlayerInput {
                left: false,
                right: true,
                jump: true
            }
        );
        assert_eq!(PlayerInput::from_state(&InputState::with(&[RESTART])), PlayerInput::default());
    }

    #[test]
    fn left_wins_over_right() {
        let mut player = grounded_player();
        player.update(
            PlayerInput {
                left: true,
                right: true,
                jump: false,
            },
            DT,
        );
        assert_eq!(player.body.vel.x, -MOVE_SPEED);
        assert_eq!(player.facing, Facing::Left);
        assert!(player.position().x < 50.0);
    }

    #[test]
    fn releasing_stops_but_keeps_facing() {
        let mut player = grounded_player();
        player.update(PlayerInput { left: true, ..Default::default() }, DT);
        player.update(PlayerInput::default(), DT);
        assert_eq!(player.body.vel.x, 0.0);
        assert_eq!(player.facing, Facing::Left);
        assert_eq!(player.pose(), Pose::Idle);
    }

    #[test]
    fn jump_only_from_ground() {
        let mut player = grounded_player();
        let jump = PlayerInput { jump: true, ..Default::default() };

        assert!(player.update(jump, DT));
        assert_eq!(player.body.vel.y, JUMP_FORCE);
        assert!(!player.is_grounded());
        assert_eq!(player.pose(), Pose::Jump);

        player.body.vel.y = -200.0;
        assert!(!player.update(jump, DT), "no double jump");
        assert_eq!(player.body.vel.y, -200.0);
    }

    #[test]
    fn pose_follows_motion() {
        let mut player = grounded_player();
        assert_eq!(player.pose(), Pose::Idle);

        player.update(PlayerInput { right: true, ..Default::default() }, DT);
        assert_eq!(player.pose(), Pose::Run);
        assert_eq!(player.animator().pose(), Pose::Run);

        player.body.grounded = false;
        player.body.vel.y = 0.0;
        assert_eq!(player.pose(), Pose::Fall);
        player.body.vel.y = -1.0;
        assert_eq!(player.pose(), Pose::Jump);
    }

    #[test]
    fn respawn_resets_motion() {
        let mut player = grounded_player();
        player.update(PlayerInput { left: true, jump: true, right: false }, DT);
        player.respawn(Vec2::new(50.0, 452.0));

        assert_eq!(player.position(), Vec2::new(50.0, 452.0));
        assert_eq!(player.velocity(), Vec2::ZERO);
        assert!(!player.is_grounded());
        assert_eq!(player.facing, Facing::Right);
        assert_eq!(player.frame(), 0);
    }
}
