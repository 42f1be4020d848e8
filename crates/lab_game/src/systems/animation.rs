// crates/lab_game/src/systems/animation.rs

use lab_shared::Pose;

/// Seconds each frame of a multi-frame pose stays on screen.
pub const FRAME_DURATION: f32 = 0.1;

/// Atlas frames for each pose.
pub fn frames(pose: Pose) -> &'static [u32] {
    match pose {
        Pose::Idle => &[0],
        Pose::Run => &[1, 2, 3, 4],
        Pose::Jump => &[5],
        Pose::Fall => &[6],
    }
}

/// Steps through the atlas frames of the current pose on the simulation clock.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Animator {
    pose: Pose,
    index: usize,
    timer: f32,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches pose if it changed, then advances time.
    pub fn update(&mut self, pose: Pose, dt: f32) {
        self.set_pose(pose);

        let sequence = frames(self.pose);
        if sequence.len() > 1 {
            self.timer += dt;
            if self.timer >= FRAME_DURATION {
                self.timer = 0.0;
                self.index = (self.index + 1) % sequence.len();
            }
        }
    }

    pub fn set_pose(&mut self, pose: Pose) {
        if self.pose != pose {
            self.pose = pose;
            self.index = 0;
            self.timer = 0.0;
        }
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Current atlas frame.
    pub fn frame(&self) -> u32 {
        frames(self.pose)[self.index]
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
