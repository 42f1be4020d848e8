// crates/lab_core/src/engine_loop.rs

use std::time::Instant;

/// Fixed-step timing knobs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineLoopConfig {
    pub sim_dt: f32,
    pub max_steps_per_frame: u32,
    /// Frame deltas above this are clamped (breakpoints, stalls).
    pub max_frame_dt: f32,
}

impl Default for EngineLoopConfig {
    fn default() -> Self {
        Self {
            sim_dt: 1.0 / 60.0,
            max_steps_per_frame: 5,
            max_frame_dt: 0.25,
        }
    }
}

/// Encapsulates fixed-timestep simulation bookkeeping (time, accumulator, limits).
pub struct EngineLoop {
    last_frame_time: Instant,
    sim_accumulator: f32,
    config: EngineLoopConfig,
}

impl EngineLoop {
    pub fn new(config: EngineLoopConfig) -> Self {
        Self {
            last_frame_time: Instant::now(),
            sim_accumulator: 0.0,
            config,
        }
    }

    pub fn sim_dt(&self) -> f32 {
        self.config.sim_dt
    }

    /// Update the frame timer and return the clamped frame delta.
    pub fn tick_timer(&mut self) -> f32 {
        let now = Instant::now();
        let frame_dt = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        self.clamp_frame(frame_dt)
    }

    /// Same clamp `tick_timer` applies, for hosts that supply their own deltas.
    pub fn clamp_frame(&self, frame_dt: f32) -> f32 {
        frame_dt.clamp(0.0, self.config.max_frame_dt)
    }

    /// Runs fixed-timestep steps until the accumulator is caught up or the
    /// per-frame cap is hit. A backlog still left at the cap is dropped so a
    /// saturated host never chases it. Returns the number of steps run.
    pub fn update_simulation(&mut self, frame_dt: f32, mut step: impl FnMut(f32)) -> u32 {
        self.sim_accumulator += frame_dt;

        let sim_dt = self.config.sim_dt;
        let mut steps = 0;
        while self.sim_accumulator >= sim_dt && steps < self.config.max_steps_per_frame {
            step(sim_dt);
            self.sim_accumulator -= sim_dt;
            steps += 1;
        }

        if steps == self.config.max_steps_per_frame && self.sim_accumulator >= sim_dt {
            tracing::trace!(dropped = self.sim_accumulator, "Simulation backlog dropped");
            self.sim_accumulator = 0.0;
        }
        steps
    }
}
