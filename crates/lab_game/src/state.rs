// crates/lab_game/src/state.rs

use glam::Vec2;
use lab_physics::{apply_gravity, integrate_y, resolve_platform_landing};
use lab_shared::{
    canonical_actions, GameState, HudView, InputState, Renderer, Services, SoundEvent,
    SpriteKind, SpriteView,
};
use thiserror::Error;
use tracing::{debug, info, trace};

use crate::config::{ConfigError, FallPolicy, GameConfig};
use crate::level::{Level, LevelDesc, LevelError};
use crate::score::Score;
use crate::systems::camera::Camera;
use crate::systems::player::{Player, PlayerInput};

#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("invalid level: {0}")]
    Level(#[from] LevelError),
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
}

/// One running round: player, level, camera, score and round state.
pub struct Game {
    config: GameConfig,
    level: Level,
    player: Player,
    camera: Camera,
    score: Score,
    state: GameState,
    sim_time: f32,
}

impl Game {
    pub fn new(desc: LevelDesc, config: GameConfig, best: u32) -> Result<Self, GameError> {
        config.validate()?;
        let level = Level::new(desc)?;

        let mut camera = Camera::new(config.viewport, &config.camera);
        camera.set_bounds(Vec2::ZERO, level.world_bounds());

        Ok(Self {
            player: Player::new(level.player_start()),
            config,
            level,
            camera,
            score: Score::new(best),
            state: GameState::Playing,
            sim_time: 0.0,
        })
    }

    /// Advances the round by `dt` seconds. Never fails.
    pub fn update(&mut self, dt: f32, input: &InputState, services: &mut Services<'_>) {
        // Also maps NaN to zero.
        let dt = dt.max(0.0);

        if !self.state.is_playing() {
            if input.is_active(canonical_actions::RESTART) {
                self.reset();
            }
            return;
        }

        self.sim_time += dt;

        if self.player.update(PlayerInput::from_state(input), dt) {
            services.audio.play(SoundEvent::Jump);
            trace!(x = self.player.position().x, "Jump");
        }

        apply_gravity(&mut self.player.body, dt);
        integrate_y(&mut self.player.body, dt);
        resolve_platform_landing(&mut self.player.body, self.level.platform_bounds());

        let fell = self.player.position().y > self.level.world_bounds().y;
        if fell && self.config.fall_policy == FallPolicy::Lose {
            self.finish(GameState::Lost, services);
        } else {
            if fell {
                debug!(start = %self.level.player_start(), "Fell out of the world, respawning");
                self.player.respawn(self.level.player_start());
            }
            self.interact(dt, services);
        }

        // Every ending still gets this step's camera move.
        self.camera.update(self.player.bounds());
    }

    /// Level update, pickups, then enemy and goal checks.
    fn interact(&mut self, dt: f32, services: &mut Services<'_>) {
        self.level.update(dt, self.sim_time);

        let bounds = self.player.bounds();
        for entity in self.level.collectibles_touching(&bounds) {
            if let Some(points) = self.level.collect(entity) {
                self.score.add(points);
                services.audio.play(SoundEvent::Collect);
                debug!(?entity, points, total = self.score.current, "Collected");
            }
        }

        if self.level.enemy_touching(&bounds) {
            self.finish(GameState::Lost, services);
        } else if self.level.goal().is_reached_by(&bounds) {
            self.finish(GameState::Won, services);
        }
    }

    fn finish(&mut self, state: GameState, services: &mut Services<'_>) {
        self.state = state;
        services.audio.play(if state.is_won() {
            SoundEvent::Win
        } else {
            SoundEvent::Lose
        });

        info!(?state, score = self.score.current, time = self.sim_time, "Round over");

        if self.score.commit_best() {
            info!(best = self.score.best, "New best score");
            services.scores.save(self.score.best);
        }
    }

    /// Back to the start of the level. Only `best` survives.
    pub fn reset(&mut self) {
        self.state = GameState::Playing;
        self.score.reset();
        self.level.reset();
        self.player.respawn(self.level.player_start());
        self.camera.reset();
        self.sim_time = 0.0;
        debug!("Round reset");
    }

    /// Draws the scene back to front, then the HUD.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        let camera = self.camera.offset();
        renderer.begin_frame(camera);

        for platform in self.level.platforms() {
            let sprite = SpriteView {
                bounds: platform.bounds(),
                kind: SpriteKind::Platform(platform.kind),
            };
            renderer.draw_sprite(&sprite, camera);
        }

        for (_, collectible) in self.level.collectibles() {
            if collectible.is_collected() {
                continue;
            }
            let sprite = SpriteView {
                bounds: collectible.render_bounds(),
                kind: SpriteKind::Collectible(collectible.kind),
            };
            renderer.draw_sprite(&sprite, camera);
        }

        for (_, enemy) in self.level.enemies().filter(|(_, e)| e.active) {
            let sprite = SpriteView {
                bounds: enemy.bounds(),
                kind: SpriteKind::Enemy(enemy.kind),
            };
            renderer.draw_sprite(&sprite, camera);
        }

        let goal = SpriteView {
            bounds: self.level.goal().bounds(),
            kind: SpriteKind::Goal,
        };
        renderer.draw_sprite(&goal, camera);

        let player = SpriteView {
            bounds: self.player.bounds(),
            kind: SpriteKind::Player {
                pose: self.player.pose(),
                facing: self.player.facing,
                frame: self.player.frame(),
            },
        };
        renderer.draw_sprite(&player, camera);

        renderer.draw_hud(&HudView {
            score: self.score.current,
            best: self.score.best,
            state: self.state,
        });
        renderer.end_frame();
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    pub fn is_lost(&self) -> bool {
        self.state.is_lost()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Direct access for hosts and tests that stage a situation.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn sim_time(&self) -> f32 {
        self.sim_time
    }
}
