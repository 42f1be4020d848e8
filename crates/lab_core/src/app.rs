// crates/lab_core/src/app.rs

use std::collections::VecDeque;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use lab_game::Game;
use lab_shared::{GameState, InputState, Renderer, ScoreStore, Services, SoundEvent};
use tracing::{debug, info, warn};

use crate::audio::AudioQueue;
use crate::engine_loop::{EngineLoop, EngineLoopConfig};
use crate::error::CoreError;
use crate::input::{ActionRegistry, InputDefaults, InputMap, InputScript, InputTracker, KeyboardState};
use crate::renderer::AsciiRenderer;
use crate::scene;
use crate::score_store::{FileScoreStore, MemoryScoreStore};

const ASCII_COLS: usize = 80;
const ASCII_ROWS: usize = 30;
/// Most recent sounds kept for the run summary.
const SOUND_HISTORY: usize = 64;

/// Everything the host needs to start a run.
#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub level: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub score_file: Option<PathBuf>,
    /// Stop after this many frames. Defaults to the script length when a
    /// script is given, otherwise runs until stopped.
    pub frames: Option<u64>,
    pub script: Option<String>,
    /// Fixed frame delta in milliseconds. Without it the wall clock is used.
    pub frame_ms: Option<f32>,
    /// Print an ASCII frame every N frames.
    pub ascii_every: Option<u64>,
    pub engine: EngineLoopConfig,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub steps: u64,
    pub state: GameState,
    pub score: u32,
    pub best: u32,
    /// The last sounds played, oldest first. At most `SOUND_HISTORY`.
    pub sounds: Vec<SoundEvent>,
    pub sounds_played: u64,
}

/// Headless host: owns the game, its collaborators and the frame loop.
pub struct App {
    game: Game,
    engine_loop: EngineLoop,
    registry: ActionRegistry,
    input_map: InputMap,
    keyboard: KeyboardState,
    tracker: InputTracker,
    script: Option<InputScript>,
    audio: AudioQueue,
    scores: Box<dyn ScoreStore>,
    ascii: AsciiRenderer,
    out: Box<dyn Write>,
    config: AppConfig,
    sounds: VecDeque<SoundEvent>,
    sounds_played: u64,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, CoreError> {
        let desc = scene::load_level(config.level.as_deref())?;
        let game_config = scene::load_config(config.config.as_deref())?;
        let script = config.script.as_deref().map(str::parse::<InputScript>).transpose()?;

        let mut scores: Box<dyn ScoreStore> = match &config.score_file {
            Some(path) => Box::new(FileScoreStore::new(path)),
            None => Box::new(MemoryScoreStore::default()),
        };
        let best = scores.load();

        let game = Game::new(desc, game_config, best)?;

        let mut registry = ActionRegistry::default();
        let mut input_map = InputMap::default();
        InputDefaults::setup(&mut registry, &mut input_map);

        info!(best, scripted = script.is_some(), "App ready");

        Ok(Self {
            ascii: AsciiRenderer::new(game_config.viewport, ASCII_COLS, ASCII_ROWS),
            engine_loop: EngineLoop::new(config.engine),
            game,
            registry,
            input_map,
            keyboard: KeyboardState::new(),
            tracker: InputTracker::default(),
            script,
            audio: AudioQueue::new(),
            scores,
            out: Box::new(std::io::stdout()),
            config,
            sounds: VecDeque::with_capacity(SOUND_HISTORY),
            sounds_played: 0,
        })
    }

    /// Redirects ASCII frames (stdout by default).
    pub fn with_output(mut self, out: Box<dyn Write>) -> Self {
        self.out = out;
        self
    }

    /// Replaces the score store chosen from the config.
    pub fn with_score_store(mut self, scores: Box<dyn ScoreStore>) -> Self {
        self.scores = scores;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn keyboard_mut(&mut self) -> &mut KeyboardState {
        &mut self.keyboard
    }

    fn frame_limit(&self) -> Option<u64> {
        self.config
            .frames
            .or_else(|| self.script.as_ref().map(InputScript::total_frames))
    }

    /// Runs frames until `running` is cleared or the frame limit is hit.
    pub fn run(&mut self, running: &AtomicBool) -> Result<RunSummary, CoreError> {
        let limit = self.frame_limit();
        let mut frames = 0u64;
        let mut steps = 0u64;

        while running.load(Ordering::SeqCst) {
            if limit.is_some_and(|limit| frames >= limit) {
                break;
            }

            let frame_dt = match self.config.frame_ms {
                Some(ms) => self.engine_loop.clamp_frame(ms / 1000.0),
                None => {
                    std::thread::sleep(Duration::from_secs_f32(self.engine_loop.sim_dt()));
                    self.engine_loop.tick_timer()
                }
            };

            steps += u64::from(self.frame(frame_dt));
            frames += 1;

            if let Some(every) = self.config.ascii_every.filter(|n| *n > 0) {
                if frames % every == 0 {
                    self.print_ascii(frames);
                }
            }
        }

        let score = self.game.score();
        let summary = RunSummary {
            frames,
            steps,
            state: self.game.state(),
            score: score.current,
            best: score.best,
            sounds: self.sounds.iter().copied().collect(),
            sounds_played: self.sounds_played,
        };
        info!(
            frames,
            steps,
            state = ?summary.state,
            score = summary.score,
            best = summary.best,
            "Run finished"
        );
        Ok(summary)
    }

    /// One host frame: sample input, run the fixed steps, drain audio.
    /// Returns the number of simulation steps taken.
    pub fn frame(&mut self, frame_dt: f32) -> u32 {
        if let Some(script) = self.script.as_mut() {
            match script.next_frame() {
                Some(keys) => self.keyboard.set_held(keys.iter().map(String::as_str)),
                None => self.keyboard.release_all(),
            }
        }

        let held = self.keyboard.resolve(&self.input_map);
        let mut input: InputState = self.tracker.resolve(held);

        let game = &mut self.game;
        let tracker = &mut self.tracker;
        let mut services = Services::new(&mut self.audio, &mut *self.scores);
        let steps = self.engine_loop.update_simulation(frame_dt, |sim_dt| {
            game.update(sim_dt, &input, &mut services);
            tracker.consume_edges(&mut input);
        });

        for event in self.audio.drain() {
            self.record_sound(event);
        }
        steps
    }

    fn record_sound(&mut self, event: SoundEvent) {
        debug!(?event, "Sound");
        if self.sounds.len() == SOUND_HISTORY {
            self.sounds.pop_front();
        }
        self.sounds.push_back(event);
        self.sounds_played += 1;
    }

    fn print_ascii(&mut self, frame: u64) {
        self.game.render(&mut self.ascii);
        let result = writeln!(self.out, "--- frame {frame} ---\n{}", self.ascii.frame())
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!("Could not write ASCII frame: {e}");
        }
    }

    /// Draws the current state with any renderer.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        self.game.render(renderer);
    }
}
