// crates/lab_runner/src/main.rs

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use lab_core::{logging, scene, App, AppConfig, CoreError, RunSummary};
use lab_game::LevelDesc;
use tracing::{error, info, warn};

/// Headless Yellow Lab runner
#[derive(Debug, Parser)]
#[command(version, about = "Yellow Lab platformer simulation", long_about = None)]
struct Cli {
    /// Level file (RON). The built-in level is used without it
    #[arg(short = 'l', long = "level", value_name = "LEVEL_FILE")]
    level: Option<PathBuf>,

    /// Game config file (RON)
    #[arg(short = 'c', long = "config", value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Where the best score is kept. Kept in memory without it
    #[arg(short = 's', long = "score-file", value_name = "SCORE_FILE")]
    score_file: Option<PathBuf>,

    /// Stop after this many frames
    #[arg(short = 'n', long = "frames", value_name = "FRAMES")]
    frames: Option<u64>,

    /// Input script, e.g. "right*30,right+jump,idle*10"
    #[arg(long = "script", value_name = "SCRIPT")]
    script: Option<String>,

    /// Fixed frame time in milliseconds instead of the wall clock
    #[arg(long = "frame-ms", value_name = "MS")]
    frame_ms: Option<f32>,

    /// Print an ASCII frame every N frames
    #[arg(long = "ascii-every", value_name = "N")]
    ascii_every: Option<u64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long = "log", value_name = "FILTER", default_value_t = String::from("info"))]
    log: String,

    /// Write the built-in level to this file and exit
    #[arg(long = "dump-level", value_name = "PATH")]
    dump_level: Option<PathBuf>,
}

impl Cli {
    fn app_config(self) -> AppConfig {
        AppConfig {
            level: self.level,
            config: self.config,
            score_file: self.score_file,
            frames: self.frames,
            script: self.script,
            frame_ms: self.frame_ms,
            ascii_every: self.ascii_every,
            ..AppConfig::default()
        }
    }
}

fn run(cli: Cli) -> Result<RunSummary, CoreError> {
    let running = Arc::new(AtomicBool::new(true));
    {
        let running = Arc::clone(&running);
        let handler = ctrlc::set_handler(move || {
            info!("Captured ctrl-C, stopping after this frame...");
            running.store(false, Ordering::SeqCst);
        });
        if let Err(e) = handler {
            warn!("Ctrl-C handler not installed: {e}");
        }
    }

    let mut app = App::new(cli.app_config())?;
    app.run(&running)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(&cli.log);
    info!("Got args: '{:?}'.", cli);

    if let Some(path) = &cli.dump_level {
        return match scene::save_level(path, &LevelDesc::yellow_lab()) {
            Ok(()) => {
                info!(path = %path.display(), "Built-in level written");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    match run(cli) {
        Ok(summary) => {
            println!(
                "{:?} after {} frames ({} steps). Score: {}  Best: {}",
                summary.state, summary.frames, summary.steps, summary.score, summary.best
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
