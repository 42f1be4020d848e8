// crates/lab_core/src/lib.rs

// Host modules
pub mod app;
pub mod audio;
pub mod engine_loop;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod scene;
pub mod score_store;

mod error;

// Re-export App so the runner can find it easily
pub use app::{App, AppConfig, RunSummary};
pub use audio::AudioQueue;
pub use engine_loop::{EngineLoop, EngineLoopConfig};
pub use error::CoreError;
pub use renderer::{AsciiRenderer, FrameRecorder};
pub use score_store::{FileScoreStore, MemoryScoreStore};
