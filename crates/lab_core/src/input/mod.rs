// crates/lab_core/src/input/mod.rs
pub mod config;
pub mod map;
pub mod poller;
pub mod registry;
pub mod script;

// Re-export core types to keep the API at `crate::input::ActionRegistry`
pub use config::InputDefaults;
pub use map::InputMap;
pub use poller::{InputTracker, KeyboardState};
pub use registry::ActionRegistry;
pub use script::InputScript;
