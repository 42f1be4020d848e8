// crates/lab_core/src/input/config.rs

use lab_shared::canonical_actions;

use crate::input::{ActionRegistry, InputMap};

/// Centralized defaults for input configuration.
pub struct InputDefaults;

impl InputDefaults {
    pub const LEFT_KEYS: [&'static str; 3] = ["ArrowLeft", "a", "A"];
    pub const RIGHT_KEYS: [&'static str; 3] = ["ArrowRight", "d", "D"];
    pub const JUMP_KEYS: [&'static str; 4] = ["ArrowUp", "w", "W", " "];
    pub const RESTART_KEYS: [&'static str; 2] = ["r", "R"];

    /// Registers the canonical actions and their default key bindings.
    ///
    /// Actions are registered first, in canonical order, so the IDs the
    /// registry hands out match `canonical_actions`.
    pub fn setup(registry: &mut ActionRegistry, input_map: &mut InputMap) {
        for (name, expected) in canonical_actions::NAMES {
            let id = registry.register(name);
            // Debug-only to avoid panics in release.
            debug_assert_eq!(id, expected, "action {name} registered out of order");
        }

        let bindings = [
            (canonical_actions::MOVE_LEFT, &Self::LEFT_KEYS[..]),
            (canonical_actions::MOVE_RIGHT, &Self::RIGHT_KEYS[..]),
            (canonical_actions::JUMP, &Self::JUMP_KEYS[..]),
            (canonical_actions::RESTART, &Self::RESTART_KEYS[..]),
        ];
        for (action, keys) in bindings {
            for key in keys {
                input_map.bind(key, action);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lab_shared::canonical_actions::*;

    #[test]
    fn canonical_ids_and_bindings() {
        let mut registry = ActionRegistry::default();
        let mut map = InputMap::default();
        InputDefaults::setup(&mut registry, &mut map);

        assert_eq!(registry.get_id("MoveLeft"), Some(MOVE_LEFT));
        assert_eq!(registry.get_id("Restart"), Some(RESTART));
        assert_eq!(map.map_key("A"), Some(MOVE_LEFT));
        assert_eq!(map.map_key("ArrowRight"), Some(MOVE_RIGHT));
        assert_eq!(map.map_key(" "), Some(JUMP));
        assert_eq!(map.map_key("W"), Some(JUMP));
        assert_eq!(map.map_key("R"), Some(RESTART));
        assert_eq!(map.map_key("ArrowDown"), None);
    }
}
