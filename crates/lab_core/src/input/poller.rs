// crates/lab_core/src/input/poller.rs

use lab_shared::{canonical_actions, ActionId, InputState};

use crate::input::InputMap;

/// Low-level collector of held keys. Keeps raw device state out of `App`.
#[derive(Default, Clone, Debug)]
pub struct KeyboardState {
    active_keys: Vec<String>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        if !self.is_key_active(key) {
            self.active_keys.push(key.to_string());
        }
    }

    pub fn release(&mut self, key: &str) {
        self.active_keys.retain(|k| k != key);
    }

    pub fn release_all(&mut self) {
        self.active_keys.clear();
    }

    /// Replaces the held set wholesale (scripted input).
    pub fn set_held<'a>(&mut self, keys: impl IntoIterator<Item = &'a str>) {
        self.release_all();
        for key in keys {
            self.press(key);
        }
    }

    pub fn is_key_active(&self, key: &str) -> bool {
        self.active_keys.iter().any(|k| k == key)
    }

    /// Held keys mapped through `input_map`. Unbound keys are ignored.
    pub fn resolve(&self, input_map: &InputMap) -> InputState {
        let mut state = InputState::empty();
        for key in &self.active_keys {
            if let Some(action) = input_map.map_key(key) {
                state.set(action, true);
            }
        }
        state
    }
}

/// Turns held state into what the simulation sees: movement stays
/// level-triggered, jump and restart fire once per press.
///
/// A press stays pending until a simulation step consumes it, so host
/// frames that run no step never swallow it.
#[derive(Clone, Debug)]
pub struct InputTracker {
    previous: InputState,
    edge_triggered: InputState,
    pending: InputState,
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new(&[canonical_actions::JUMP, canonical_actions::RESTART])
    }
}

impl InputTracker {
    pub fn new(edge_actions: &[ActionId]) -> Self {
        Self {
            previous: InputState::empty(),
            edge_triggered: InputState::with(edge_actions),
            pending: InputState::empty(),
        }
    }

    /// Call once per host frame with the held state.
    pub fn resolve(&mut self, held: InputState) -> InputState {
        let pressed = held.pressed_since(&self.previous);
        self.previous = held;

        let level = held.digital_mask & !self.edge_triggered.digital_mask;
        self.pending.digital_mask |= pressed.digital_mask & self.edge_triggered.digital_mask;
        InputState {
            digital_mask: level | self.pending.digital_mask,
        }
    }

    /// Call after a step has seen `state`: drops edge-triggered actions from
    /// it and from the pending set so a press acts on one step only.
    pub fn consume_edges(&mut self, state: &mut InputState) {
        state.digital_mask &= !self.edge_triggered.digital_mask;
        self.pending = InputState::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lab_shared::canonical_actions::*;

    fn map() -> InputMap {
        let mut map = InputMap::default();
        map.bind("ArrowRight", MOVE_RIGHT);
        map.bind(" ", JUMP);
        map
    }

    #[test]
    fn keyboard_tracks_held_keys() {
        let mut keyboard = KeyboardState::new();
        keyboard.press("ArrowRight");
        keyboard.press("ArrowRight");
        keyboard.press("q");
        assert_eq!(keyboard.resolve(&map()), InputState::with(&[MOVE_RIGHT]));

        keyboard.release("ArrowRight");
        assert!(keyboard.resolve(&map()).is_empty());
        assert!(keyboard.is_key_active("q"));

        keyboard.set_held(["ArrowRight", " "]);
        assert!(!keyboard.is_key_active("q"));
        assert_eq!(keyboard.resolve(&map()), InputState::with(&[MOVE_RIGHT, JUMP]));
    }

    #[test]
    fn jump_reported_only_on_press_edge() {
        let mut tracker = InputTracker::default();
        let held = InputState::with(&[MOVE_RIGHT, JUMP]);

        let step = |tracker: &mut InputTracker, held: InputState| {
            let mut seen = tracker.resolve(held);
            let before = seen;
            tracker.consume_edges(&mut seen);
            before
        };

        assert_eq!(step(&mut tracker, held), held);
        assert_eq!(step(&mut tracker, held), InputState::with(&[MOVE_RIGHT]));

        step(&mut tracker, InputState::with(&[MOVE_RIGHT]));
        assert_eq!(step(&mut tracker, held), held);
    }

    #[test]
    fn unconsumed_press_carries_to_the_next_frame() {
        let mut tracker = InputTracker::default();

        // Pressed and released between two steps.
        assert_eq!(tracker.resolve(InputState::with(&[JUMP])), InputState::with(&[JUMP]));
        assert_eq!(tracker.resolve(InputState::empty()), InputState::with(&[JUMP]));

        let mut seen = tracker.resolve(InputState::with(&[MOVE_LEFT]));
        assert_eq!(seen, InputState::with(&[MOVE_LEFT, JUMP]));
        tracker.consume_edges(&mut seen);
        assert_eq!(seen, InputState::with(&[MOVE_LEFT]));
        assert_eq!(tracker.resolve(InputState::empty()), InputState::empty());
    }

    #[test]
    fn consume_keeps_movement() {
        let mut tracker = InputTracker::default();
        let mut state = InputState::with(&[MOVE_LEFT, JUMP, RESTART]);
        tracker.consume_edges(&mut state);
        assert_eq!(state, InputState::with(&[MOVE_LEFT]));
    }
}
