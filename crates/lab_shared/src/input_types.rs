// crates/lab_shared/src/input_types.rs
//! Compact input types passed from the host to the simulation once per step.

/// Stable integer ID for actions.
pub type ActionId = u32;
pub const ACTION_NOT_FOUND: ActionId = u32::MAX;

/// Actions the simulation understands. The host registers these first so the
/// IDs it hands out line up with the constants below.
pub mod canonical_actions {
    use super::ActionId;

    pub const MOVE_LEFT: ActionId = 0;
    pub const MOVE_RIGHT: ActionId = 1;
    pub const JUMP: ActionId = 2;
    pub const RESTART: ActionId = 3;

    pub const NAMES: [(&str, ActionId); 4] = [
        ("MoveLeft", MOVE_LEFT),
        ("MoveRight", MOVE_RIGHT),
        ("Jump", JUMP),
        ("Restart", RESTART),
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InputState {
    /// Bitmask for up to 64 digital actions.
    pub digital_mask: u64,
}

impl InputState {
    pub const fn empty() -> Self {
        Self { digital_mask: 0 }
    }

    /// Builds a state with every listed action held.
    pub fn with(actions: &[ActionId]) -> Self {
        let mut state = Self::empty();
        for &action in actions {
            state.set(action, true);
        }
        state
    }

    /// Safe check; returns false for out-of-range ids (including ACTION_NOT_FOUND).
    pub fn is_active(&self, action_id: ActionId) -> bool {
        if (action_id as usize) >= 64 {
            return false;
        }
        (self.digital_mask & (1u64 << action_id)) != 0
    }

    /// Out-of-range ids are ignored.
    pub fn set(&mut self, action_id: ActionId, active: bool) {
        if (action_id as usize) >= 64 {
            return;
        }
        if active {
            self.digital_mask |= 1u64 << action_id;
        } else {
            self.digital_mask &= !(1u64 << action_id);
        }
    }

    /// Actions active now that were not active in `previous`.
    pub fn pressed_since(&self, previous: &InputState) -> InputState {
        InputState {
            digital_mask: self.digital_mask & !previous.digital_mask,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.digital_mask == 0
    }
}

#[cfg(test)]
mod tests {
    use super::canonical_actions::*;
    use super::*;

    #[test]
    fn set_and_clear_bits() {
        let mut state = InputState::empty();
        state.set(JUMP, true);
        assert!(state.is_active(JUMP));
        assert!(!state.is_active(MOVE_LEFT));

        state.set(JUMP, false);
        assert!(state.is_empty());
    }

    #[test]
    fn out_of_range_ids_are_inert() {
        let mut state = InputState::empty();
        state.set(ACTION_NOT_FOUND, true);
        state.set(64, true);
        assert!(state.is_empty());
        assert!(!state.is_active(ACTION_NOT_FOUND));
    }

    #[test]
    fn rising_edges_only() {
        let before = InputState::with(&[MOVE_RIGHT, JUMP]);
        let now = InputState::with(&[MOVE_RIGHT, JUMP, RESTART]);
        let edges = now.pressed_since(&before);
        assert!(edges.is_active(RESTART));
        assert!(!edges.is_active(JUMP));
        assert!(!edges.is_active(MOVE_RIGHT));
    }
}
