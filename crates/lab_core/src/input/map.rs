// crates/lab_core/src/input/map.rs
use std::collections::HashMap;

use lab_shared::ActionId;

/// Key name to action. Key names follow the browser `KeyboardEvent.key`
/// spelling ("ArrowLeft", "a", " ") and are case sensitive.
#[derive(Default, Clone, Debug)]
pub struct InputMap {
    key_bindings: HashMap<String, ActionId>,
}

impl InputMap {
    /// A key drives one action; rebinding replaces the old one.
    pub fn bind(&mut self, key: &str, action: ActionId) {
        self.key_bindings.insert(key.to_string(), action);
    }

    pub fn map_key(&self, key: &str) -> Option<ActionId> {
        self.key_bindings.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_is_case_sensitive_and_rebindable() {
        let mut map = InputMap::default();
        map.bind("a", 0);
        map.bind("A", 0);
        map.bind("d", 1);
        assert_eq!(map.map_key("a"), Some(0));
        assert_eq!(map.map_key("D"), None);
        assert_eq!(map.map_key("A"), Some(0));

        map.bind("a", 1);
        assert_eq!(map.map_key("a"), Some(1));
        assert_eq!(map.map_key("A"), Some(0));
    }
}
