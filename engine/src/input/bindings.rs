//! Input Bindings Module
//!
//! Maps physical keys to logical aim/launch actions, allowing key remapping
//! without touching game logic.

use std::collections::HashMap;

use super::KeyCode;

/// Logical input actions that can be bound to physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Yaw axis -1 (default: A)
    YawLeft,
    /// Yaw axis +1 (default: D)
    YawRight,
    /// Pitch axis +1 (default: W)
    PitchUp,
    /// Pitch axis -1 (default: S)
    PitchDown,
    /// Power axis +1 (default: ArrowUp)
    PowerUp,
    /// Power axis -1 (default: ArrowDown)
    PowerDown,
    /// Launch the projectile (default: Space)
    Fire,
    /// Return the projectile to its start (default: R)
    Reset,
    /// Quit (default: Escape)
    Exit,
}

/// Maps physical keys to logical actions, supporting customizable key bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Map from physical key to logical action
    key_to_action: HashMap<KeyCode, InputAction>,
    /// Map from logical action to physical key (for reverse lookup and display)
    action_to_key: HashMap<InputAction, KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create a new KeyBindings instance with default key mappings.
    ///
    /// Default bindings:
    /// - W / S = PitchUp / PitchDown
    /// - A / D = YawLeft / YawRight
    /// - ArrowUp / ArrowDown = PowerUp / PowerDown
    /// - Space = Fire
    /// - R = Reset
    /// - Escape = Exit
    pub fn new() -> Self {
        let mut bindings = Self {
            key_to_action: HashMap::new(),
            action_to_key: HashMap::new(),
        };

        bindings.bind(KeyCode::W, InputAction::PitchUp);
        bindings.bind(KeyCode::S, InputAction::PitchDown);
        bindings.bind(KeyCode::A, InputAction::YawLeft);
        bindings.bind(KeyCode::D, InputAction::YawRight);
        bindings.bind(KeyCode::ArrowUp, InputAction::PowerUp);
        bindings.bind(KeyCode::ArrowDown, InputAction::PowerDown);
        bindings.bind(KeyCode::Space, InputAction::Fire);
        bindings.bind(KeyCode::R, InputAction::Reset);
        bindings.bind(KeyCode::Escape, InputAction::Exit);

        bindings
    }

    /// Bind a physical key to a logical action.
    ///
    /// Any previous binding of the key, and any previous key of the action,
    /// is removed.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        if let Some(old_action) = self.key_to_action.remove(&key) {
            self.action_to_key.remove(&old_action);
        }
        if let Some(old_key) = self.action_to_key.remove(&action) {
            self.key_to_action.remove(&old_key);
        }

        self.key_to_action.insert(key, action);
        self.action_to_key.insert(action, key);
    }

    /// Remove the binding for a specific key.
    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(action) = self.key_to_action.remove(&key) {
            self.action_to_key.remove(&action);
        }
    }

    /// Get the action bound to a physical key, if any.
    pub fn get_action(&self, key: KeyCode) -> Option<InputAction> {
        self.key_to_action.get(&key).copied()
    }

    /// Get the key bound to a logical action, if any.
    pub fn get_key(&self, action: InputAction) -> Option<KeyCode> {
        self.action_to_key.get(&action).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::new();

        assert_eq!(bindings.get_action(KeyCode::W), Some(InputAction::PitchUp));
        assert_eq!(bindings.get_action(KeyCode::S), Some(InputAction::PitchDown));
        assert_eq!(bindings.get_action(KeyCode::A), Some(InputAction::YawLeft));
        assert_eq!(bindings.get_action(KeyCode::D), Some(InputAction::YawRight));
        assert_eq!(bindings.get_action(KeyCode::ArrowUp), Some(InputAction::PowerUp));
        assert_eq!(bindings.get_action(KeyCode::ArrowDown), Some(InputAction::PowerDown));
        assert_eq!(bindings.get_action(KeyCode::Space), Some(InputAction::Fire));
        assert_eq!(bindings.get_action(KeyCode::R), Some(InputAction::Reset));
        assert_eq!(bindings.get_action(KeyCode::Escape), Some(InputAction::Exit));
        assert_eq!(bindings.get_action(KeyCode::Unknown), None);
    }

    #[test]
    fn test_reverse_lookup() {
        let bindings = KeyBindings::new();
        assert_eq!(bindings.get_key(InputAction::Fire), Some(KeyCode::Space));
        assert_eq!(bindings.get_key(InputAction::PowerUp), Some(KeyCode::ArrowUp));
    }

    #[test]
    fn test_rebind_key() {
        let mut bindings = KeyBindings::new();

        bindings.bind(KeyCode::F, InputAction::Fire);

        assert_eq!(bindings.get_action(KeyCode::Space), None);
        assert_eq!(bindings.get_action(KeyCode::F), Some(InputAction::Fire));
        assert_eq!(bindings.get_key(InputAction::Fire), Some(KeyCode::F));
    }

    #[test]
    fn test_rebind_taken_key_moves_it() {
        let mut bindings = KeyBindings::new();

        // Bind W (PitchUp) to Fire: PitchUp loses its key
        bindings.bind(KeyCode::W, InputAction::Fire);

        assert_eq!(bindings.get_key(InputAction::PitchUp), None);
        assert_eq!(bindings.get_action(KeyCode::Space), None);
    }

    #[test]
    fn test_unbind_key() {
        let mut bindings = KeyBindings::new();
        bindings.unbind_key(KeyCode::R);
        assert_eq!(bindings.get_action(KeyCode::R), None);
        assert_eq!(bindings.get_key(InputAction::Reset), None);
    }
}
