//! Keyboard Mapping
//!
//! Translates winit physical keys into the engine's generic [`KeyCode`].

use winit::keyboard::KeyCode as WinitKey;

use crate::input::KeyCode;

/// Map a winit key to the engine key code.
///
/// Keys the demo never binds map to [`KeyCode::Unknown`].
pub fn map_winit_key(key: WinitKey) -> KeyCode {
    match key {
        WinitKey::KeyW => KeyCode::W,
        WinitKey::KeyA => KeyCode::A,
        WinitKey::KeyS => KeyCode::S,
        WinitKey::KeyD => KeyCode::D,
        WinitKey::KeyF => KeyCode::F,
        WinitKey::KeyR => KeyCode::R,
        WinitKey::ArrowUp => KeyCode::ArrowUp,
        WinitKey::ArrowDown => KeyCode::ArrowDown,
        WinitKey::ArrowLeft => KeyCode::ArrowLeft,
        WinitKey::ArrowRight => KeyCode::ArrowRight,
        WinitKey::Space => KeyCode::Space,
        WinitKey::Enter | WinitKey::NumpadEnter => KeyCode::Enter,
        WinitKey::Escape => KeyCode::Escape,
        _ => KeyCode::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aim_keys_map() {
        assert_eq!(map_winit_key(WinitKey::KeyW), KeyCode::W);
        assert_eq!(map_winit_key(WinitKey::KeyD), KeyCode::D);
        assert_eq!(map_winit_key(WinitKey::ArrowUp), KeyCode::ArrowUp);
        assert_eq!(map_winit_key(WinitKey::Space), KeyCode::Space);
        assert_eq!(map_winit_key(WinitKey::KeyR), KeyCode::R);
    }

    #[test]
    fn test_unbound_key_is_unknown() {
        assert_eq!(map_winit_key(WinitKey::KeyQ), KeyCode::Unknown);
        assert_eq!(map_winit_key(WinitKey::F11), KeyCode::Unknown);
    }
}
