//! Keyboard Input Module
//!
//! Tracks key state for the aim axes and latches the fire/reset triggers.
//! Decoupled from winit to use generic key codes.

use super::bindings::{InputAction, KeyBindings};
use super::frame::{Axis, InputFrame, InputVector};

/// Generic key codes, independent of windowing system.
///
/// These map to standard keyboard keys but are not tied to winit::keyboard::KeyCode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Letter keys
    W,
    A,
    S,
    D,
    F,
    R,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Control keys
    Space,
    Enter,
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Keyboard state for the aim-and-launch controls.
///
/// Key-down sets an axis to the key's sign. Key-up clears the axis only if
/// it still holds that sign, so releasing A while D is held keeps yawing
/// right. Fire and reset latch on key-down until the next [`take_frame`].
///
/// [`take_frame`]: KeyboardState::take_frame
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    bindings: KeyBindings,
    axes: InputVector,
    fire_pending: bool,
    reset_pending: bool,
    exit_requested: bool,
}

impl KeyboardState {
    /// Create a keyboard state with default bindings and all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Default::default()
        }
    }

    /// Handle a key press or release event.
    ///
    /// Returns the bound action, or `None` if the key is unbound.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> Option<InputAction> {
        let action = self.bindings.get_action(key)?;
        match action {
            InputAction::YawLeft => set_axis(&mut self.axes.yaw, Axis::Negative, pressed),
            InputAction::YawRight => set_axis(&mut self.axes.yaw, Axis::Positive, pressed),
            InputAction::PitchUp => set_axis(&mut self.axes.pitch, Axis::Positive, pressed),
            InputAction::PitchDown => set_axis(&mut self.axes.pitch, Axis::Negative, pressed),
            InputAction::PowerUp => set_axis(&mut self.axes.power, Axis::Positive, pressed),
            InputAction::PowerDown => set_axis(&mut self.axes.power, Axis::Negative, pressed),
            InputAction::Fire => self.fire_pending |= pressed,
            InputAction::Reset => self.reset_pending |= pressed,
            InputAction::Exit => self.exit_requested |= pressed,
        }
        Some(action)
    }

    /// Publish the snapshot for this tick and clear the latched triggers.
    pub fn take_frame(&mut self) -> InputFrame {
        InputFrame {
            axes: self.axes,
            fire: std::mem::take(&mut self.fire_pending),
            reset: std::mem::take(&mut self.reset_pending),
        }
    }

    /// Currently held axes.
    pub fn axes(&self) -> InputVector {
        self.axes
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Release every held axis (e.g. on focus loss). Latched triggers survive.
    pub fn release_all(&mut self) {
        self.axes = InputVector::NEUTRAL;
    }
}

fn set_axis(axis: &mut Axis, direction: Axis, pressed: bool) {
    if pressed {
        *axis = direction;
    } else if *axis == direction {
        *axis = Axis::Neutral;
    }
}
