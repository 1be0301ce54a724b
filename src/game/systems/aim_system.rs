//! Aim and indicator coordination system.
//!
//! Wraps [`AimController`] with the arrow rig it drives and tracks when the
//! indicator transform changed, so a renderer only re-uploads on change.

use glam::{Quat, Vec3};

use crate::aim::{AimConfig, AimController, AimState};
use crate::input::InputVector;
use crate::scene::AimIndicator;

/// Manages aim state and keeps the arrow indicator in sync with it.
pub struct AimSystem {
    controller: AimController,
    indicator: AimIndicator,
    /// Orientation rebuilt this tick.
    orientation: Quat,
    /// Cached aim for dirty detection.
    last_state: AimState,
    indicator_dirty: bool,
}

impl AimSystem {
    /// Create an aim system with the arrow pivoting at `pivot`.
    pub fn new(config: &AimConfig, pivot: Vec3) -> Self {
        let controller = AimController::new(config);
        let orientation = controller.compose_orientation();
        let mut indicator = AimIndicator::new(pivot);
        indicator.sync(orientation, controller.power_scale());
        let last_state = *controller.state();
        Self {
            controller,
            indicator,
            orientation,
            last_state,
            indicator_dirty: true, // Dirty on first frame so the rig gets uploaded
        }
    }

    /// Advance the aim by one tick of input and rebuild the orientation.
    pub fn aim(&mut self, input: InputVector, delta: f32) {
        self.controller.advance(input, delta);
        self.orientation = self.controller.compose_orientation();

        let state = *self.controller.state();
        if state != self.last_state {
            self.indicator.sync(self.orientation, state.power_scale);
            self.indicator_dirty = true;
            self.last_state = state;
        }
    }

    /// Current clamped aim.
    pub fn state(&self) -> &AimState {
        self.controller.state()
    }

    /// Orientation composed from the current aim.
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    pub fn indicator(&self) -> &AimIndicator {
        &self.indicator
    }

    /// Check if the indicator transform changed since the last upload.
    pub fn indicator_dirty(&self) -> bool {
        self.indicator_dirty
    }

    /// Mark the indicator as uploaded.
    pub fn mark_indicator_clean(&mut self) {
        self.indicator_dirty = false;
    }
}
