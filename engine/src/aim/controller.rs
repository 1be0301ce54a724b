//! Aim Controller
//!
//! Owns the clamped pitch/yaw/power accumulators and rebuilds the indicator
//! orientation from them every tick.
//!
//! Pitch and yaw are absolute scalars, never a running rotation. Rotating the
//! indicator about its own local axes frame after frame compounds the two
//! rotations, introduces roll, and makes the effective limits depend on
//! history. Rebuilding `Ry(yaw) * Rx(-pitch)` from the clamped scalars keeps
//! both axes decoupled and the limits exact.
//!
//! # Example
//! ```ignore
//! use angry_vectors_engine::aim::{AimConfig, AimController};
//! use angry_vectors_engine::input::{Axis, InputVector};
//!
//! let mut aim = AimController::new(&AimConfig::default());
//! let input = InputVector::new(Axis::Neutral, Axis::Positive, Axis::Neutral);
//! aim.advance(input, 1.0 / 60.0);
//! let forward = aim.forward();
//! ```

use glam::{Quat, Vec3};

use super::config::{AimConfig, AimLimits};
use crate::input::InputVector;

/// Local forward axis of the un-rotated indicator.
pub const LOCAL_FORWARD: Vec3 = Vec3::Z;

/// Current aim: absolute pitch/yaw (radians) and power scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimState {
    /// Elevation above the horizon (radians), `0..=max_pitch`
    pub pitch: f32,
    /// Heading, positive toward +X (radians), `-max_yaw..=max_yaw`
    pub yaw: f32,
    /// Charge level, `min_scale..=max_scale`
    pub power_scale: f32,
}

impl AimState {
    /// Build the orientation for this aim: yaw about world up applied after
    /// pitch about world right.
    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(-self.pitch)
    }

    /// Unit direction the indicator points along.
    pub fn forward(&self) -> Vec3 {
        (self.orientation() * LOCAL_FORWARD).normalize()
    }

    pub fn pitch_degrees(&self) -> f32 {
        self.pitch.to_degrees()
    }

    pub fn yaw_degrees(&self) -> f32 {
        self.yaw.to_degrees()
    }
}

/// Clamped two-axis aim plus power charge.
#[derive(Debug, Clone)]
pub struct AimController {
    state: AimState,
    initial: AimState,
    limits: AimLimits,
}

impl Default for AimController {
    fn default() -> Self {
        Self::new(&AimConfig::default())
    }
}

impl AimController {
    /// Create a controller at the configured initial aim, clamped into range.
    pub fn new(config: &AimConfig) -> Self {
        let limits = AimLimits::from(config);
        let initial = AimState {
            pitch: limits.clamp_pitch(config.initial_pitch_deg.to_radians()),
            yaw: limits.clamp_yaw(config.initial_yaw_deg.to_radians()),
            power_scale: limits.clamp_power(config.initial_power),
        };
        Self {
            state: initial,
            initial,
            limits,
        }
    }

    /// Accumulate one tick of input, then clamp each field to its range.
    ///
    /// Yaw input is inverted so "turn right" yaws toward -X, which is screen
    /// right for a camera looking down +Z.
    pub fn advance(&mut self, input: InputVector, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }

        let step = self.limits.angular_rate * dt;
        let pitch = self.state.pitch + step * input.pitch.value();
        let yaw = self.state.yaw + step * -input.yaw.value();
        let power = self.state.power_scale + self.limits.scale_rate * dt * input.power.value();

        self.state = AimState {
            pitch: self.limits.clamp_pitch(pitch),
            yaw: self.limits.clamp_yaw(yaw),
            power_scale: self.limits.clamp_power(power),
        };
    }

    /// Orientation rebuilt from the current clamped state.
    pub fn compose_orientation(&self) -> Quat {
        self.state.orientation()
    }

    /// Unit direction the indicator currently points along.
    pub fn forward(&self) -> Vec3 {
        self.state.forward()
    }

    pub fn state(&self) -> &AimState {
        &self.state
    }

    pub fn limits(&self) -> &AimLimits {
        &self.limits
    }

    pub fn power_scale(&self) -> f32 {
        self.state.power_scale
    }

    /// Restore the configured starting aim.
    pub fn reset_aim(&mut self) {
        self.state = self.initial;
    }
}
