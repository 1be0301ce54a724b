//! Launch vector resolution
//!
//! Turns the current aim into a launch velocity, but only when the
//! projectile is at rest. Firing while a projectile is in flight is a
//! silent no-op, not an error.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::aim::{AimState, LOCAL_FORWARD};

/// Default launch speed per unit of power scale (m/s)
pub const SPEED_MULTIPLIER: f32 = 20.0;

/// Launch tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// Launch speed per unit of power scale (m/s)
    pub speed_multiplier: f32,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            speed_multiplier: SPEED_MULTIPLIER,
        }
    }
}

/// Derives launch velocities from aim and power.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchVectorResolver {
    speed_multiplier: f32,
}

impl Default for LaunchVectorResolver {
    fn default() -> Self {
        Self::new(&LaunchConfig::default())
    }
}

impl LaunchVectorResolver {
    pub fn new(config: &LaunchConfig) -> Self {
        Self {
            speed_multiplier: config.speed_multiplier,
        }
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    /// Launch velocity for `aim` oriented by `orientation`, ignoring the
    /// in-flight gate.
    pub fn launch_velocity(&self, aim: &AimState, orientation: Quat) -> Vec3 {
        let direction = (orientation * LOCAL_FORWARD).normalize();
        direction * (aim.power_scale * self.speed_multiplier)
    }

    /// Resolve a launch velocity if nothing is in flight.
    ///
    /// Returns `None` unless `current_velocity` is exactly zero.
    pub fn try_fire(&self, aim: &AimState, orientation: Quat, current_velocity: Vec3) -> Option<Vec3> {
        if current_velocity != Vec3::ZERO {
            return None;
        }
        Some(self.launch_velocity(aim, orientation))
    }
}
