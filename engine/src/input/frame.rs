//! Per-tick input snapshot
//!
//! The input collaborator publishes one immutable [`InputFrame`] per tick;
//! the simulation never reads live key state.

use serde::{Deserialize, Serialize};
use static_assertions::assert_impl_all;

/// One signed input axis, restricted to {-1, 0, +1}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Negative,
    #[default]
    Neutral,
    Positive,
}

impl Axis {
    /// Signed value of the axis (-1.0, 0.0 or 1.0).
    pub fn value(self) -> f32 {
        match self {
            Axis::Negative => -1.0,
            Axis::Neutral => 0.0,
            Axis::Positive => 1.0,
        }
    }

    /// Map an arbitrary value onto the axis by its sign. NaN maps to neutral.
    pub fn from_signum(value: f32) -> Self {
        if value > 0.0 {
            Axis::Positive
        } else if value < 0.0 {
            Axis::Negative
        } else {
            Axis::Neutral
        }
    }
}

/// Directional intent for one tick: (yaw, pitch, power).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputVector {
    /// Positive = turn right
    pub yaw: Axis,
    /// Positive = tilt up
    pub pitch: Axis,
    /// Positive = charge up
    pub power: Axis,
}

impl InputVector {
    pub const NEUTRAL: Self = Self {
        yaw: Axis::Neutral,
        pitch: Axis::Neutral,
        power: Axis::Neutral,
    };

    pub fn new(yaw: Axis, pitch: Axis, power: Axis) -> Self {
        Self { yaw, pitch, power }
    }

    /// Check if any axis is held
    pub fn is_active(&self) -> bool {
        *self != Self::NEUTRAL
    }
}

/// Everything the simulation consumes from input for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputFrame {
    pub axes: InputVector,
    /// Fire was pressed since the previous frame
    pub fire: bool,
    /// Reset was pressed since the previous frame
    pub reset: bool,
}

impl InputFrame {
    pub fn held(axes: InputVector) -> Self {
        Self {
            axes,
            ..Default::default()
        }
    }
}

assert_impl_all!(InputVector: Copy, Send, Sync);
assert_impl_all!(InputFrame: Copy, Send, Sync);
