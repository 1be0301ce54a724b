//! Scripted input
//!
//! A JSON timeline of held axes and one-shot triggers, expanded into the
//! per-tick [`InputFrame`]s a live keyboard would have produced. Used by the
//! headless replay binary and by tests.
//!
//! ```json
//! {
//!   "steps": [
//!     { "duration": 1.0, "pitch": "positive" },
//!     { "duration": 0.5, "power": "positive" },
//!     { "duration": 3.0, "fire": true },
//!     { "duration": 0.1, "reset": true }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::input::{Axis, InputFrame, InputVector};

/// Longest single step accepted (seconds).
pub const MAX_STEP_DURATION: f32 = 3600.0;

/// One segment of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptStep {
    /// Seconds this step lasts
    pub duration: f32,
    pub yaw: Axis,
    pub pitch: Axis,
    pub power: Axis,
    /// Press fire on the first tick of this step
    pub fire: bool,
    /// Press reset on the first tick of this step
    pub reset: bool,
}

impl ScriptStep {
    fn axes(&self) -> InputVector {
        InputVector::new(self.yaw, self.pitch, self.power)
    }

    /// Ticks covered by this step at `dt`. Triggers get at least one tick.
    fn tick_count(&self, dt: f32) -> usize {
        let ticks = (self.duration / dt).round().max(0.0) as usize;
        if ticks == 0 && (self.fire || self.reset) {
            1
        } else {
            ticks
        }
    }
}

/// A whole input timeline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InputScript {
    pub steps: Vec<ScriptStep>,
}

impl InputScript {
    pub fn from_json_str(json: &str) -> Result<Self, ScriptError> {
        let script: InputScript = serde_json::from_str(json)?;
        script.validate()?;
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    fn validate(&self) -> Result<(), ScriptError> {
        for (index, step) in self.steps.iter().enumerate() {
            if !step.duration.is_finite() || step.duration < 0.0 {
                return Err(ScriptError::InvalidStep {
                    index,
                    reason: format!("duration must be a non-negative number, got {}", step.duration),
                });
            }
            if step.duration > MAX_STEP_DURATION {
                return Err(ScriptError::InvalidStep {
                    index,
                    reason: format!(
                        "duration {} exceeds the {MAX_STEP_DURATION} s limit",
                        step.duration
                    ),
                });
            }
        }
        Ok(())
    }

    /// Total scripted time in seconds.
    pub fn duration(&self) -> f32 {
        self.steps.iter().map(|s| s.duration).sum()
    }

    /// Expand the timeline into per-tick frames at a fixed `dt`.
    ///
    /// A non-finite or non-positive `dt` yields no frames.
    pub fn frames(&self, dt: f32) -> Vec<InputFrame> {
        let mut frames = Vec::new();
        if !dt.is_finite() || dt <= 0.0 {
            return frames;
        }
        for step in &self.steps {
            for i in 0..step.tick_count(dt) {
                frames.push(InputFrame {
                    axes: step.axes(),
                    fire: step.fire && i == 0,
                    reset: step.reset && i == 0,
                });
            }
        }
        frames
    }
}

/// Errors that can occur while loading an input script.
#[derive(Debug)]
pub enum ScriptError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    /// A step is out of range.
    InvalidStep { index: usize, reason: String },
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptError::IoError(e) => write!(f, "IO error: {e}"),
            ScriptError::JsonError(e) => write!(f, "JSON error: {e}"),
            ScriptError::InvalidStep { index, reason } => {
                write!(f, "invalid script step {index}: {reason}")
            }
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScriptError::IoError(e) => Some(e),
            ScriptError::JsonError(e) => Some(e),
            ScriptError::InvalidStep { .. } => None,
        }
    }
}

impl From<std::io::Error> for ScriptError {
    fn from(e: std::io::Error) -> Self {
        ScriptError::IoError(e)
    }
}

impl From<serde_json::Error> for ScriptError {
    fn from(e: serde_json::Error) -> Self {
        ScriptError::JsonError(e)
    }
}
