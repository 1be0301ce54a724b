//! Aim module
//!
//! Clamped pitch/yaw/power accumulators and the orientation composed from
//! them.
//!
//! # Submodules
//!
//! - [`config`] - Degree-based tuning, default limits and rates
//! - [`controller`] - [`AimController`] and [`AimState`]

pub mod config;
pub mod controller;

pub use config::{AimConfig, AimLimits};
pub use controller::{AimController, AimState, LOCAL_FORWARD};
