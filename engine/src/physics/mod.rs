//! Physics module
//!
//! Launch-vector derivation and the projectile's post-launch trajectory.
//! Built without an external physics library.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Velocities in m/s
//! - Accelerations in m/s²
//! - Mass in kg
//! - Air density in kg/m³
//!
//! # Submodules
//!
//! - [`launch`] - In-flight-gated launch velocity from aim and power
//! - [`ballistics`] - Projectile state, reset, and trajectory integration

pub mod ballistics;
pub mod launch;

pub use ballistics::{BallisticsConfig, Projectile, ProjectileState};
pub use launch::{LaunchConfig, LaunchVectorResolver, SPEED_MULTIPLIER};
