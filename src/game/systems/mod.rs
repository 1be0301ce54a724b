//! Game systems: self-contained modules that own state and logic.

pub mod aim_system;
pub mod projectile_system;

pub use aim_system::AimSystem;
pub use projectile_system::{FireOutcome, ProjectileSystem};
