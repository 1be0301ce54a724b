//! Angry Vectors Engine Library
//!
//! Aim-and-launch core: a player tilts, turns and charges an arrow within
//! clamped bounds, then launches a projectile whose velocity comes from the
//! arrow's orientation and charge.
//!
//! # Modules
//!
//! - [`aim`] - Clamped pitch/yaw/power accumulators and composed orientation
//! - [`physics`] - In-flight-gated launch vector and projectile trajectory
//! - [`scene`] - Transform tree and the arrow indicator rig
//! - [`input`] - Platform-agnostic keys, bindings, per-tick input snapshots
//! - [`game`] - Configuration, systems, the tick driver, scripted input
//!
//! # Example
//!
//! ```ignore
//! use angry_vectors_engine::game::{DemoConfig, LaunchDemo};
//! use angry_vectors_engine::input::{KeyboardState, KeyCode};
//!
//! let mut demo = LaunchDemo::new(&DemoConfig::default());
//! let mut keyboard = KeyboardState::new();
//!
//! keyboard.handle_key(KeyCode::W, true);
//! keyboard.handle_key(KeyCode::Space, true);
//!
//! let report = demo.tick(&keyboard.take_frame(), 1.0 / 60.0);
//! if let Some(velocity) = report.launch_velocity {
//!     // Projectile launched
//! }
//! ```

pub mod aim;
pub mod input;
pub mod physics;
pub mod scene;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used types
pub use aim::{AimConfig, AimController, AimState};
pub use input::{Axis, InputFrame, InputVector, KeyCode, KeyboardState};
pub use physics::{BallisticsConfig, LaunchVectorResolver, Projectile, ProjectileState};
pub use scene::{AimIndicator, SceneNode, Transform};
