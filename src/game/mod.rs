//! Game Module
//!
//! Demo-specific configuration, systems and the tick driver that build on
//! top of the engine.

pub mod config;
pub mod input;
pub mod logging;
pub mod script;
pub mod simulation;
pub mod systems;

pub use config::{ConfigError, DemoConfig, ProjectileConfig};
pub use input::map_winit_key;
pub use logging::init_logging;
pub use script::{InputScript, ScriptError, ScriptStep};
pub use simulation::{LaunchDemo, TickReport};
pub use systems::{AimSystem, FireOutcome, ProjectileSystem};
