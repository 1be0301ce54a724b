//! Config Module
//!
//! Centralized configuration for the aim, launch and trajectory tuning.

pub mod demo_config;

pub use demo_config::{ConfigError, DemoConfig, ProjectileConfig};
