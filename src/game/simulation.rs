//! Tick driver
//!
//! Runs one simulation tick in a fixed order:
//! reset (if triggered), aim advance, orientation rebuild, fire (if
//! triggered), trajectory step. Everything is synchronous; the caller owns
//! the clock.

use glam::Vec3;
use serde::Serialize;
use tracing::trace;

use super::config::DemoConfig;
use super::systems::{AimSystem, FireOutcome, ProjectileSystem};
use crate::input::InputFrame;
use crate::physics::{LaunchVectorResolver, ProjectileState};

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TickReport {
    pub tick: u64,
    pub pitch_deg: f32,
    pub yaw_deg: f32,
    pub power_scale: f32,
    /// Unit direction the arrow points along after this tick's aim
    pub aim_forward: Vec3,
    /// Set when this tick launched the projectile
    pub launch_velocity: Option<Vec3>,
    /// Fire was requested while a projectile was in flight
    pub fire_rejected: bool,
    /// The projectile was reset this tick
    pub reset: bool,
    pub projectile_position: Vec3,
    pub projectile_velocity: Vec3,
    pub projectile_state: ProjectileState,
}

/// The aim-and-launch demo: one aim, one projectile.
pub struct LaunchDemo {
    aim: AimSystem,
    projectiles: ProjectileSystem,
    tick: u64,
}

impl LaunchDemo {
    pub fn new(config: &DemoConfig) -> Self {
        let pivot = config.projectile.initial_position;
        Self {
            aim: AimSystem::new(&config.aim, pivot),
            projectiles: ProjectileSystem::new(
                config.projectile.build(),
                LaunchVectorResolver::new(&config.launch),
                config.ballistics,
            ),
            tick: 0,
        }
    }

    /// Advance the demo by `dt` seconds using this tick's input snapshot.
    pub fn tick(&mut self, frame: &InputFrame, dt: f32) -> TickReport {
        self.tick += 1;

        if frame.reset {
            self.projectiles.reset();
        }

        self.aim.aim(frame.axes, dt);
        let aim = *self.aim.state();
        let orientation = self.aim.orientation();

        let mut launch_velocity = None;
        let mut fire_rejected = false;
        if frame.fire {
            match self.projectiles.fire(&aim, orientation) {
                FireOutcome::Launched(velocity) => launch_velocity = Some(velocity),
                FireOutcome::InFlight => fire_rejected = true,
            }
        }

        let projectile_state = self.projectiles.update(dt);
        let projectile = self.projectiles.projectile();

        trace!(
            tick = self.tick,
            pitch_deg = aim.pitch_degrees(),
            yaw_deg = aim.yaw_degrees(),
            power = aim.power_scale,
            "tick"
        );

        TickReport {
            tick: self.tick,
            pitch_deg: aim.pitch_degrees(),
            yaw_deg: aim.yaw_degrees(),
            power_scale: aim.power_scale,
            aim_forward: aim.forward(),
            launch_velocity,
            fire_rejected,
            reset: frame.reset,
            projectile_position: projectile.position,
            projectile_velocity: projectile.velocity,
            projectile_state,
        }
    }

    pub fn aim(&self) -> &AimSystem {
        &self.aim
    }

    pub fn projectiles(&self) -> &ProjectileSystem {
        &self.projectiles
    }

    /// Ticks run so far.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// One-line status for a window title or log line.
    pub fn hud_line(&self) -> String {
        let aim = self.aim.state();
        let p = self.projectiles.projectile();
        format!(
            "Pitch {:.1}° | Yaw {:.1}° | Power {:.2} | Ball ({:.1}, {:.1}, {:.1}){}",
            aim.pitch_degrees(),
            aim.yaw_degrees(),
            aim.power_scale,
            p.position.x,
            p.position.y,
            p.position.z,
            if p.is_in_flight() { " [in flight]" } else { "" }
        )
    }
}
