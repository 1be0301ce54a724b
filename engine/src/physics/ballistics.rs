//! Ballistics simulation for the launched projectile
//!
//! Constant gravity plus optional quadratic air drag, integrated with
//! semi-implicit Euler. The projectile is "in flight" exactly while its
//! velocity is non-zero; touching the ground brings it to rest.
//!
//! Ground contact is a crossing: the centre has to come down through
//! `ground_height + radius` from above. A projectile launched from below that
//! height (the default ball sits half sunk in the ground) never crosses it on
//! a low shot, so it keeps flying until it is entirely below the ground plane
//! and is then placed on the ground.
//!
//! # Example
//!
//! ```ignore
//! use angry_vectors_engine::physics::ballistics::{BallisticsConfig, Projectile};
//! use glam::Vec3;
//!
//! let config = BallisticsConfig::default();
//! let mut projectile = Projectile::new(Vec3::new(0.0, 0.25, 2.0), 0.5);
//! projectile.launch(Vec3::new(0.0, 10.0, 20.0));
//! let state = projectile.integrate(&config, 1.0 / 60.0);
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// The launchable projectile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    /// Current position in world space (meters)
    pub position: Vec3,
    /// Current velocity vector (meters/second); zero means at rest
    pub velocity: Vec3,
    /// Radius of the projectile (meters)
    pub radius: f32,
    /// Mass (kilograms), only relevant with air drag
    pub mass: f32,
    /// Drag coefficient (dimensionless)
    pub drag_coefficient: f32,
    initial_position: Vec3,
}

impl Default for Projectile {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.25, 2.0), 0.5)
    }
}

impl Projectile {
    /// Create a projectile resting at `initial_position`.
    pub fn new(initial_position: Vec3, radius: f32) -> Self {
        Self {
            position: initial_position,
            velocity: Vec3::ZERO,
            radius,
            mass: 1.0,
            drag_coefficient: 0.47, // Sphere drag coefficient
            initial_position,
        }
    }

    /// Set mass, clamped away from zero so drag never divides by zero.
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass.max(0.001);
        self
    }

    pub fn with_drag_coefficient(mut self, drag_coefficient: f32) -> Self {
        self.drag_coefficient = drag_coefficient.max(0.0);
        self
    }

    pub fn initial_position(&self) -> Vec3 {
        self.initial_position
    }

    /// A projectile is in flight while its velocity is non-zero.
    pub fn is_in_flight(&self) -> bool {
        self.velocity != Vec3::ZERO
    }

    /// Hand the projectile a launch velocity.
    pub fn launch(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Return to rest at the initial position, whatever the current state.
    pub fn reset(&mut self) {
        self.position = self.initial_position;
        self.velocity = Vec3::ZERO;
    }

    /// Integrate the projectile's physics over a time step.
    ///
    /// Semi-implicit Euler: velocity is updated from the acceleration first,
    /// then position from the new velocity. Air drag is
    /// `F = -0.5 * rho * Cd * A * |v|^2 * v_hat`.
    pub fn integrate(&mut self, config: &BallisticsConfig, dt: f32) -> ProjectileState {
        if !self.is_in_flight() {
            return ProjectileState::AtRest;
        }
        if !dt.is_finite() || dt <= 0.0 {
            return ProjectileState::Flying;
        }

        let speed = self.velocity.length();
        let drag_force = if config.air_density > 0.0 && speed > 0.001 {
            let area = std::f32::consts::PI * self.radius * self.radius;
            let drag_magnitude =
                0.5 * config.air_density * self.drag_coefficient * area * speed * speed;
            -self.velocity / speed * drag_magnitude
        } else {
            Vec3::ZERO
        };

        let acceleration = config.gravity + drag_force / self.mass;
        let previous_y = self.position.y;

        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;

        let rest_height = config.ground_height + self.radius;
        let crossed = previous_y > rest_height && self.position.y <= rest_height;
        let sunk = self.position.y + self.radius <= config.ground_height;
        if self.velocity.y <= 0.0 && (crossed || sunk) {
            self.position.y = rest_height;
            self.velocity = Vec3::ZERO;
            return ProjectileState::Landed {
                position: self.position,
            };
        }

        ProjectileState::Flying
    }
}

/// Environment parameters shared by every trajectory step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallisticsConfig {
    /// Gravity acceleration vector (m/s²)
    pub gravity: Vec3,
    /// Air density (kg/m³); zero disables drag
    pub air_density: f32,
    /// Height of the ground plane
    pub ground_height: f32,
}

impl Default for BallisticsConfig {
    fn default() -> Self {
        Self::vacuum()
    }
}

impl BallisticsConfig {
    /// Earth gravity, no air drag
    pub fn vacuum() -> Self {
        Self {
            gravity: Vec3::new(0.0, -9.81, 0.0),
            air_density: 0.0,
            ground_height: 0.0,
        }
    }

    /// Earth gravity with sea-level air
    pub fn earth_air() -> Self {
        Self {
            air_density: 1.225,
            ..Self::vacuum()
        }
    }

    /// Create a config with custom gravity and no air drag
    pub fn with_gravity(gravity: Vec3) -> Self {
        Self {
            gravity,
            ..Self::vacuum()
        }
    }
}

/// Result of one trajectory step.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ProjectileState {
    /// Not launched (or already landed)
    #[default]
    AtRest,
    /// Still moving
    Flying,
    /// Touched the ground this step and came to rest
    Landed {
        /// Resting position (meters)
        position: Vec3,
    },
}
