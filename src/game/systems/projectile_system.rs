//! Projectile lifecycle management system.
//!
//! Owns the single projectile, its ballistics config and the launch
//! resolver, providing fire / reset / update with zero GPU coupling.

use glam::{Quat, Vec3};
use tracing::{debug, info};

use crate::aim::AimState;
use crate::physics::ballistics::{BallisticsConfig, Projectile, ProjectileState};
use crate::physics::launch::LaunchVectorResolver;

/// What a fire request did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FireOutcome {
    /// The projectile was at rest and is now moving with this velocity.
    Launched(Vec3),
    /// A projectile was already in flight; nothing changed.
    InFlight,
}

/// Manages launch, reset and flight of the demo's projectile.
pub struct ProjectileSystem {
    projectile: Projectile,
    resolver: LaunchVectorResolver,
    config: BallisticsConfig,
}

impl ProjectileSystem {
    pub fn new(projectile: Projectile, resolver: LaunchVectorResolver, config: BallisticsConfig) -> Self {
        Self {
            projectile,
            resolver,
            config,
        }
    }

    /// Launch from the current aim if the projectile is at rest.
    pub fn fire(&mut self, aim: &AimState, orientation: Quat) -> FireOutcome {
        match self.resolver.try_fire(aim, orientation, self.projectile.velocity) {
            Some(velocity) => {
                self.projectile.launch(velocity);
                info!(
                    pitch_deg = aim.pitch_degrees(),
                    yaw_deg = aim.yaw_degrees(),
                    power = aim.power_scale,
                    speed = velocity.length(),
                    "projectile launched"
                );
                FireOutcome::Launched(velocity)
            }
            None => {
                debug!("fire ignored, projectile already in flight");
                FireOutcome::InFlight
            }
        }
    }

    /// Return the projectile to rest at its initial position.
    pub fn reset(&mut self) {
        self.projectile.reset();
        info!("projectile reset");
    }

    /// Integrate one trajectory step.
    pub fn update(&mut self, delta: f32) -> ProjectileState {
        let state = self.projectile.integrate(&self.config, delta);
        if let ProjectileState::Landed { position } = state {
            info!(x = position.x, y = position.y, z = position.z, "projectile landed");
        }
        state
    }

    pub fn projectile(&self) -> &Projectile {
        &self.projectile
    }

    pub fn is_in_flight(&self) -> bool {
        self.projectile.is_in_flight()
    }

    /// Access the ballistics configuration.
    pub fn config(&self) -> &BallisticsConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system() -> ProjectileSystem {
        ProjectileSystem::new(
            Projectile::default(),
            LaunchVectorResolver::default(),
            BallisticsConfig::default(),
        )
    }

    fn aim(power_scale: f32) -> AimState {
        AimState {
            pitch: 0.0,
            yaw: 0.0,
            power_scale,
        }
    }

    #[test]
    fn test_fire_then_refire_is_ignored() {
        let mut system = system();
        let a = aim(2.0);

        assert_eq!(system.fire(&a, a.orientation()), FireOutcome::Launched(Vec3::new(0.0, 0.0, 40.0)));
        assert!(system.is_in_flight());

        let stronger = aim(3.0);
        assert_eq!(system.fire(&stronger, stronger.orientation()), FireOutcome::InFlight);
        assert_eq!(system.projectile().velocity, Vec3::new(0.0, 0.0, 40.0));
    }

    #[test]
    fn test_reset_allows_fire_again() {
        let mut system = system();
        let a = aim(1.0);
        system.fire(&a, a.orientation());
        system.update(0.05);

        system.reset();

        assert!(!system.is_in_flight());
        assert_eq!(system.projectile().position, system.projectile().initial_position());
        assert!(matches!(system.fire(&a, a.orientation()), FireOutcome::Launched(_)));
    }

    #[test]
    fn test_update_at_rest() {
        let mut system = system();
        assert_eq!(system.update(0.1), ProjectileState::AtRest);
    }
}
