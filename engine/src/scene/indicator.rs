//! Aim indicator rig
//!
//! The arrow the player aims with: a root node that carries the aim
//! orientation and power scale, a shaft offset one unit forward and laid
//! along +Z, and a head at the far end of the shaft.
//!
//! ```text
//! arrow (position, aim rotation, scale (1, 1, power))
//! └── shaft (0, 0, 1), rotated +90° about X, length 2
//!     └── head (0, 1, 0) in shaft space
//! ```

use glam::{Quat, Vec3};

use super::node::SceneNode;
use super::transform::Transform;

/// Indicator dimensions (in meters)
pub mod dimensions {
    /// Shaft length along the aim axis
    pub const SHAFT_LENGTH: f32 = 2.0;
}

pub const ROOT_NODE: &str = "arrow";
pub const SHAFT_NODE: &str = "arrow_shaft";
pub const HEAD_NODE: &str = "arrow_head";

/// Transform tree for the arrow, synced from the aim every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct AimIndicator {
    root: SceneNode,
}

impl Default for AimIndicator {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.25, 2.0))
    }
}

impl AimIndicator {
    /// Build the arrow rig with its pivot at `position`.
    pub fn new(position: Vec3) -> Self {
        let half = dimensions::SHAFT_LENGTH / 2.0;
        let head = SceneNode::new(HEAD_NODE, Transform::from_translation(Vec3::new(0.0, half, 0.0)));
        let shaft = SceneNode::new(
            SHAFT_NODE,
            Transform::from_translation(Vec3::new(0.0, 0.0, half))
                .with_rotation(Quat::from_rotation_x(90.0_f32.to_radians())),
        )
        .with_child(head);
        let root = SceneNode::new(ROOT_NODE, Transform::from_translation(position)).with_child(shaft);

        Self { root }
    }

    /// Apply the current aim: rotation on the root, power as a stretch along
    /// the aim's forward axis.
    pub fn sync(&mut self, orientation: Quat, power_scale: f32) {
        self.root.local.rotation = orientation;
        self.root.local.scale = Vec3::new(1.0, 1.0, power_scale);
    }

    pub fn position(&self) -> Vec3 {
        self.root.local.translation
    }

    pub fn orientation(&self) -> Quat {
        self.root.local.rotation
    }

    /// World-space position of the arrow head.
    pub fn tip_position(&self) -> Vec3 {
        self.root
            .world_position_of(HEAD_NODE)
            .unwrap_or_else(|| self.position())
    }

    /// The whole rig, for the renderer.
    pub fn root(&self) -> &SceneNode {
        &self.root
    }
}
