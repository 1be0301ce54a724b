//! Scene module
//!
//! Parent-owned transform nodes and the arrow indicator built from them.
//! The renderer reads world matrices from here; nothing in this module
//! draws.
//!
//! # Submodules
//!
//! - [`transform`] - Local translation/rotation/scale
//! - [`node`] - The transform tree
//! - [`indicator`] - The arrow rig driven by the aim

pub mod indicator;
pub mod node;
pub mod transform;

pub use indicator::AimIndicator;
pub use node::SceneNode;
pub use transform::Transform;
