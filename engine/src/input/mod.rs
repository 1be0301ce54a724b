//! Input Module
//!
//! Platform-agnostic keyboard handling for the aim-and-launch controls.
//! This module is decoupled from any specific windowing system (like winit);
//! the game layer translates physical keys into [`KeyCode`].
//!
//! # Example
//!
//! ```rust,ignore
//! use angry_vectors_engine::input::{KeyboardState, KeyCode};
//!
//! let mut keyboard = KeyboardState::new();
//! keyboard.handle_key(KeyCode::W, true); // W pressed
//!
//! // Once per tick
//! let frame = keyboard.take_frame();
//! if frame.fire {
//!     // Try to launch
//! }
//! ```

pub mod bindings;
pub mod frame;
pub mod keyboard;

// Re-export commonly used types at module level
pub use bindings::{InputAction, KeyBindings};
pub use frame::{Axis, InputFrame, InputVector};
pub use keyboard::{KeyCode, KeyboardState};
