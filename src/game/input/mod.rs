//! Input Module
//!
//! Window-system key translation for the engine's keyboard state.

pub mod keyboard;

pub use keyboard::map_winit_key;
