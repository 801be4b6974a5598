//! Keyboard and pointer input.
//!
//! Key presses are translated into [`actions::InputAction`]s and dispatched to
//! the camera, screen and music state. Pointer movement drives the orbiting
//! light.

/// Input actions and the key identifiers that trigger them.
pub mod actions;

/// Keyboard event system and the action dispatcher.
pub mod keyboard;

/// Cursor normalisation and the orbiting point light.
pub mod pointer;
