//! Room camera state and its per-frame controller.
//!
//! Keyboard movement and left-drag orbiting change the camera state; the
//! controller eases the rendered camera toward it every frame.

/// Camera state resource, clamped movement, and the controller system.
pub mod room_camera;
