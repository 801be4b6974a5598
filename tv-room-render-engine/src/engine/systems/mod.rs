//! Per-frame systems that are not tied to a single scene object.

/// Frame rate reporting to the host page and the native overlay.
pub mod fps_tracking;

/// Viewport size tracking and camera aspect ratio updates.
pub mod resize;
