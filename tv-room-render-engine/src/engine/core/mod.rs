//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, composition phase
//! transitions, and the shared error type for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Validates the media source lists, creates the app with rendering, loading,
/// media and input systems, and inserts the platform video player.
pub mod app_setup;

/// Composition phase state machine from startup to a fully composed scene.
pub mod app_state;

/// Error taxonomy for asset loads, playback and construction failures.
pub mod error;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
