//! Compiled-in configuration for the TV room scene.
//!
//! Every asset path, placement, light, control step and render setting is a
//! constant here. There is no runtime configuration file.

/// Asset registry: logical names, paths and kinds of every external asset.
pub mod assets;

/// Input tuning: movement and volume steps, camera bounds, light orbit.
pub mod controls;

/// Light definitions for the fixed lights and the fixture-derived lights.
pub mod lighting;

/// Media source lists and playback defaults for music, video and slideshow.
pub mod media;

/// Placement table for every loaded model plus the procedural TV layout.
pub mod placement;

/// Camera, shadow and material settings for the renderer.
pub mod render_settings;

/// Room shell textures and TV body texture.
pub mod texture;
