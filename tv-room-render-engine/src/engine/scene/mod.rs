//! Room composition: the procedural shell and TV, placed models and lights.
//!
//! Procedural parts are built synchronously at startup. Loaded models are
//! placed by the model loader as their loads complete, in any order.

/// Transforms, loaded model placement and light spawning.
pub mod composer;

/// Textured six-face room shell seen from the inside.
pub mod room;

/// Shadow and emissive setup once a model's scene is instantiated.
pub mod scene_ready;

/// Constant per-frame rotation (the ceiling fan).
pub mod spin;

/// TV assembly group with the procedural body and both screen nodes.
pub mod tv_assembly;
