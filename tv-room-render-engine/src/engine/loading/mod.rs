//! Asynchronous asset loading for the room.
//!
//! Model loads are requested once at startup and polled every frame until they
//! settle. Failures never stop the rest of the scene from composing; they are
//! collected on the diagnostics channel.

/// Failure records and load-state polling for textures and audio.
pub mod diagnostics;

/// Outstanding glTF loads for placed objects and their completion system.
pub mod model_loader;
