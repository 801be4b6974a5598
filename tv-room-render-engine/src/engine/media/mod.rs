//! Media playback state for the background music and the TV screen.
//!
//! Both subsystems cycle through fixed source lists. The TV screen switches
//! between a looping video and an image slideshow, with exactly one screen node
//! attached to the TV at a time.

/// Background music state and its synchronisation with the Bevy audio sink.
pub mod background_music;

/// Ordered source list with a wrapping cursor, shared by all media.
pub mod cycler;

/// Video/image screen mode machine and the slideshow autoplay timer.
pub mod screen_content;

/// Video player abstraction with browser and headless backends.
pub mod video_player;
