use crate::assets::{
    BACKGROUND_MUSIC_1, BACKGROUND_MUSIC_2, BACKGROUND_MUSIC_3, BACKGROUND_MUSIC_4,
    BACKGROUND_MUSIC_5, SCREEN_TEXTURE_1, SCREEN_TEXTURE_2, SCREEN_TEXTURE_3, SCREEN_TEXTURE_4,
    SCREEN_TEXTURE_5, SCREEN_VIDEO_1, SCREEN_VIDEO_2, SCREEN_VIDEO_3,
};

pub const AUDIO_TRACKS: &[&str] = &[
    BACKGROUND_MUSIC_1.path,
    BACKGROUND_MUSIC_2.path,
    BACKGROUND_MUSIC_3.path,
    BACKGROUND_MUSIC_4.path,
    BACKGROUND_MUSIC_5.path,
];

pub const VIDEO_CLIPS: &[&str] = &[
    SCREEN_VIDEO_1.path,
    SCREEN_VIDEO_2.path,
    SCREEN_VIDEO_3.path,
];

pub const SCREEN_IMAGES: &[&str] = &[
    SCREEN_TEXTURE_1.path,
    SCREEN_TEXTURE_2.path,
    SCREEN_TEXTURE_3.path,
    SCREEN_TEXTURE_4.path,
    SCREEN_TEXTURE_5.path,
];

/// Volume the background music starts at.
pub const INITIAL_MUSIC_VOLUME: f32 = 0.5;

/// Period of the image slideshow while the TV shows images.
pub const IMAGE_AUTOPLAY_PERIOD_MS: u64 = 1000;

/// Resolution of the texture the browser video frames are copied into.
pub const VIDEO_TEXTURE_WIDTH: u32 = 640;
pub const VIDEO_TEXTURE_HEIGHT: u32 = 360;

/// Directory the web build serves assets from, used for paths handed straight
/// to browser media elements.
pub const WEB_ASSET_ROOT: &str = "assets";
