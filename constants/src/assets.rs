/// Kind of an external asset, deciding which loader or player resolves its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Model,
    Texture,
    AudioTrack,
    VideoClip,
}

/// A single external asset known to the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetDescriptor {
    pub logical_name: &'static str,
    pub path: &'static str,
    pub kind: AssetKind,
}

impl AssetDescriptor {
    pub const fn new(logical_name: &'static str, path: &'static str, kind: AssetKind) -> Self {
        Self {
            logical_name,
            path,
            kind,
        }
    }
}

// Models
pub const TV_TABLE: AssetDescriptor =
    AssetDescriptor::new("tv-table", "model/tv-table/scene.gltf", AssetKind::Model);
pub const FLOOR_LAMP: AssetDescriptor =
    AssetDescriptor::new("floor-lamp", "model/floor-lamp/scene.gltf", AssetKind::Model);
pub const SOFA: AssetDescriptor =
    AssetDescriptor::new("sofa", "model/sofa/scene.gltf", AssetKind::Model);
pub const DOOR: AssetDescriptor =
    AssetDescriptor::new("door", "model/door/scene.gltf", AssetKind::Model);
pub const SLIDING_WINDOW: AssetDescriptor = AssetDescriptor::new(
    "sliding-window",
    "model/sliding-window/scene.gltf",
    AssetKind::Model,
);
pub const CEILING_FAN: AssetDescriptor =
    AssetDescriptor::new("ceiling-fan", "model/ceiling-fan/scene.gltf", AssetKind::Model);
pub const PHOTO_FRAME: AssetDescriptor =
    AssetDescriptor::new("photo-frame", "model/photo-frame/scene.gltf", AssetKind::Model);
pub const AIR_CONDITIONER: AssetDescriptor = AssetDescriptor::new(
    "air-conditioner",
    "model/air-conditioner/scene.gltf",
    AssetKind::Model,
);
pub const TUBELIGHT: AssetDescriptor =
    AssetDescriptor::new("tubelight", "model/tubelight/scene.gltf", AssetKind::Model);
pub const ELECTRICAL_SWITCH: AssetDescriptor = AssetDescriptor::new(
    "electrical-switch",
    "model/electrical-switch/scene.gltf",
    AssetKind::Model,
);
pub const TV_REMOTE: AssetDescriptor =
    AssetDescriptor::new("tv-remote", "model/tv-remote/scene.gltf", AssetKind::Model);

// Room shell and TV body textures
pub const WALL_TEXTURE_1: AssetDescriptor =
    AssetDescriptor::new("wall-texture1", "texture/wall-texture1.jpg", AssetKind::Texture);
pub const WALL_TEXTURE_2: AssetDescriptor =
    AssetDescriptor::new("wall-texture2", "texture/wall-texture2.jpg", AssetKind::Texture);
pub const FLOOR_TEXTURE: AssetDescriptor =
    AssetDescriptor::new("floor-texture", "texture/floor-texture.jpg", AssetKind::Texture);
pub const CEILING_TEXTURE: AssetDescriptor = AssetDescriptor::new(
    "ceiling-texture",
    "texture/ceiling-texture.jpg",
    AssetKind::Texture,
);
pub const TV_BODY_TEXTURE: AssetDescriptor = AssetDescriptor::new(
    "tv-body-texture",
    "texture/tv-body-texture.png",
    AssetKind::Texture,
);

// TV slideshow images
pub const SCREEN_TEXTURE_1: AssetDescriptor = AssetDescriptor::new(
    "screen-texture1",
    "texture/screen-texture1.jpg",
    AssetKind::Texture,
);
pub const SCREEN_TEXTURE_2: AssetDescriptor = AssetDescriptor::new(
    "screen-texture2",
    "texture/screen-texture2.jpg",
    AssetKind::Texture,
);
pub const SCREEN_TEXTURE_3: AssetDescriptor = AssetDescriptor::new(
    "screen-texture3",
    "texture/screen-texture3.jpg",
    AssetKind::Texture,
);
pub const SCREEN_TEXTURE_4: AssetDescriptor = AssetDescriptor::new(
    "screen-texture4",
    "texture/screen-texture4.jpg",
    AssetKind::Texture,
);
pub const SCREEN_TEXTURE_5: AssetDescriptor = AssetDescriptor::new(
    "screen-texture5",
    "texture/screen-texture5.jpg",
    AssetKind::Texture,
);

// TV video clips
pub const SCREEN_VIDEO_1: AssetDescriptor = AssetDescriptor::new(
    "screen-animation-video1",
    "texture/screen-animation-video1.mp4",
    AssetKind::VideoClip,
);
pub const SCREEN_VIDEO_2: AssetDescriptor = AssetDescriptor::new(
    "screen-animation-video2",
    "texture/screen-animation-video2.mp4",
    AssetKind::VideoClip,
);
pub const SCREEN_VIDEO_3: AssetDescriptor = AssetDescriptor::new(
    "screen-animation-video3",
    "texture/screen-animation-video3.mp4",
    AssetKind::VideoClip,
);

// Background music
pub const BACKGROUND_MUSIC_1: AssetDescriptor = AssetDescriptor::new(
    "tv-room-background-music1",
    "music/tv-room-background-music1.mp3",
    AssetKind::AudioTrack,
);
pub const BACKGROUND_MUSIC_2: AssetDescriptor = AssetDescriptor::new(
    "tv-room-background-music2",
    "music/tv-room-background-music2.mp3",
    AssetKind::AudioTrack,
);
pub const BACKGROUND_MUSIC_3: AssetDescriptor = AssetDescriptor::new(
    "tv-room-background-music3",
    "music/tv-room-background-music3.mp3",
    AssetKind::AudioTrack,
);
pub const BACKGROUND_MUSIC_4: AssetDescriptor = AssetDescriptor::new(
    "tv-room-background-music4",
    "music/tv-room-background-music4.mp3",
    AssetKind::AudioTrack,
);
pub const BACKGROUND_MUSIC_5: AssetDescriptor = AssetDescriptor::new(
    "tv-room-background-music5",
    "music/tv-room-background-music5.mp3",
    AssetKind::AudioTrack,
);

/// Every external asset the scene references.
pub const ASSET_REGISTRY: &[AssetDescriptor] = &[
    TV_TABLE,
    FLOOR_LAMP,
    SOFA,
    DOOR,
    SLIDING_WINDOW,
    CEILING_FAN,
    PHOTO_FRAME,
    AIR_CONDITIONER,
    TUBELIGHT,
    ELECTRICAL_SWITCH,
    TV_REMOTE,
    WALL_TEXTURE_1,
    WALL_TEXTURE_2,
    FLOOR_TEXTURE,
    CEILING_TEXTURE,
    TV_BODY_TEXTURE,
    SCREEN_TEXTURE_1,
    SCREEN_TEXTURE_2,
    SCREEN_TEXTURE_3,
    SCREEN_TEXTURE_4,
    SCREEN_TEXTURE_5,
    SCREEN_VIDEO_1,
    SCREEN_VIDEO_2,
    SCREEN_VIDEO_3,
    BACKGROUND_MUSIC_1,
    BACKGROUND_MUSIC_2,
    BACKGROUND_MUSIC_3,
    BACKGROUND_MUSIC_4,
    BACKGROUND_MUSIC_5,
];

pub fn lookup(logical_name: &str) -> Option<&'static AssetDescriptor> {
    ASSET_REGISTRY
        .iter()
        .find(|asset| asset.logical_name == logical_name)
}

/// Logical name for a path, falling back to the path itself for unregistered assets.
pub fn name_for_path(path: &str) -> &str {
    ASSET_REGISTRY
        .iter()
        .find(|asset| asset.path == path)
        .map(|asset| asset.logical_name)
        .unwrap_or(path)
}

pub fn of_kind(kind: AssetKind) -> impl Iterator<Item = &'static AssetDescriptor> {
    ASSET_REGISTRY.iter().filter(move |asset| asset.kind == kind)
}
