use bevy::math::Vec3;

/// Vertical field of view of the room camera, in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Authored start position. It sits behind the back wall, outside the movement
/// bounds, and is pulled inside by the first movement key.
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 1.0, 8.0);

/// Point the camera orbits and looks at.
pub const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Scene light intensities are authored in candela-like units; bevy wants lumens.
pub const LUMENS_PER_SCENE_UNIT: f32 = 4.0 * std::f32::consts::PI * 1000.0;

/// Ambient brightness (cd/m²) for an ambient intensity of 1.0.
pub const AMBIENT_BRIGHTNESS_PER_UNIT: f32 = 80.0;

/// Share of the ambient colour the TV body shader adds to diffuse lighting.
pub const TV_BODY_AMBIENT_FACTOR: f32 = 0.2;

pub const TV_BODY_SHADER_PATH: &str = "shaders/tv_body.wgsl";
