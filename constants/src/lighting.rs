use bevy::color::Color;
use bevy::math::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    Point,
    Spot { outer_angle: f32 },
    Ambient,
}

/// A light owned by the scene. Intensities are authored in scene units and
/// scaled into renderer units by [`crate::render_settings`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSpec {
    pub kind: LightKind,
    pub color: Color,
    pub intensity: f32,
    pub range: f32,
    pub position: Vec3,
    pub target: Option<Vec3>,
    pub shadows: bool,
}

pub const WARM_LAMP_COLOUR: Color = Color::srgb(1.0, 0.8, 0.6);
pub const TUBELIGHT_EMISSIVE: Color = Color::srgb(0.98, 0.98, 0.98);

pub const AMBIENT_LIGHT: LightSpec = LightSpec {
    kind: LightKind::Ambient,
    color: Color::WHITE,
    intensity: 0.01,
    range: 0.0,
    position: Vec3::ZERO,
    target: None,
    shadows: false,
};

/// Point light that follows the cursor around the TV assembly.
pub const ORBIT_LIGHT: LightSpec = LightSpec {
    kind: LightKind::Point,
    color: Color::WHITE,
    intensity: 2.0,
    range: 50.0,
    position: Vec3::new(0.0, 3.0, 5.0),
    target: None,
    shadows: true,
};

pub const LEFT_LAMP_LIGHT: LightSpec = LightSpec {
    kind: LightKind::Point,
    color: WARM_LAMP_COLOUR,
    intensity: 3.0,
    range: 9.0,
    position: Vec3::new(-3.5, 0.5, -4.13),
    target: None,
    shadows: false,
};

pub const RIGHT_LAMP_LIGHT: LightSpec = LightSpec {
    kind: LightKind::Point,
    color: WARM_LAMP_COLOUR,
    intensity: 3.0,
    range: 9.0,
    position: Vec3::new(3.5, 0.5, -4.13),
    target: None,
    shadows: false,
};

pub const TUBELIGHT_SPOT: LightSpec = LightSpec {
    kind: LightKind::Spot {
        outer_angle: std::f32::consts::FRAC_PI_2,
    },
    color: Color::WHITE,
    intensity: 30.0,
    range: 100.0,
    position: Vec3::new(4.9, 3.3, -0.5),
    target: Some(Vec3::ZERO),
    shadows: true,
};

/// Emissive strength applied to the tubelight meshes.
pub const TUBELIGHT_EMISSIVE_INTENSITY: f32 = 1.5;

/// View-space light position baked into the TV body shader.
pub const TV_BODY_LIGHT_POSITION: Vec3 = Vec3::new(0.0, 3.0, 5.0);
pub const TV_BODY_AMBIENT: Color = Color::WHITE;
