use bevy::math::Vec3;

/// Distance the camera moves per key press.
pub const MOVE_STEP: f32 = 0.1;

/// Background music volume change per key press.
pub const VOLUME_STEP: f32 = 0.1;

/// Inclusive bounds for the camera position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl CameraBounds {
    pub fn clamp(&self, position: Vec3) -> Vec3 {
        position.clamp(self.min, self.max)
    }

    pub fn contains(&self, position: Vec3) -> bool {
        position.cmpge(self.min).all() && position.cmple(self.max).all()
    }
}

pub const CAMERA_BOUNDS: CameraBounds = CameraBounds {
    min: Vec3::new(-5.0, -2.0, -5.0),
    max: Vec3::new(5.0, 5.0, 5.0),
};

/// Radius of the movable light's circular path around the TV assembly.
pub const LIGHT_ORBIT_RADIUS: f32 = 2.0;

/// Radians of camera orbit per pixel of left-drag.
pub const ORBIT_DRAG_SENSITIVITY: f32 = 0.005;

/// Largest camera elevation above or below the target while orbiting, in radians.
pub const ORBIT_PITCH_LIMIT: f32 = 1.5;

/// Fraction of the remaining distance the camera covers per second of easing.
pub const CAMERA_EASE_RATE: f32 = 12.0;

/// Scene units the camera dollies per wheel line.
pub const DOLLY_STEP: f32 = 0.5;

/// Closest the camera may dolly to its target.
pub const MIN_DOLLY_DISTANCE: f32 = 0.5;

/// Scene units of camera pan per pixel of right-drag.
pub const PAN_DRAG_SENSITIVITY: f32 = 0.01;
