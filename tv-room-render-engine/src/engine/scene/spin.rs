use bevy::prelude::*;

/// Continuous rotation about the vertical axis, applied once per rendered frame.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub radians_per_frame: f32,
}

pub fn spin_system(mut spinning: Query<(&Spin, &mut Transform)>) {
    for (spin, mut transform) in &mut spinning {
        transform.rotate_y(spin.radians_per_frame);
    }
}
