use std::f32::consts::PI;

use bevy::prelude::*;
use constants::controls::LIGHT_ORBIT_RADIUS;

use crate::engine::scene::tv_assembly::TvAssembly;
use crate::engine::systems::resize::ViewportSize;

/// The point light that follows the cursor around the TV.
#[derive(Component, Debug, Default)]
pub struct OrbitLight;

/// Cursor position in logical pixels to `[-1, 1]` on both axes, y up.
pub fn normalize_cursor(cursor: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        2.0 * cursor.x / viewport.x - 1.0,
        -(2.0 * cursor.y / viewport.y) + 1.0,
    ))
}

/// Position on the light's circle around `anchor`: the horizontal cursor
/// position picks the angle, the vertical one lifts the light.
pub fn orbit_light_position(anchor: Vec3, normalized: Vec2, radius: f32) -> Vec3 {
    let angle = normalized.x * PI;
    Vec3::new(
        anchor.x + radius * angle.sin(),
        anchor.y + normalized.y,
        anchor.z + radius * angle.cos(),
    )
}

pub fn move_orbit_light(
    mut cursor_moved: EventReader<CursorMoved>,
    viewport: Res<ViewportSize>,
    tv_assembly: Res<TvAssembly>,
    mut lights: Query<&mut Transform, With<OrbitLight>>,
) {
    let Some(cursor) = cursor_moved.read().last().map(|event| event.position) else {
        return;
    };
    let Some(normalized) = normalize_cursor(cursor, viewport.size) else {
        return;
    };

    let position = orbit_light_position(tv_assembly.anchor, normalized, LIGHT_ORBIT_RADIUS);
    for mut transform in &mut lights {
        transform.translation = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_maps_to_unit_square_with_y_up() {
        let viewport = Vec2::new(800.0, 600.0);
        assert_eq!(normalize_cursor(Vec2::new(400.0, 300.0), viewport), Some(Vec2::ZERO));
        assert_eq!(
            normalize_cursor(Vec2::new(0.0, 0.0), viewport),
            Some(Vec2::new(-1.0, 1.0))
        );
        assert_eq!(
            normalize_cursor(Vec2::new(800.0, 600.0), viewport),
            Some(Vec2::new(1.0, -1.0))
        );
        assert_eq!(normalize_cursor(Vec2::ONE, Vec2::new(0.0, 600.0)), None);
    }

    #[test]
    fn light_circles_the_anchor() {
        let anchor = Vec3::new(0.0, -0.6, -4.5);

        let centre = orbit_light_position(anchor, Vec2::ZERO, 2.0);
        assert!((centre - Vec3::new(0.0, -0.6, -2.5)).length() < 1e-5);

        let right = orbit_light_position(anchor, Vec2::new(0.5, 1.0), 2.0);
        assert!((right - Vec3::new(2.0, 0.4, -4.5)).length() < 1e-5);

        for x in [-1.0, -0.3, 0.2, 0.9] {
            let position = orbit_light_position(anchor, Vec2::new(x, 0.0), 2.0);
            let horizontal = Vec2::new(position.x - anchor.x, position.z - anchor.z);
            assert!((horizontal.length() - 2.0).abs() < 1e-5);
        }
    }
}
