use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use constants::controls::{
    CAMERA_BOUNDS, CAMERA_EASE_RATE, CameraBounds, DOLLY_STEP, MIN_DOLLY_DISTANCE,
    ORBIT_DRAG_SENSITIVITY, ORBIT_PITCH_LIMIT, PAN_DRAG_SENSITIVITY,
};
use constants::render_settings::{CAMERA_START, CAMERA_TARGET};

/// Where the camera should be. Every movement clamps the position into
/// `bounds`; the authored start position is left as is until the first move.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct RoomCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub bounds: CameraBounds,
}

impl Default for RoomCamera {
    fn default() -> Self {
        Self {
            position: CAMERA_START,
            target: CAMERA_TARGET,
            bounds: CAMERA_BOUNDS,
        }
    }
}

impl RoomCamera {
    /// Move by `delta`, clamping each axis into the bounds.
    pub fn translate(&mut self, delta: Vec3) -> Vec3 {
        self.position = self.bounds.clamp(self.position + delta);
        self.position
    }

    /// Orbit around the target by `yaw` about the vertical axis and `pitch`
    /// towards the pole, keeping the distance to the target.
    pub fn orbit(&mut self, yaw: f32, pitch: f32) -> Vec3 {
        let offset = self.position - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return self.position;
        }

        let current_yaw = offset.x.atan2(offset.z);
        let current_pitch = (offset.y / radius).clamp(-1.0, 1.0).asin();
        let yaw = current_yaw + yaw;
        let pitch = (current_pitch + pitch).clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);

        let orbited = Vec3::new(
            radius * pitch.cos() * yaw.sin(),
            radius * pitch.sin(),
            radius * pitch.cos() * yaw.cos(),
        );
        self.position = self.bounds.clamp(self.target + orbited);
        self.position
    }

    /// Move toward the target by `amount` (away when negative), stopping
    /// `MIN_DOLLY_DISTANCE` short of it.
    pub fn dolly(&mut self, amount: f32) -> Vec3 {
        let offset = self.position - self.target;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return self.position;
        }

        let distance_after = (distance - amount).max(MIN_DOLLY_DISTANCE);
        self.position = self.bounds.clamp(self.target + offset * (distance_after / distance));
        self.position
    }

    /// Slide position and target together across the view plane. `delta` is
    /// in drag pixels, y down.
    pub fn pan(&mut self, delta: Vec2) -> Vec3 {
        let forward = (self.target - self.position).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        if right == Vec3::ZERO {
            return self.position;
        }
        let up = right.cross(forward);

        let shift = (-delta.x * right + delta.y * up) * PAN_DRAG_SENSITIVITY;
        let moved = self.bounds.clamp(self.position + shift);
        self.target += moved - self.position;
        self.position = moved;
        self.position
    }
}

/// Wheel movement in lines; pixel deltas are scaled down to match.
fn scroll_lines(events: &mut EventReader<MouseWheel>) -> f32 {
    events
        .read()
        .map(|event| match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y * 0.05,
        })
        .sum()
}

/// Step from `current` toward `target`, covering more ground on longer frames.
pub fn ease_towards(current: Vec3, target: Vec3, delta_secs: f32) -> Vec3 {
    current.lerp(target, (CAMERA_EASE_RATE * delta_secs).min(1.0))
}

pub fn spawn_room_camera(commands: &mut Commands, room_camera: &RoomCamera, projection: Projection) {
    commands.spawn((
        Name::new("room-camera"),
        Camera3d::default(),
        projection,
        Transform::from_translation(room_camera.position).looking_at(room_camera.target, Vec3::Y),
    ));
}

/// Apply left-drag orbit, right-drag pan and wheel dolly, then ease the
/// rendered camera toward the state.
pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut room_camera: ResMut<RoomCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
    if mouse_delta != Vec2::ZERO {
        if mouse_button.pressed(MouseButton::Left) {
            room_camera.orbit(
                -mouse_delta.x * ORBIT_DRAG_SENSITIVITY,
                mouse_delta.y * ORBIT_DRAG_SENSITIVITY,
            );
        } else if mouse_button.pressed(MouseButton::Right) {
            room_camera.pan(mouse_delta);
        }
    }

    let scroll = scroll_lines(&mut scroll_events);
    if scroll.abs() > f32::EPSILON {
        room_camera.dolly(scroll * DOLLY_STEP);
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    transform.translation = ease_towards(transform.translation, room_camera.position, time.delta_secs());
    transform.look_at(room_camera.target, Vec3::Y);
}
