use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use constants::placement::{ROOM_CENTRE, ROOM_SIZE};
use constants::texture::{ROOM_FACE_TEXTURES, RoomFace};

use crate::engine::loading::diagnostics::TrackedAssets;

#[derive(Component, Debug, Clone, Copy)]
pub struct RoomFaceMarker(pub RoomFace);

/// Outward direction of a face from the room centre, and the up vector used to
/// orient its plane.
fn face_axes(face: RoomFace) -> (Vec3, Vec3) {
    match face {
        RoomFace::Right => (Vec3::X, Vec3::Y),
        RoomFace::Left => (Vec3::NEG_X, Vec3::Y),
        RoomFace::Ceiling => (Vec3::Y, Vec3::Z),
        RoomFace::Floor => (Vec3::NEG_Y, Vec3::Z),
        RoomFace::Front => (Vec3::Z, Vec3::Y),
        RoomFace::Back => (Vec3::NEG_Z, Vec3::Y),
    }
}

/// Plane size and transform of one face, with the plane's normal pointing into
/// the room.
pub fn face_layout(face: RoomFace) -> (Vec2, Transform) {
    let (outward, up) = face_axes(face);
    let half = ROOM_SIZE / 2.0;
    let offset = outward * (outward.abs().dot(half));

    // Plane width runs along `right`, height along `up`.
    let right = up.cross(-outward);
    let size = Vec2::new(right.abs().dot(ROOM_SIZE), up.abs().dot(ROOM_SIZE));

    let transform = Transform::from_translation(ROOM_CENTRE + offset).looking_to(outward, up);
    (size, transform)
}

pub fn spawn_room(
    commands: &mut Commands,
    asset_server: &AssetServer,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    tracked: &mut TrackedAssets,
) {
    for face_texture in ROOM_FACE_TEXTURES {
        let path = face_texture.texture.path;
        let texture: Handle<Image> = asset_server.load(path);
        tracked.track(path, texture.clone().untyped());

        let (size, transform) = face_layout(face_texture.face);
        commands.spawn((
            Name::new(format!("room-{:?}", face_texture.face).to_lowercase()),
            RoomFaceMarker(face_texture.face),
            Mesh3d(meshes.add(Rectangle::from_size(size))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color_texture: Some(texture),
                perceptual_roughness: 1.0,
                ..default()
            })),
            transform,
            NotShadowCaster,
        ));
    }
}
