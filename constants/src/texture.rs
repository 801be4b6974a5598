use crate::assets::{
    AssetDescriptor, CEILING_TEXTURE, FLOOR_TEXTURE, WALL_TEXTURE_1, WALL_TEXTURE_2,
};

/// Face of the room box, seen from inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomFace {
    Right,
    Left,
    Ceiling,
    Floor,
    Front,
    Back,
}

pub struct RoomFaceTexture {
    pub face: RoomFace,
    pub texture: AssetDescriptor,
}

/// Texture for each face of the room shell.
pub const ROOM_FACE_TEXTURES: &[RoomFaceTexture] = &[
    RoomFaceTexture {
        face: RoomFace::Right,
        texture: WALL_TEXTURE_1,
    },
    RoomFaceTexture {
        face: RoomFace::Left,
        texture: WALL_TEXTURE_1,
    },
    RoomFaceTexture {
        face: RoomFace::Ceiling,
        texture: CEILING_TEXTURE,
    },
    RoomFaceTexture {
        face: RoomFace::Floor,
        texture: FLOOR_TEXTURE,
    },
    RoomFaceTexture {
        face: RoomFace::Front,
        texture: WALL_TEXTURE_2,
    },
    RoomFaceTexture {
        face: RoomFace::Back,
        texture: WALL_TEXTURE_2,
    },
];
