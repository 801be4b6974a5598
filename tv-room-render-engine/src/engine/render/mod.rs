//! Custom materials used by the room.

/// Textured, fixed-light material for the procedural TV body.
pub mod tv_body_material;
