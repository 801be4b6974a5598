use bevy::prelude::*;
use bevy::reflect::TypePath;
use bevy::render::render_resource::{AsBindGroup, ShaderRef};
use constants::lighting::{TV_BODY_AMBIENT, TV_BODY_LIGHT_POSITION};
use constants::render_settings::{TV_BODY_AMBIENT_FACTOR, TV_BODY_SHADER_PATH};

/// TV body shader material: base texture lit by one point light fixed relative
/// to the camera plus a share of a constant ambient colour. Scene lights do not
/// affect it.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct TvBodyMaterial {
    /// xyz = light position in view space.
    #[uniform(0)]
    pub light_position: Vec4,

    /// rgb = ambient colour, a = ambient factor.
    #[uniform(1)]
    pub ambient: Vec4,

    #[texture(2)]
    #[sampler(3)]
    pub texture: Option<Handle<Image>>,
}

impl TvBodyMaterial {
    pub fn with_texture(texture: Handle<Image>) -> Self {
        let ambient = TV_BODY_AMBIENT.to_linear();
        Self {
            light_position: TV_BODY_LIGHT_POSITION.extend(1.0),
            ambient: Vec4::new(ambient.red, ambient.green, ambient.blue, TV_BODY_AMBIENT_FACTOR),
            texture: Some(texture),
        }
    }
}

impl Material for TvBodyMaterial {
    fn fragment_shader() -> ShaderRef {
        TV_BODY_SHADER_PATH.into()
    }
}
