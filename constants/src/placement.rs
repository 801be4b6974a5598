use std::f32::consts::PI;

use bevy::math::Vec3;

use crate::assets::{
    AIR_CONDITIONER, AssetDescriptor, CEILING_FAN, DOOR, ELECTRICAL_SWITCH, FLOOR_LAMP,
    PHOTO_FRAME, SLIDING_WINDOW, SOFA, TUBELIGHT, TV_REMOTE, TV_TABLE,
};
use crate::lighting::{
    LEFT_LAMP_LIGHT, LightSpec, RIGHT_LAMP_LIGHT, TUBELIGHT_EMISSIVE,
    TUBELIGHT_EMISSIVE_INTENSITY, TUBELIGHT_SPOT,
};

/// Where a loaded model is attached once it arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentGroup {
    World,
    TvAssembly,
}

/// Material override turning every mesh of a model into a light emitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissiveSpec {
    pub color: bevy::color::Color,
    pub intensity: f32,
}

/// Static placement of one loaded model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedObjectSpec {
    /// Name used in diagnostics and entity names.
    pub name: &'static str,
    pub asset: AssetDescriptor,
    pub scale: Vec3,
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: Vec3,
    pub derived_lights: &'static [LightSpec],
    pub parent: ParentGroup,
    /// Vertical-axis rotation added every rendered frame, in radians.
    pub spin_per_frame: Option<f32>,
    pub emissive: Option<EmissiveSpec>,
}

impl PlacedObjectSpec {
    const fn base(name: &'static str, asset: AssetDescriptor) -> Self {
        Self {
            name,
            asset,
            scale: Vec3::ONE,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            derived_lights: &[],
            parent: ParentGroup::World,
            spin_per_frame: None,
            emissive: None,
        }
    }
}

pub const CEILING_FAN_SPIN_PER_FRAME: f32 = 0.3;

pub const PLACED_OBJECTS: &[PlacedObjectSpec] = &[
    PlacedObjectSpec {
        scale: Vec3::splat(0.23),
        position: Vec3::new(0.0, -1.5, 0.0),
        rotation: Vec3::new(0.0, -PI / 2.0, 0.0),
        parent: ParentGroup::TvAssembly,
        ..PlacedObjectSpec::base("tv-table", TV_TABLE)
    },
    PlacedObjectSpec {
        scale: Vec3::splat(0.3),
        position: Vec3::new(-3.5, 0.15, -4.13),
        rotation: Vec3::new(0.0, PI / 4.0, 0.0),
        derived_lights: &[LEFT_LAMP_LIGHT],
        ..PlacedObjectSpec::base("floor-lamp-left", FLOOR_LAMP)
    },
    PlacedObjectSpec {
        scale: Vec3::splat(0.3),
        position: Vec3::new(3.5, 0.15, -4.13),
        rotation: Vec3::new(0.0, PI / 2.0, 0.0),
        derived_lights: &[RIGHT_LAMP_LIGHT],
        ..PlacedObjectSpec::base("floor-lamp-right", FLOOR_LAMP)
    },
    PlacedObjectSpec {
        scale: Vec3::splat(0.02),
        position: Vec3::new(-0.25, -2.0, 2.5),
        rotation: Vec3::new(0.0, PI, 0.0),
        ..PlacedObjectSpec::base("sofa", SOFA)
    },
    PlacedObjectSpec {
        scale: Vec3::splat(0.025),
        position: Vec3::new(4.9, 0.5, 3.0),
        rotation: Vec3::new(0.0, PI, 0.0),
        ..PlacedObjectSpec::base("door", DOOR)
    },
    PlacedObjectSpec {
        scale: Vec3::new(0.02, 0.015, 0.01),
        position: Vec3::new(-5.05, 1.0, 0.0),
        rotation: Vec3::new(0.0, PI / 2.0, 0.0),
        ..PlacedObjectSpec::base("sliding-window", SLIDING_WINDOW)
    },
    PlacedObjectSpec {
        scale: Vec3::splat(0.3),
        position: Vec3::new(0.0, -0.7, 0.0),
        spin_per_frame: Some(CEILING_FAN_SPIN_PER_FRAME),
        ..PlacedObjectSpec::base("ceiling-fan", CEILING_FAN)
    },
    PlacedObjectSpec {
        scale: Vec3::splat(1.0),
        position: Vec3::new(4.93, 1.5, -2.5),
        rotation: Vec3::new(0.0, PI * 1.5, 0.0),
        ..PlacedObjectSpec::base("photo-frame", PHOTO_FRAME)
    },
    PlacedObjectSpec {
        scale: Vec3::splat(0.5),
        position: Vec3::new(0.0, 0.8, 4.8),
        rotation: Vec3::new(0.0, PI / 2.0, 0.0),
        ..PlacedObjectSpec::base("air-conditioner", AIR_CONDITIONER)
    },
    PlacedObjectSpec {
        scale: Vec3::splat(3.0),
        position: Vec3::new(4.9, 3.3, -1.1),
        rotation: Vec3::new(PI / 2.0, 0.0, PI / 2.0),
        derived_lights: &[TUBELIGHT_SPOT],
        emissive: Some(EmissiveSpec {
            color: TUBELIGHT_EMISSIVE,
            intensity: TUBELIGHT_EMISSIVE_INTENSITY,
        }),
        ..PlacedObjectSpec::base("tubelight", TUBELIGHT)
    },
    PlacedObjectSpec {
        scale: Vec3::splat(2.5),
        position: Vec3::new(5.0, 1.1, 1.0),
        rotation: Vec3::new(0.0, PI * 1.5, 0.0),
        ..PlacedObjectSpec::base("electrical-switch", ELECTRICAL_SWITCH)
    },
    PlacedObjectSpec {
        scale: Vec3::splat(0.004),
        position: Vec3::new(-1.7, -1.2, 2.6),
        rotation: Vec3::new(PI * 1.39, 0.0, PI * 1.35),
        ..PlacedObjectSpec::base("tv-remote", TV_REMOTE)
    },
];

pub fn find(name: &str) -> Option<&'static PlacedObjectSpec> {
    PLACED_OBJECTS.iter().find(|spec| spec.name == name)
}

/// Position of the TV assembly group (table + TV) in the room. The movable light
/// orbits this point.
pub const TV_ASSEMBLY_POSITION: Vec3 = Vec3::new(0.0, -0.6, -4.5);

/// Transform of the TV group inside the assembly.
pub const TV_GROUP_POSITION: Vec3 = Vec3::new(0.0, -0.23, 0.5);
pub const TV_GROUP_SCALE: f32 = 0.6;

/// Procedural box part of the TV body, in TV group space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TvBodyPart {
    pub name: &'static str,
    pub size: Vec3,
    pub position: Vec3,
}

pub const TV_BODY_PARTS: &[TvBodyPart] = &[
    TvBodyPart {
        name: "tv-frame",
        size: Vec3::new(5.0, 3.0, 0.2),
        position: Vec3::new(0.0, 2.0, 0.0),
    },
    TvBodyPart {
        name: "tv-stand-base",
        size: Vec3::new(2.5, 0.1, 0.8),
        position: Vec3::ZERO,
    },
    TvBodyPart {
        name: "tv-stand-pole",
        size: Vec3::new(0.5, 2.0, 0.1),
        position: Vec3::new(0.0, 1.0, 0.0),
    },
    TvBodyPart {
        name: "tv-stand-foot-left",
        size: Vec3::new(1.0, 0.1, 0.3),
        position: Vec3::new(-0.6, -0.05, 0.0),
    },
    TvBodyPart {
        name: "tv-stand-foot-right",
        size: Vec3::new(1.0, 0.1, 0.3),
        position: Vec3::new(0.6, -0.05, 0.0),
    },
];

/// Screen plane size and its position in front of the frame, in TV group space.
pub const TV_SCREEN_SIZE: (f32, f32) = (4.6, 2.6);
pub const TV_SCREEN_POSITION: Vec3 = Vec3::new(0.0, 2.0, 0.11);

/// Room shell dimensions (width, height, depth) and centre.
pub const ROOM_SIZE: Vec3 = Vec3::new(10.0, 6.0, 10.0);
pub const ROOM_CENTRE: Vec3 = Vec3::new(0.0, 1.0, 0.0);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetKind;

    #[test]
    fn every_placement_loads_a_model() {
        assert!(
            PLACED_OBJECTS
                .iter()
                .all(|spec| spec.asset.kind == AssetKind::Model)
        );
    }

    #[test]
    fn lamps_share_one_model_with_their_own_light() {
        let left = find("floor-lamp-left").unwrap();
        let right = find("floor-lamp-right").unwrap();
        assert_eq!(left.asset, right.asset);
        assert_eq!(left.derived_lights.len(), 1);
        assert_eq!(right.derived_lights.len(), 1);
        assert_ne!(left.derived_lights[0].position, right.derived_lights[0].position);
    }

    #[test]
    fn only_the_fan_spins_and_only_the_table_joins_the_tv() {
        let spinning: Vec<_> = PLACED_OBJECTS
            .iter()
            .filter(|spec| spec.spin_per_frame.is_some())
            .map(|spec| spec.name)
            .collect();
        assert_eq!(spinning, vec!["ceiling-fan"]);

        let tv_children: Vec<_> = PLACED_OBJECTS
            .iter()
            .filter(|spec| spec.parent == ParentGroup::TvAssembly)
            .map(|spec| spec.name)
            .collect();
        assert_eq!(tv_children, vec!["tv-table"]);
    }
}
