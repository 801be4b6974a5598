use bevy::prelude::*;
use constants::lighting::{LightKind, LightSpec};
use constants::placement::{EmissiveSpec, PlacedObjectSpec};
use constants::render_settings::{AMBIENT_BRIGHTNESS_PER_UNIT, LUMENS_PER_SCENE_UNIT};

use crate::engine::scene::spin::Spin;

/// Root of a loaded model whose meshes cast and receive shadows once the
/// scene instance is ready.
#[derive(Component, Debug, Default)]
pub struct ShadowedModel;

/// Emissive material applied to every mesh of a loaded model.
#[derive(Component, Debug, Clone, Copy)]
pub struct EmissiveOverride(pub EmissiveSpec);

/// A light spawned from a placed object or the scene's own light list.
#[derive(Component, Debug, Clone, Copy)]
pub struct SceneLight;

pub fn object_transform(spec: &PlacedObjectSpec) -> Transform {
    let rotation = spec.rotation;
    Transform {
        translation: spec.position,
        rotation: Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z),
        scale: spec.scale,
    }
}

/// Attach a loaded model to the world, or to `parent` when it belongs to a
/// group. Derived lights are spawned at their own world positions.
pub fn place_loaded_object(
    commands: &mut Commands,
    spec: &'static PlacedObjectSpec,
    scene: Handle<Scene>,
    parent: Option<Entity>,
) -> Entity {
    let mut entity = commands.spawn((
        Name::new(spec.name),
        SceneRoot(scene),
        object_transform(spec),
        ShadowedModel,
    ));

    if let Some(emissive) = spec.emissive {
        entity.insert(EmissiveOverride(emissive));
    }
    if let Some(radians_per_frame) = spec.spin_per_frame {
        entity.insert(Spin { radians_per_frame });
    }
    if let Some(parent) = parent {
        entity.insert(ChildOf(parent));
    }
    let id = entity.id();

    for light in spec.derived_lights {
        spawn_light(commands, light);
    }
    id
}

/// Spawn a light entity. Ambient light is a resource and yields no entity.
pub fn spawn_light(commands: &mut Commands, spec: &LightSpec) -> Option<Entity> {
    let transform = match spec.target {
        Some(target) => Transform::from_translation(spec.position).looking_at(target, Vec3::Y),
        None => Transform::from_translation(spec.position),
    };

    let entity = match spec.kind {
        LightKind::Point => commands.spawn((
            SceneLight,
            PointLight {
                color: spec.color,
                intensity: spec.intensity * LUMENS_PER_SCENE_UNIT,
                range: spec.range,
                shadows_enabled: spec.shadows,
                ..default()
            },
            transform,
        )),
        LightKind::Spot { outer_angle } => commands.spawn((
            SceneLight,
            SpotLight {
                color: spec.color,
                intensity: spec.intensity * LUMENS_PER_SCENE_UNIT,
                range: spec.range,
                shadows_enabled: spec.shadows,
                outer_angle,
                inner_angle: outer_angle,
                ..default()
            },
            transform,
        )),
        LightKind::Ambient => {
            commands.insert_resource(AmbientLight {
                color: spec.color,
                brightness: spec.intensity * AMBIENT_BRIGHTNESS_PER_UNIT,
                ..default()
            });
            return None;
        }
    };
    Some(entity.id())
}

#[cfg(test)]
mod tests {
    use bevy::ecs::world::CommandQueue;
    use constants::lighting::{AMBIENT_LIGHT, TUBELIGHT_SPOT};
    use constants::placement::find;

    use super::*;

    fn apply(world: &mut World, build: impl FnOnce(&mut Commands)) {
        let mut queue = CommandQueue::default();
        {
            let mut commands = Commands::new(&mut queue, world);
            build(&mut commands);
        }
        queue.apply(world);
    }

    #[test]
    fn transform_uses_authored_scale_position_and_rotation() {
        let sofa = find("sofa").unwrap();
        let transform = object_transform(sofa);
        assert_eq!(transform.translation, Vec3::new(-0.25, -2.0, 2.5));
        assert_eq!(transform.scale, Vec3::splat(0.02));

        // Half turn about Y faces the sofa towards the TV.
        let facing = transform.rotation * Vec3::Z;
        assert!((facing - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn lamp_brings_its_own_light() {
        let mut world = World::new();
        let lamp = find("floor-lamp-left").unwrap();
        let mut placed = Entity::PLACEHOLDER;
        apply(&mut world, |commands| {
            placed = place_loaded_object(commands, lamp, Handle::default(), None);
        });

        assert!(world.get::<ShadowedModel>(placed).is_some());
        assert!(world.get::<ChildOf>(placed).is_none());

        let lights: Vec<_> = world
            .query::<(&PointLight, &Transform)>()
            .iter(&world)
            .map(|(light, transform)| (light.range, transform.translation))
            .collect();
        assert_eq!(lights, vec![(9.0, Vec3::new(-3.5, 0.5, -4.13))]);
    }

    #[test]
    fn fan_spins_and_tubelight_glows() {
        let mut world = World::new();
        let mut fan = Entity::PLACEHOLDER;
        let mut tubelight = Entity::PLACEHOLDER;
        apply(&mut world, |commands| {
            fan = place_loaded_object(commands, find("ceiling-fan").unwrap(), Handle::default(), None);
            tubelight =
                place_loaded_object(commands, find("tubelight").unwrap(), Handle::default(), None);
        });

        assert_eq!(world.get::<Spin>(fan).map(|spin| spin.radians_per_frame), Some(0.3));
        assert!(world.get::<EmissiveOverride>(fan).is_none());
        assert!(world.get::<Spin>(tubelight).is_none());
        assert!(world.get::<EmissiveOverride>(tubelight).is_some());
        assert_eq!(world.query::<&SpotLight>().iter(&world).count(), 1);
    }

    #[test]
    fn grouped_object_is_attached_to_its_parent() {
        let mut world = World::new();
        let group = world.spawn(Transform::default()).id();
        let mut table = Entity::PLACEHOLDER;
        apply(&mut world, |commands| {
            table = place_loaded_object(commands, find("tv-table").unwrap(), Handle::default(), Some(group));
        });
        assert_eq!(world.get::<ChildOf>(table).map(|child_of| child_of.parent()), Some(group));
    }

    #[test]
    fn spot_light_points_at_its_target() {
        let mut world = World::new();
        let mut spot = None;
        apply(&mut world, |commands| {
            spot = spawn_light(commands, &TUBELIGHT_SPOT);
        });

        let transform = world.get::<Transform>(spot.unwrap()).unwrap();
        let to_target = (Vec3::ZERO - TUBELIGHT_SPOT.position).normalize();
        assert!((transform.forward().as_vec3() - to_target).length() < 1e-5);
    }

    #[test]
    fn ambient_light_becomes_a_resource() {
        let mut world = World::new();
        let mut spawned = Some(Entity::PLACEHOLDER);
        apply(&mut world, |commands| {
            spawned = spawn_light(commands, &AMBIENT_LIGHT);
        });
        assert!(spawned.is_none());
        let ambient = world.resource::<AmbientLight>();
        assert!(ambient.brightness > 0.0 && ambient.brightness < AMBIENT_BRIGHTNESS_PER_UNIT);
    }
}
