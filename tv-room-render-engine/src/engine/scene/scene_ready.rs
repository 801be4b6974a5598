use bevy::pbr::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;

use crate::engine::scene::composer::{EmissiveOverride, ShadowedModel};

type ModelRoots<'w, 's> = Query<'w, 's, (&'static Name, Option<&'static EmissiveOverride>), With<ShadowedModel>>;
type ModelMeshes<'w, 's> =
    Query<'w, 's, Option<&'static MeshMaterial3d<StandardMaterial>>, With<Mesh3d>>;

/// Finish a placed model once its glTF scene is spawned.
pub fn prepare_loaded_model(
    trigger: Trigger<SceneInstanceReady>,
    mut commands: Commands,
    roots: ModelRoots,
    children: Query<&Children>,
    meshes: ModelMeshes,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    finish_model(
        trigger.target(),
        &mut commands,
        &roots,
        &children,
        &meshes,
        &mut materials,
    );
}

/// Make every mesh under `root` cast and receive shadows and apply the
/// model's emissive override. Returns the number of meshes touched.
fn finish_model(
    root: Entity,
    commands: &mut Commands,
    roots: &ModelRoots,
    children: &Query<&Children>,
    meshes: &ModelMeshes,
    materials: &mut Assets<StandardMaterial>,
) -> usize {
    let Ok((name, emissive)) = roots.get(root) else {
        return 0;
    };

    let mut mesh_count = 0;
    for descendant in children.iter_descendants(root) {
        let Ok(material) = meshes.get(descendant) else {
            continue;
        };
        mesh_count += 1;

        commands
            .entity(descendant)
            .remove::<(NotShadowCaster, NotShadowReceiver)>();

        let (Some(EmissiveOverride(glow)), Some(material)) = (emissive, material) else {
            continue;
        };
        // Keep the model's own textures, only add the glow.
        let mut glowing = materials.get(&material.0).cloned().unwrap_or_default();
        glowing.emissive = glow.color.to_linear() * glow.intensity;
        commands
            .entity(descendant)
            .insert(MeshMaterial3d(materials.add(glowing)));
    }

    debug!("{} ready with {} meshes", name, mesh_count);
    mesh_count
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;
    use bevy::ecs::world::CommandQueue;
    use constants::placement::find;

    use super::*;
    use crate::engine::scene::composer::place_loaded_object;

    fn finish(
        In(root): In<Entity>,
        mut commands: Commands,
        roots: ModelRoots,
        children: Query<&Children>,
        meshes: ModelMeshes,
        mut materials: ResMut<Assets<StandardMaterial>>,
    ) -> usize {
        finish_model(root, &mut commands, &roots, &children, &meshes, &mut materials)
    }

    fn world_with_model(name: &str) -> (World, Entity) {
        let mut world = World::new();
        world.insert_resource(Assets::<StandardMaterial>::default());
        let mut queue = CommandQueue::default();
        let root = {
            let mut commands = Commands::new(&mut queue, &world);
            place_loaded_object(&mut commands, find(name).unwrap(), Handle::default(), None)
        };
        queue.apply(&mut world);
        (world, root)
    }

    #[test]
    fn emissive_meshes_glow_and_keep_their_texture() {
        let (mut world, root) = world_with_model("tubelight");
        let texture: Handle<Image> = Handle::default();
        let original = world
            .resource_mut::<Assets<StandardMaterial>>()
            .add(StandardMaterial {
                base_color_texture: Some(texture.clone()),
                ..default()
            });
        let tube = world
            .spawn((
                Mesh3d(Handle::default()),
                MeshMaterial3d(original.clone()),
                NotShadowCaster,
                ChildOf(root),
            ))
            .id();

        assert_eq!(world.run_system_once_with(finish, root).unwrap(), 1);

        assert!(world.get::<NotShadowCaster>(tube).is_none());
        let material = world.get::<MeshMaterial3d<StandardMaterial>>(tube).unwrap();
        assert_ne!(material.0, original);
        let glowing = world
            .resource::<Assets<StandardMaterial>>()
            .get(&material.0)
            .unwrap();
        assert_eq!(glowing.base_color_texture, Some(texture));
        assert!(glowing.emissive.red > 1.0);
    }

    #[test]
    fn nested_meshes_receive_shadows_without_material_changes() {
        let (mut world, root) = world_with_model("sofa");
        let original = world
            .resource_mut::<Assets<StandardMaterial>>()
            .add(StandardMaterial::default());
        let node = world.spawn((Transform::default(), ChildOf(root))).id();
        let cushion = world
            .spawn((
                Mesh3d(Handle::default()),
                MeshMaterial3d(original.clone()),
                NotShadowReceiver,
                ChildOf(node),
            ))
            .id();

        assert_eq!(world.run_system_once_with(finish, root).unwrap(), 1);
        assert!(world.get::<NotShadowReceiver>(cushion).is_none());
        assert_eq!(
            world.get::<MeshMaterial3d<StandardMaterial>>(cushion).unwrap().0,
            original
        );
    }

    #[test]
    fn ignores_scenes_that_are_not_placed_models() {
        let mut world = World::new();
        world.insert_resource(Assets::<StandardMaterial>::default());
        let stray = world.spawn(Transform::default()).id();
        assert_eq!(world.run_system_once_with(finish, stray).unwrap(), 0);
    }
}
