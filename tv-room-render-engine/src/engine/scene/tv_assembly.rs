use std::time::Duration;

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use constants::media::{IMAGE_AUTOPLAY_PERIOD_MS, VIDEO_TEXTURE_HEIGHT, VIDEO_TEXTURE_WIDTH};
use constants::placement::{
    TV_ASSEMBLY_POSITION, TV_BODY_PARTS, TV_GROUP_POSITION, TV_GROUP_SCALE, TV_SCREEN_POSITION,
    TV_SCREEN_SIZE,
};

use crate::engine::media::screen_content::{
    ScreenContent, ScreenMaterials, ScreenNodes, ScreenSources,
};
use crate::engine::render::tv_body_material::TvBodyMaterial;

/// Group entities of the TV assembly. The loaded table joins `root`; the body
/// and screens live under `tv_group`.
#[derive(Resource, Debug, Clone, Copy)]
pub struct TvAssembly {
    pub root: Entity,
    pub tv_group: Entity,
    /// World position the movable light orbits.
    pub anchor: Vec3,
}

/// Textures the screens display.
pub struct ScreenTextures {
    pub video: Handle<Image>,
    pub images: Vec<Handle<Image>>,
}

/// Black frame the browser video is copied into.
pub fn blank_video_texture() -> Image {
    Image::new_fill(
        Extent3d {
            width: VIDEO_TEXTURE_WIDTH,
            height: VIDEO_TEXTURE_HEIGHT,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &[0, 0, 0, 255],
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

fn screen_material(texture: Option<Handle<Image>>) -> StandardMaterial {
    StandardMaterial {
        base_color_texture: texture,
        unlit: true,
        ..default()
    }
}

/// Build the TV assembly synchronously: procedural body parts with the shared
/// body material, the attached video screen and the detached image screen.
pub fn spawn_tv_assembly(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    body_material: Handle<TvBodyMaterial>,
    textures: ScreenTextures,
    sources: ScreenSources,
) -> (TvAssembly, ScreenContent, ScreenMaterials) {
    let root = commands
        .spawn((
            Name::new("tv-assembly"),
            Transform::from_translation(TV_ASSEMBLY_POSITION),
            Visibility::default(),
        ))
        .id();

    let tv_group = commands
        .spawn((
            Name::new("tv"),
            Transform::from_translation(TV_GROUP_POSITION).with_scale(Vec3::splat(TV_GROUP_SCALE)),
            Visibility::default(),
            ChildOf(root),
        ))
        .id();

    for part in TV_BODY_PARTS {
        commands.spawn((
            Name::new(part.name),
            Mesh3d(meshes.add(Cuboid::from_size(part.size))),
            MeshMaterial3d(body_material.clone()),
            Transform::from_translation(part.position),
            ChildOf(tv_group),
        ));
    }

    let (width, height) = TV_SCREEN_SIZE;
    let screen_mesh = meshes.add(Rectangle::new(width, height));

    let video_material = materials.add(screen_material(Some(textures.video.clone())));
    let video_screen = commands
        .spawn((
            Name::new("tv-screen-video"),
            Mesh3d(screen_mesh.clone()),
            MeshMaterial3d(video_material.clone()),
            Transform::from_translation(TV_SCREEN_POSITION),
            Visibility::Inherited,
            ChildOf(tv_group),
        ))
        .id();

    let first_image = textures.images.get(sources.images.index()).cloned();
    let image_material = materials.add(screen_material(first_image));
    let image_screen = commands
        .spawn((
            Name::new("tv-screen-image"),
            Mesh3d(screen_mesh),
            MeshMaterial3d(image_material.clone()),
            Transform::from_translation(TV_SCREEN_POSITION),
            Visibility::Hidden,
        ))
        .id();

    let nodes = ScreenNodes {
        tv_group,
        video_screen,
        image_screen,
    };
    let content = ScreenContent::new(
        nodes,
        sources.clips,
        sources.images,
        Duration::from_millis(IMAGE_AUTOPLAY_PERIOD_MS),
    );
    let screen_materials = ScreenMaterials {
        video_texture: textures.video,
        video_material,
        image_material,
        image_textures: textures.images,
    };
    let assembly = TvAssembly {
        root,
        tv_group,
        anchor: TV_ASSEMBLY_POSITION,
    };

    (assembly, content, screen_materials)
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;
    use bevy::ecs::world::CommandQueue;

    use super::*;
    use crate::engine::media::cycler::MediaCycler;
    use crate::engine::media::screen_content::{ScreenMode, drive_image_autoplay};
    use crate::engine::media::video_player::{HeadlessVideoPlayer, VideoPlayer};

    const IMAGES: [&str; 5] = ["i1.jpg", "i2.jpg", "i3.jpg", "i4.jpg", "i5.jpg"];

    struct Built {
        world: World,
        assembly: TvAssembly,
        content: ScreenContent,
        screen_materials: ScreenMaterials,
    }

    /// Spawn the assembly into a fresh world. The screen materials live in the
    /// world so the screen systems can write to them.
    fn build() -> Built {
        let mut world = World::new();
        let mut meshes = Assets::<Mesh>::default();
        let mut materials = Assets::<StandardMaterial>::default();
        let mut images = Assets::<Image>::default();
        let sources = ScreenSources {
            clips: MediaCycler::new("clips", ["v1.mp4", "v2.mp4"]).unwrap(),
            images: MediaCycler::new("images", IMAGES).unwrap(),
        };
        let textures = ScreenTextures {
            video: images.add(blank_video_texture()),
            images: IMAGES.iter().map(|_| images.add(Image::default())).collect(),
        };

        let mut queue = CommandQueue::default();
        let (assembly, content, screen_materials) = {
            let mut commands = Commands::new(&mut queue, &world);
            spawn_tv_assembly(
                &mut commands,
                &mut meshes,
                &mut materials,
                Handle::default(),
                textures,
                sources,
            )
        };
        queue.apply(&mut world);
        world.insert_resource(materials);

        Built {
            world,
            assembly,
            content,
            screen_materials,
        }
    }

    fn parent_of(world: &World, entity: Entity) -> Option<Entity> {
        world.get::<ChildOf>(entity).map(|child_of| child_of.parent())
    }

    fn image_screen_texture(world: &World, screen_materials: &ScreenMaterials) -> Option<Handle<Image>> {
        world
            .resource::<Assets<StandardMaterial>>()
            .get(&screen_materials.image_material)
            .and_then(|material| material.base_color_texture.clone())
    }

    #[test]
    fn only_the_video_screen_starts_attached() {
        let Built {
            world,
            assembly,
            content,
            screen_materials,
        } = build();
        let nodes = content.nodes();

        assert_eq!(content.mode(), ScreenMode::Video);
        assert_eq!(parent_of(&world, nodes.video_screen), Some(assembly.tv_group));
        assert_eq!(parent_of(&world, nodes.image_screen), None);
        assert_eq!(world.get::<Visibility>(nodes.image_screen), Some(&Visibility::Hidden));
        assert_eq!(
            image_screen_texture(&world, &screen_materials),
            Some(screen_materials.image_textures[0].clone())
        );
    }

    #[test]
    fn body_parts_and_group_hang_off_the_assembly() {
        let Built { world, assembly, .. } = build();
        assert_eq!(parent_of(&world, assembly.tv_group), Some(assembly.root));

        let group_children = world.get::<Children>(assembly.tv_group).unwrap();
        // Five body parts plus the video screen.
        assert_eq!(group_children.len(), TV_BODY_PARTS.len() + 1);

        let group = world.get::<Transform>(assembly.tv_group).unwrap();
        assert_eq!(group.scale, Vec3::splat(0.6));
        assert_eq!(assembly.anchor, Vec3::new(0.0, -0.6, -4.5));
    }

    #[test]
    fn slideshow_swaps_screens_and_shows_the_fourth_image_after_three_periods() {
        let Built {
            mut world,
            assembly,
            mut content,
            screen_materials,
        } = build();
        let nodes = content.nodes();
        let mut player = HeadlessVideoPlayer::default();
        content.start_video(&mut player).unwrap();

        let mut queue = CommandQueue::default();
        {
            let mut commands = Commands::new(&mut queue, &world);
            content.show_images(&mut commands, &mut player);
        }
        queue.apply(&mut world);

        assert_eq!(parent_of(&world, nodes.image_screen), Some(assembly.tv_group));
        assert_eq!(world.get::<Visibility>(nodes.image_screen), Some(&Visibility::Inherited));
        assert_eq!(parent_of(&world, nodes.video_screen), None);
        assert_eq!(world.get::<Visibility>(nodes.video_screen), Some(&Visibility::Hidden));
        assert!(player.is_paused());

        world.insert_resource(content);
        world.insert_resource(screen_materials.clone());
        world.init_resource::<Time>();
        for _ in 0..3 {
            world
                .resource_mut::<Time>()
                .advance_by(Duration::from_millis(IMAGE_AUTOPLAY_PERIOD_MS));
            world.run_system_once(drive_image_autoplay).unwrap();
        }

        assert_eq!(world.resource::<ScreenContent>().image_index(), 3);
        assert_eq!(
            image_screen_texture(&world, &screen_materials),
            Some(screen_materials.image_textures[3].clone())
        );

        let mut content = world.remove_resource::<ScreenContent>().unwrap();
        {
            let mut commands = Commands::new(&mut queue, &world);
            content.show_video(&mut commands, &mut player).unwrap();
        }
        queue.apply(&mut world);

        assert_eq!(content.mode(), ScreenMode::Video);
        assert!(!content.is_autoplay_running());
        assert!(!player.is_paused());
        assert_eq!(parent_of(&world, nodes.video_screen), Some(assembly.tv_group));
        assert_eq!(world.get::<Visibility>(nodes.video_screen), Some(&Visibility::Inherited));
        assert_eq!(parent_of(&world, nodes.image_screen), None);
        assert_eq!(world.get::<Visibility>(nodes.image_screen), Some(&Visibility::Hidden));
    }

    #[test]
    fn video_texture_matches_frame_size() {
        let image = blank_video_texture();
        assert_eq!(image.width(), VIDEO_TEXTURE_WIDTH);
        assert_eq!(image.height(), VIDEO_TEXTURE_HEIGHT);
        assert_eq!(
            image.data.as_ref().map(Vec::len),
            Some((VIDEO_TEXTURE_WIDTH * VIDEO_TEXTURE_HEIGHT * 4) as usize)
        );
    }
}
