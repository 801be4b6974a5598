use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::pbr::PointLightShadowMap;
use bevy::prelude::*;
use constants::assets::TV_BODY_TEXTURE;
use constants::lighting::{AMBIENT_LIGHT, ORBIT_LIGHT};
use constants::media::{AUDIO_TRACKS, INITIAL_MUSIC_VOLUME, SCREEN_IMAGES, VIDEO_CLIPS};
use constants::render_settings::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR};

// Crate engine modules
use crate::engine::camera::room_camera::{RoomCamera, camera_controller, spawn_room_camera};
use crate::engine::core::app_state::{ScenePhase, transition_to_ready};
use crate::engine::core::error::SceneError;
use crate::engine::core::window_config::create_window_config;
use crate::engine::input::keyboard::handle_keyboard_input;
use crate::engine::input::pointer::{OrbitLight, move_orbit_light};
use crate::engine::loading::diagnostics::{LoadDiagnostics, TrackedAssets, report_failed_assets};
use crate::engine::loading::model_loader::{
    PendingModels, complete_model_loads, request_model_loads,
};
use crate::engine::media::background_music::{BackgroundMusic, sync_background_music};
use crate::engine::media::cycler::MediaCycler;
use crate::engine::media::screen_content::{
    ScreenSources, drive_image_autoplay, start_tv_video, stream_video_frames,
};
use crate::engine::media::video_player::{collect_playback_failures, install_video_player};
use crate::engine::render::tv_body_material::TvBodyMaterial;
use crate::engine::scene::composer::spawn_light;
use crate::engine::scene::room::spawn_room;
use crate::engine::scene::scene_ready::prepare_loaded_model;
use crate::engine::scene::spin::spin_system;
use crate::engine::scene::tv_assembly::{ScreenTextures, blank_video_texture, spawn_tv_assembly};
use crate::engine::systems::fps_tracking::fps_notification_system;
use crate::engine::systems::resize::{ViewportSize, handle_window_resize, init_viewport};
// Create Web RPC modules
use crate::rpc::web_rpc::WebRpcPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::{create_native_overlay, fps_text_update_system};

/// Build the room app. Fails before any window opens if a media source list is
/// empty.
pub fn create_app() -> Result<App, SceneError> {
    let music = BackgroundMusic::new(
        MediaCycler::new("background music", AUDIO_TRACKS.iter().copied())?,
        INITIAL_MUSIC_VOLUME,
    );
    let sources = ScreenSources {
        clips: MediaCycler::new("video clips", VIDEO_CLIPS.iter().copied())?,
        images: MediaCycler::new("screen images", SCREEN_IMAGES.iter().copied())?,
    };

    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<ScenePhase>()
        .add_plugins(MaterialPlugin::<TvBodyMaterial>::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(WebRpcPlugin)
        .insert_resource(PointLightShadowMap { size: 1024 })
        .add_observer(prepare_loaded_model);

    for cycler in [music.tracks(), &sources.clips, &sources.images] {
        info!("✓ {}: {} sources", cycler.name(), cycler.len());
    }

    // Initialise resources early
    app.insert_resource(music)
        .insert_resource(sources)
        .init_resource::<RoomCamera>()
        .init_resource::<ViewportSize>()
        .init_resource::<LoadDiagnostics>()
        .init_resource::<TrackedAssets>()
        .init_resource::<PendingModels>();

    app.add_systems(
        Startup,
        (
            install_video_player,
            init_viewport,
            setup,
            request_model_loads,
            start_tv_video,
        )
            .chain(),
    );

    // Loading phase systems
    app.add_systems(
        Update,
        (complete_model_loads, transition_to_ready)
            .chain()
            .run_if(in_state(ScenePhase::Composing)),
    );

    // Input first, then the state it changed is applied to the scene.
    app.add_systems(
        Update,
        (
            handle_window_resize,
            handle_keyboard_input,
            move_orbit_light,
            camera_controller,
            sync_background_music,
            drive_image_autoplay,
            stream_video_frames,
            collect_playback_failures,
            report_failed_assets,
        )
            .chain(),
    );

    // Independent per-frame tasks.
    app.add_systems(Update, (spin_system, fps_notification_system));

    // Add fps_text_update_system only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    Ok(app)
}

#[allow(clippy::too_many_arguments)]
fn setup(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    sources: Res<ScreenSources>,
    room_camera: Res<RoomCamera>,
    viewport: Res<ViewportSize>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut body_materials: ResMut<Assets<TvBodyMaterial>>,
    mut images: ResMut<Assets<Image>>,
    mut tracked: ResMut<TrackedAssets>,
) {
    let projection = Projection::Perspective(PerspectiveProjection {
        fov: CAMERA_FOV_DEGREES.to_radians(),
        near: CAMERA_NEAR,
        far: CAMERA_FAR,
        aspect_ratio: viewport.aspect_ratio().unwrap_or(16.0 / 9.0),
    });
    spawn_room_camera(&mut commands, &room_camera, projection);

    spawn_light(&mut commands, &AMBIENT_LIGHT);
    if let Some(light) = spawn_light(&mut commands, &ORBIT_LIGHT) {
        commands.entity(light).insert((Name::new("orbit-light"), OrbitLight));
    }

    spawn_room(
        &mut commands,
        &asset_server,
        &mut meshes,
        &mut materials,
        &mut tracked,
    );

    let body_texture: Handle<Image> = asset_server.load(TV_BODY_TEXTURE.path);
    tracked.track(TV_BODY_TEXTURE.path, body_texture.clone().untyped());
    let body_material = body_materials.add(TvBodyMaterial::with_texture(body_texture));

    let screen_images: Vec<Handle<Image>> = sources
        .images
        .sources()
        .iter()
        .map(|path| {
            let handle: Handle<Image> = asset_server.load(*path);
            tracked.track(path, handle.clone().untyped());
            handle
        })
        .collect();
    let textures = ScreenTextures {
        video: images.add(blank_video_texture()),
        images: screen_images,
    };

    let (assembly, content, screen_materials) = spawn_tv_assembly(
        &mut commands,
        &mut meshes,
        &mut materials,
        body_material,
        textures,
        sources.clone(),
    );
    commands.insert_resource(assembly);
    commands.insert_resource(content);
    commands.insert_resource(screen_materials);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlay(&mut commands);
    }

    info!("✓ Room shell and TV assembly created");
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
