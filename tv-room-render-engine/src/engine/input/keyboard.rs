use bevy::input::ButtonState;
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;

use crate::engine::camera::room_camera::RoomCamera;
use crate::engine::core::error::SceneError;
use crate::engine::input::actions::InputAction;
use crate::engine::loading::diagnostics::LoadDiagnostics;
use crate::engine::media::background_music::BackgroundMusic;
use crate::engine::media::screen_content::{ScreenContent, ScreenGraph};
use crate::engine::media::video_player::{TvVideoPlayer, VideoPlayer};

/// Apply one input action to the scene state.
pub fn apply_action(
    action: InputAction,
    camera: &mut RoomCamera,
    music: &mut BackgroundMusic,
    screen: &mut ScreenContent,
    graph: &mut impl ScreenGraph,
    player: &mut impl VideoPlayer,
) -> Result<(), SceneError> {
    match action {
        InputAction::MoveCamera(direction) => {
            camera.translate(direction.delta());
        }
        InputAction::ToggleVideo => screen.toggle_video_playback(player)?,
        InputAction::SwitchClip => {
            if let Some(clip) = screen.switch_clip(player)? {
                info!("TV video: {}", clip);
            }
        }
        InputAction::ShowVideo => screen.show_video(graph, player)?,
        InputAction::ShowImages => screen.show_images(graph, player),
        InputAction::ToggleMusic => {
            music.toggle_playing();
        }
        InputAction::AdjustVolume(delta) => {
            music.adjust_volume(delta);
        }
        InputAction::NextTrack => {
            music.next_track();
        }
    }
    Ok(())
}

/// Dispatch key-down events. Playback failures go to the diagnostics channel;
/// the user can retry with the same key.
pub fn handle_keyboard_input(
    mut commands: Commands,
    mut keyboard_events: EventReader<KeyboardInput>,
    mut camera: ResMut<RoomCamera>,
    mut music: ResMut<BackgroundMusic>,
    mut screen: ResMut<ScreenContent>,
    mut player: NonSendMut<TvVideoPlayer>,
    mut diagnostics: ResMut<LoadDiagnostics>,
) {
    for event in keyboard_events.read() {
        if event.state != ButtonState::Pressed {
            continue;
        }
        let Some(action) = InputAction::from_logical_key(&event.logical_key) else {
            continue;
        };

        if let Err(err) = apply_action(
            action,
            &mut camera,
            &mut music,
            &mut screen,
            &mut commands,
            &mut *player,
        ) {
            diagnostics.report(err);
        }
    }
}
