use bevy::audio::{AudioSinkPlayback, PlaybackSettings, Volume};
use bevy::prelude::*;

use crate::engine::loading::diagnostics::TrackedAssets;
use crate::engine::media::cycler::MediaCycler;

/// Authoritative background music state. Input handlers change it; the
/// [`sync_background_music`] system applies it to the audio sink.
#[derive(Resource, Debug, Clone)]
pub struct BackgroundMusic {
    tracks: MediaCycler<&'static str>,
    volume: f32,
    playing: bool,
    /// Bumped on every track change, so a one-track list still restarts.
    generation: u32,
}

impl BackgroundMusic {
    pub fn new(tracks: MediaCycler<&'static str>, volume: f32) -> Self {
        Self {
            tracks,
            volume: volume.clamp(0.0, 1.0),
            playing: true,
            generation: 0,
        }
    }

    pub fn current_track(&self) -> &'static str {
        *self.tracks.current()
    }

    pub fn tracks(&self) -> &MediaCycler<&'static str> {
        &self.tracks
    }

    pub fn track_index(&self) -> usize {
        self.tracks.index()
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn toggle_playing(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Change the volume by `delta`, clamped to `[0, 1]`.
    pub fn adjust_volume(&mut self, delta: f32) -> f32 {
        self.volume = (self.volume + delta).clamp(0.0, 1.0);
        self.volume
    }

    /// Stop the current track and start the next one.
    pub fn next_track(&mut self) -> &'static str {
        self.playing = true;
        self.generation = self.generation.wrapping_add(1);
        *self.tracks.advance()
    }
}

/// Entity currently playing a music track.
#[derive(Component, Debug)]
pub struct MusicPlayer {
    pub track: &'static str,
    pub generation: u32,
}

impl MusicPlayer {
    pub fn for_current(music: &BackgroundMusic) -> Self {
        Self {
            track: music.current_track(),
            generation: music.generation(),
        }
    }

    /// Whether this player is still the one `music` wants.
    pub fn is_current(&self, music: &BackgroundMusic) -> bool {
        self.generation == music.generation() && self.track == music.current_track()
    }
}

pub fn sync_background_music(
    mut commands: Commands,
    music: Res<BackgroundMusic>,
    asset_server: Res<AssetServer>,
    mut tracked: ResMut<TrackedAssets>,
    mut players: Query<(Entity, &MusicPlayer, Option<&mut AudioSink>)>,
) {
    let mut current_player_found = false;

    for (entity, player, sink) in &mut players {
        if !player.is_current(&music) {
            commands.entity(entity).despawn();
            continue;
        }
        current_player_found = true;

        let Some(mut sink) = sink else {
            continue;
        };
        if music.is_playing() && sink.is_paused() {
            sink.play();
        } else if !music.is_playing() && !sink.is_paused() {
            sink.pause();
        }
        if (sink.volume().to_linear() - music.volume()).abs() > f32::EPSILON {
            sink.set_volume(Volume::Linear(music.volume()));
        }
    }

    if current_player_found {
        return;
    }

    let track = music.current_track();
    let handle: Handle<AudioSource> = asset_server.load(track);
    tracked.track(track, handle.clone().untyped());

    let settings = PlaybackSettings {
        paused: !music.is_playing(),
        ..PlaybackSettings::LOOP.with_volume(Volume::Linear(music.volume()))
    };
    commands.spawn((
        Name::new("background-music"),
        MusicPlayer::for_current(&music),
        AudioPlayer::new(handle),
        settings,
    ));
    info!("Background music: {}", track);
}
