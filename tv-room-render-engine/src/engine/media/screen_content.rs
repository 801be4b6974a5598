use std::time::Duration;

use bevy::prelude::*;

use crate::engine::core::error::SceneError;
use crate::engine::loading::diagnostics::LoadDiagnostics;
use crate::engine::media::cycler::MediaCycler;
use crate::engine::media::video_player::{TvVideoPlayer, VideoPlayer};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScreenMode {
    #[default]
    Video,
    Image,
}

/// Attach/detach operations on the TV group. Detached nodes are kept alive.
pub trait ScreenGraph {
    fn attach(&mut self, node: Entity, parent: Entity);
    fn detach(&mut self, node: Entity);
}

impl ScreenGraph for Commands<'_, '_> {
    fn attach(&mut self, node: Entity, parent: Entity) {
        self.entity(node)
            .insert((ChildOf(parent), Visibility::Inherited));
    }

    fn detach(&mut self, node: Entity) {
        // A detached root would still render, so it is hidden as well.
        self.entity(node)
            .remove::<ChildOf>()
            .insert(Visibility::Hidden);
    }
}

/// Entities making up the TV screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenNodes {
    pub tv_group: Entity,
    pub video_screen: Entity,
    pub image_screen: Entity,
}

/// Validated source lists for the TV screen, built before the app starts.
#[derive(Resource, Debug, Clone)]
pub struct ScreenSources {
    pub clips: MediaCycler<&'static str>,
    pub images: MediaCycler<&'static str>,
}

/// Screen mode machine. Owns both screen cyclers and the slideshow timer, so
/// starting and stopping the slideshow has a single authority.
#[derive(Resource, Debug)]
pub struct ScreenContent {
    mode: ScreenMode,
    nodes: ScreenNodes,
    clips: MediaCycler<&'static str>,
    images: MediaCycler<&'static str>,
    autoplay_period: Duration,
    autoplay: Option<Timer>,
}

impl ScreenContent {
    /// Starts in video mode with the video screen attached.
    pub fn new(
        nodes: ScreenNodes,
        clips: MediaCycler<&'static str>,
        images: MediaCycler<&'static str>,
        autoplay_period: Duration,
    ) -> Self {
        Self {
            mode: ScreenMode::Video,
            nodes,
            clips,
            images,
            autoplay_period,
            autoplay: None,
        }
    }

    pub fn mode(&self) -> ScreenMode {
        self.mode
    }

    pub fn nodes(&self) -> ScreenNodes {
        self.nodes
    }

    pub fn attached_screen(&self) -> Entity {
        match self.mode {
            ScreenMode::Video => self.nodes.video_screen,
            ScreenMode::Image => self.nodes.image_screen,
        }
    }

    pub fn current_clip(&self) -> &'static str {
        *self.clips.current()
    }

    pub fn clip_index(&self) -> usize {
        self.clips.index()
    }

    pub fn current_image(&self) -> &'static str {
        *self.images.current()
    }

    pub fn image_index(&self) -> usize {
        self.images.index()
    }

    pub fn is_autoplay_running(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Load the current clip and start it. Used once at startup.
    pub fn start_video(&self, player: &mut impl VideoPlayer) -> Result<(), SceneError> {
        player.set_source(self.clips.current());
        player.play()
    }

    /// Switch the TV to the image slideshow. No-op in image mode.
    pub fn show_images(&mut self, graph: &mut impl ScreenGraph, player: &mut impl VideoPlayer) {
        if self.mode == ScreenMode::Image {
            return;
        }

        graph.detach(self.nodes.video_screen);
        graph.attach(self.nodes.image_screen, self.nodes.tv_group);
        player.pause();
        self.start_autoplay();
        self.mode = ScreenMode::Image;
    }

    /// Switch the TV back to video and resume playback. No-op in video mode.
    pub fn show_video(
        &mut self,
        graph: &mut impl ScreenGraph,
        player: &mut impl VideoPlayer,
    ) -> Result<(), SceneError> {
        if self.mode == ScreenMode::Video {
            return Ok(());
        }

        self.stop_autoplay();
        graph.detach(self.nodes.image_screen);
        graph.attach(self.nodes.video_screen, self.nodes.tv_group);
        self.mode = ScreenMode::Video;

        if player.is_paused() {
            player.play()?;
        }
        Ok(())
    }

    /// Advance to the next clip and play it. Only acts in video mode; in image
    /// mode the queued clip is left untouched.
    pub fn switch_clip(
        &mut self,
        player: &mut impl VideoPlayer,
    ) -> Result<Option<&'static str>, SceneError> {
        if self.mode != ScreenMode::Video {
            return Ok(None);
        }

        let clip = *self.clips.advance();
        player.set_source(clip);
        player.play()?;
        Ok(Some(clip))
    }

    pub fn toggle_video_playback(&self, player: &mut impl VideoPlayer) -> Result<(), SceneError> {
        if player.is_paused() {
            player.play()
        } else {
            player.pause();
            Ok(())
        }
    }

    /// Advance the slideshow for `delta` of elapsed time. Returns the image to
    /// display when at least one period finished.
    pub fn tick_autoplay(&mut self, delta: Duration) -> Option<&'static str> {
        let timer = self.autoplay.as_mut()?;
        timer.tick(delta);

        let periods = timer.times_finished_this_tick();
        if periods == 0 {
            return None;
        }
        for _ in 0..periods {
            self.images.advance();
        }
        Some(*self.images.current())
    }

    fn start_autoplay(&mut self) {
        self.stop_autoplay();
        self.autoplay = Some(Timer::new(self.autoplay_period, TimerMode::Repeating));
    }

    fn stop_autoplay(&mut self) {
        self.autoplay = None;
    }
}

/// Material and texture handles the screen systems write into.
#[derive(Resource, Debug, Clone)]
pub struct ScreenMaterials {
    pub video_texture: Handle<Image>,
    pub video_material: Handle<StandardMaterial>,
    pub image_material: Handle<StandardMaterial>,
    /// Slideshow textures, indexed like the image cycler.
    pub image_textures: Vec<Handle<Image>>,
}

/// Start the first clip, muted and looping.
pub fn start_tv_video(
    screen: Res<ScreenContent>,
    mut player: NonSendMut<TvVideoPlayer>,
    mut diagnostics: ResMut<LoadDiagnostics>,
) {
    match screen.start_video(&mut *player) {
        Ok(()) => info!("✓ TV video started: {}", screen.current_clip()),
        Err(err) => diagnostics.report(err),
    }
}

/// Push the next slideshow image into the image screen once per period.
pub fn drive_image_autoplay(
    time: Res<Time>,
    mut screen: ResMut<ScreenContent>,
    screen_materials: Res<ScreenMaterials>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !screen.is_autoplay_running() {
        return;
    }

    if screen.tick_autoplay(time.delta()).is_some() {
        let texture = screen_materials
            .image_textures
            .get(screen.image_index())
            .cloned();
        if let Some(material) = materials.get_mut(&screen_materials.image_material) {
            material.base_color_texture = texture;
        }
    }
}

/// Copy decoded video frames into the video screen texture.
pub fn stream_video_frames(
    player: NonSend<TvVideoPlayer>,
    screen: Res<ScreenContent>,
    screen_materials: Res<ScreenMaterials>,
    mut images: ResMut<Assets<Image>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !player.streams_frames() || screen.mode() != ScreenMode::Video || player.is_paused() {
        return;
    }

    let Some(image) = images.get_mut(&screen_materials.video_texture) else {
        return;
    };
    if player.copy_frame_into(image) {
        // Touch the material so it rebinds the updated texture.
        let _ = materials.get_mut(&screen_materials.video_material);
    }
}
