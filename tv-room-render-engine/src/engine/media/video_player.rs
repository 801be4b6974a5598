use bevy::prelude::*;

use crate::engine::core::error::SceneError;
use crate::engine::loading::diagnostics::LoadDiagnostics;

/// Media name used in playback diagnostics.
pub const TV_VIDEO: &str = "TV video";

/// Black-box video player driving the TV screen. Looping and muting are fixed
/// by the implementation and cannot be changed at runtime.
pub trait VideoPlayer {
    fn set_source(&mut self, path: &str);

    /// Request playback. Browser rejections that arrive later are collected
    /// through [`TvVideoPlayer::take_failures`].
    fn play(&mut self) -> Result<(), SceneError>;

    fn pause(&mut self);

    fn is_paused(&self) -> bool;
}

/// Player that only tracks state. Used by native builds, where video decoding
/// is not available, and as the fallback when the browser element is missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadlessVideoPlayer {
    source: Option<String>,
    playing: bool,
}

impl HeadlessVideoPlayer {
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

impl VideoPlayer for HeadlessVideoPlayer {
    fn set_source(&mut self, path: &str) {
        self.source = Some(path.to_string());
    }

    fn play(&mut self) -> Result<(), SceneError> {
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn is_paused(&self) -> bool {
        !self.playing
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use bevy::prelude::*;
    use constants::media::WEB_ASSET_ROOT;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement};

    use super::{TV_VIDEO, VideoPlayer};
    use crate::engine::core::error::SceneError;

    /// `HTMLMediaElement.HAVE_CURRENT_DATA`
    const HAVE_CURRENT_DATA: u16 = 2;

    /// Hidden `<video>` element whose frames are copied into the screen texture
    /// through an offscreen 2D canvas.
    pub struct BrowserVideoPlayer {
        element: HtmlVideoElement,
        canvas: CanvasRenderingContext2d,
        frame_size: UVec2,
        source: String,
        failures: Rc<RefCell<Vec<SceneError>>>,
    }

    fn js_cause(err: JsValue) -> SceneError {
        SceneError::playback(TV_VIDEO, format!("{err:?}"))
    }

    impl BrowserVideoPlayer {
        pub fn attach_to_document(frame_size: UVec2) -> Result<Self, SceneError> {
            let document = web_sys::window()
                .and_then(|window| window.document())
                .ok_or_else(|| SceneError::playback(TV_VIDEO, "document not available"))?;

            let element = document
                .create_element("video")
                .map_err(js_cause)?
                .dyn_into::<HtmlVideoElement>()
                .map_err(|_| SceneError::playback(TV_VIDEO, "element is not a video"))?;
            element.set_cross_origin(Some("anonymous"));
            element.set_loop(true);
            // Browsers only autoplay muted video.
            element.set_muted(true);
            element.set_autoplay(true);
            element.set_attribute("playsinline", "").map_err(js_cause)?;
            element
                .style()
                .set_property("display", "none")
                .map_err(js_cause)?;

            let body = document
                .body()
                .ok_or_else(|| SceneError::playback(TV_VIDEO, "document has no body"))?;
            body.append_child(&element).map_err(js_cause)?;

            let canvas = document
                .create_element("canvas")
                .map_err(js_cause)?
                .dyn_into::<HtmlCanvasElement>()
                .map_err(|_| SceneError::playback(TV_VIDEO, "element is not a canvas"))?;
            canvas.set_width(frame_size.x);
            canvas.set_height(frame_size.y);
            let context = canvas
                .get_context("2d")
                .map_err(js_cause)?
                .ok_or_else(|| SceneError::playback(TV_VIDEO, "2d context unavailable"))?
                .dyn_into::<CanvasRenderingContext2d>()
                .map_err(|_| SceneError::playback(TV_VIDEO, "unexpected canvas context"))?;

            Ok(Self {
                element,
                canvas: context,
                frame_size,
                source: String::new(),
                failures: Rc::new(RefCell::new(Vec::new())),
            })
        }

        pub fn take_failures(&mut self) -> Vec<SceneError> {
            std::mem::take(&mut *self.failures.borrow_mut())
        }

        /// Copy the current video frame into `image`. Returns false while the
        /// element has no decoded frame yet.
        pub fn copy_frame_into(&self, image: &mut Image) -> bool {
            if self.element.ready_state() < HAVE_CURRENT_DATA {
                return false;
            }

            let width = self.frame_size.x as f64;
            let height = self.frame_size.y as f64;
            if self
                .canvas
                .draw_image_with_html_video_element_and_dw_and_dh(
                    &self.element,
                    0.0,
                    0.0,
                    width,
                    height,
                )
                .is_err()
            {
                return false;
            }

            match self.canvas.get_image_data(0.0, 0.0, width, height) {
                Ok(frame) => {
                    image.data = Some(frame.data().0);
                    true
                }
                Err(_) => false,
            }
        }
    }

    impl VideoPlayer for BrowserVideoPlayer {
        fn set_source(&mut self, path: &str) {
            self.source = format!("{WEB_ASSET_ROOT}/{path}");
            self.element.set_src(&self.source);
        }

        fn play(&mut self) -> Result<(), SceneError> {
            let promise: js_sys::Promise = self.element.play().map_err(js_cause)?;
            let failures = self.failures.clone();
            let source = self.source.clone();

            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    failures
                        .borrow_mut()
                        .push(SceneError::playback(TV_VIDEO, format!("{source}: {err:?}")));
                }
            });
            Ok(())
        }

        fn pause(&mut self) {
            if let Err(err) = self.element.pause() {
                warn!("Video pause failed: {:?}", err);
            }
        }

        fn is_paused(&self) -> bool {
            self.element.paused()
        }
    }
}

/// The TV's video player for the current platform. Lives in a non-send
/// resource because the browser element is bound to the main thread.
pub enum TvVideoPlayer {
    Headless(HeadlessVideoPlayer),
    #[cfg(target_arch = "wasm32")]
    Browser(browser::BrowserVideoPlayer),
}

impl TvVideoPlayer {
    #[cfg(target_arch = "wasm32")]
    pub fn for_platform() -> Self {
        use constants::media::{VIDEO_TEXTURE_HEIGHT, VIDEO_TEXTURE_WIDTH};

        let frame_size = UVec2::new(VIDEO_TEXTURE_WIDTH, VIDEO_TEXTURE_HEIGHT);
        match browser::BrowserVideoPlayer::attach_to_document(frame_size) {
            Ok(player) => Self::Browser(player),
            Err(err) => {
                error!("{err}; the TV screen stays blank");
                Self::Headless(HeadlessVideoPlayer::default())
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn for_platform() -> Self {
        info!("Video decoding needs a browser; native builds show a blank TV screen");
        Self::Headless(HeadlessVideoPlayer::default())
    }

    /// Whether this player produces frames for the screen texture.
    pub fn streams_frames(&self) -> bool {
        match self {
            Self::Headless(_) => false,
            #[cfg(target_arch = "wasm32")]
            Self::Browser(_) => true,
        }
    }

    pub fn copy_frame_into(&self, image: &mut Image) -> bool {
        match self {
            Self::Headless(_) => {
                let _ = image;
                false
            }
            #[cfg(target_arch = "wasm32")]
            Self::Browser(player) => player.copy_frame_into(image),
        }
    }

    /// Drain playback rejections reported asynchronously by the browser.
    pub fn take_failures(&mut self) -> Vec<SceneError> {
        match self {
            Self::Headless(_) => Vec::new(),
            #[cfg(target_arch = "wasm32")]
            Self::Browser(player) => player.take_failures(),
        }
    }
}

impl VideoPlayer for TvVideoPlayer {
    fn set_source(&mut self, path: &str) {
        match self {
            Self::Headless(player) => player.set_source(path),
            #[cfg(target_arch = "wasm32")]
            Self::Browser(player) => player.set_source(path),
        }
    }

    fn play(&mut self) -> Result<(), SceneError> {
        match self {
            Self::Headless(player) => player.play(),
            #[cfg(target_arch = "wasm32")]
            Self::Browser(player) => player.play(),
        }
    }

    fn pause(&mut self) {
        match self {
            Self::Headless(player) => player.pause(),
            #[cfg(target_arch = "wasm32")]
            Self::Browser(player) => player.pause(),
        }
    }

    fn is_paused(&self) -> bool {
        match self {
            Self::Headless(player) => player.is_paused(),
            #[cfg(target_arch = "wasm32")]
            Self::Browser(player) => player.is_paused(),
        }
    }
}

/// Create the platform player on the main thread.
pub fn install_video_player(world: &mut World) {
    world.insert_non_send_resource(TvVideoPlayer::for_platform());
}

/// Move asynchronous playback rejections onto the diagnostics channel.
pub fn collect_playback_failures(
    mut player: NonSendMut<TvVideoPlayer>,
    mut diagnostics: ResMut<LoadDiagnostics>,
) {
    for failure in player.take_failures() {
        diagnostics.report(failure);
    }
}
