use carousel_core::carousel::{KeyboardAdapter, SliderAdapter};
use carousel_core::scene::{Camera, Controller};
use carousel_core::{CarouselConfig, GalleryItem};

use crate::session::{CarouselSession, CloseCallback, SelectCallback, SessionParts};

/// Initial window settings for [`run_windowed`](crate::run_windowed).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Gallery Carousel".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

impl AppConfig {
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Configures and mounts a [`CarouselSession`].
///
/// ```rust,ignore
/// let mut camera = Camera::default();
/// let session = CarouselBuilder::new(items)
///     .with_config(CarouselConfig::load("carousel.toml")?)
///     .with_viewport(1280, 720)
///     .on_close(|| println!("closed"))
///     .mount(&mut camera)?;
/// ```
pub struct CarouselBuilder<'a> {
    items: Vec<GalleryItem>,
    config: CarouselConfig,
    start_index: usize,
    viewport: (u32, u32),
    controller: Controller,
    key_repeat: bool,
    slider: SliderAdapter,
    on_close: Option<CloseCallback<'a>>,
    on_item_select: Option<SelectCallback<'a>>,
}

impl<'a> CarouselBuilder<'a> {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        let defaults = AppConfig::default();
        Self {
            items,
            config: CarouselConfig::default(),
            start_index: 0,
            viewport: (defaults.width, defaults.height),
            controller: Controller::default(),
            key_repeat: false,
            slider: SliderAdapter::default(),
            on_close: None,
            on_item_select: None,
        }
    }

    pub fn with_config(mut self, config: CarouselConfig) -> Self {
        self.config = config;
        self
    }

    /// Item facing the viewer when the carousel opens.  Wraps past the end.
    pub fn with_start_index(mut self, index: usize) -> Self {
        self.start_index = index;
        self
    }

    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport = (width, height);
        self
    }

    /// Replace the default key bindings.
    pub fn with_controller(mut self, controller: Controller) -> Self {
        self.controller = controller;
        self
    }

    /// Let OS key auto-repeat nudge again while an arrow key is held.
    pub fn with_key_repeat(mut self, allow: bool) -> Self {
        self.key_repeat = allow;
        self
    }

    pub fn with_slider_max(mut self, max: f64) -> Self {
        self.slider = SliderAdapter::with_max(max);
        self
    }

    /// Called on Escape or the overlay close button.
    pub fn on_close(mut self, f: impl FnMut() + 'a) -> Self {
        self.on_close = Some(Box::new(f));
        self
    }

    /// Called when an item is clicked or tapped.
    pub fn on_item_select(mut self, f: impl FnMut(&GalleryItem) + 'a) -> Self {
        self.on_item_select = Some(Box::new(f));
        self
    }

    /// Validate the configuration, take over `camera` and open the carousel.
    pub fn mount(self, camera: &'a mut Camera) -> carousel_core::Result<CarouselSession<'a>> {
        self.config.validate()?;
        let keyboard = KeyboardAdapter::new(self.controller).with_repeat(self.key_repeat);
        let parts = SessionParts {
            items: self.items,
            config: self.config,
            start_index: self.start_index,
            viewport: self.viewport,
            keyboard,
            slider: self.slider,
            on_close: self.on_close,
            on_item_select: self.on_item_select,
        };
        Ok(CarouselSession::mount(parts, camera))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_core::carousel::{NudgeDirection, Smoothing};
    use carousel_core::scene::KeyAction;
    use carousel_core::{CarouselError, KeyCode};

    use crate::events::CarouselEvent;

    #[test]
    fn app_config_builder() {
        let config = AppConfig::default().with_title("Holiday").with_size(640, 480);
        assert_eq!(config.title, "Holiday");
        assert_eq!((config.width, config.height), (640, 480));
    }

    #[test]
    fn invalid_config_is_rejected_before_the_camera_is_touched() {
        let mut config = CarouselConfig::default();
        config.motion.smoothing = Smoothing::PerFrame { factor: 1.5 };
        let mut camera = Camera::default();
        camera.position.x = 2.0;
        let rejected = matches!(
            CarouselBuilder::new(vec![GalleryItem::new(1, "a", "a.jpg")])
                .with_config(config)
                .mount(&mut camera),
            Err(CarouselError::InvalidParameter { .. })
        );
        assert!(rejected);
        assert_eq!(camera.position.x, 2.0);
    }

    #[test]
    fn custom_bindings_and_viewport() {
        let mut controller = Controller::new();
        controller.bind(KeyCode::PageDown, KeyAction::Nudge(NudgeDirection::Prev));
        let mut camera = Camera::default();
        let items = (0..4).map(|i| GalleryItem::new(i, "x", "x.png")).collect();
        let mut session = CarouselBuilder::new(items)
            .with_controller(controller)
            .with_viewport(800, 400)
            .mount(&mut camera)
            .unwrap();
        assert_eq!(session.viewport(), (800, 400));
        assert!((session.camera().aspect - 2.0).abs() < 1e-6);

        // default bindings are gone
        session.handle_event(&CarouselEvent::KeyDown(KeyCode::ArrowRight));
        assert_eq!(session.state().target_index(), 0);
        session.handle_event(&CarouselEvent::KeyDown(KeyCode::PageDown));
        assert_eq!(session.state().target_index(), 1);
    }
}
