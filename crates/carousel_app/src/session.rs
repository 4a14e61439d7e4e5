//! A mounted carousel.
//!
//! [`CarouselSession`] owns the state and the input adapters and holds the
//! host's camera by `&mut` borrow for as long as it is open.  Event handlers
//! only move the target; the smoothed angle, the camera and the placements
//! are updated in [`CarouselSession::frame`].  Unmounting (explicitly or by
//! dropping the session) puts the camera back where it was.

use carousel_core::carousel::{
    CarouselState, DragAdapter, IndexChange, Interpolator, ItemPlacement, ItemPlacer,
    KeyResponse, KeyboardAdapter, NudgeDirection, SliderAdapter,
};
use carousel_core::glam::Vec3;
use carousel_core::scene::{Camera, CameraConstraint};
use carousel_core::{CarouselConfig, GalleryItem, Time};

use crate::context::FrameContext;
use crate::events::CarouselEvent;
use crate::overlay::Overlay;
use crate::traits::FrameHook;

pub(crate) type CloseCallback<'a> = Box<dyn FnMut() + 'a>;
pub(crate) type SelectCallback<'a> = Box<dyn FnMut(&GalleryItem) + 'a>;

/// Everything a session needs besides the camera.  Filled in by
/// [`CarouselBuilder`](crate::CarouselBuilder).
pub(crate) struct SessionParts<'a> {
    pub items: Vec<GalleryItem>,
    pub config: CarouselConfig,
    pub start_index: usize,
    pub viewport: (u32, u32),
    pub keyboard: KeyboardAdapter,
    pub slider: SliderAdapter,
    pub on_close: Option<CloseCallback<'a>>,
    pub on_item_select: Option<SelectCallback<'a>>,
}

pub struct CarouselSession<'cam> {
    items: Vec<GalleryItem>,
    state: CarouselState,
    keyboard: KeyboardAdapter,
    drag: DragAdapter,
    slider: SliderAdapter,
    interpolator: Interpolator,
    placer: ItemPlacer,
    /// `None` once the camera has been handed back.
    constraint: Option<CameraConstraint>,
    camera: &'cam mut Camera,
    on_close: Option<CloseCallback<'cam>>,
    on_item_select: Option<SelectCallback<'cam>>,
    viewport: (u32, u32),
    placements: Vec<ItemPlacement>,
    close_requested: bool,
}

impl<'cam> CarouselSession<'cam> {
    pub(crate) fn mount(parts: SessionParts<'cam>, camera: &'cam mut Camera) -> Self {
        let SessionParts {
            items,
            config,
            start_index,
            viewport,
            keyboard,
            slider,
            on_close,
            on_item_select,
        } = parts;

        let state = CarouselState::new(items.len(), &config.motion).with_start_index(start_index);
        let constraint = CameraConstraint::acquire(camera);
        constraint.apply(camera, state.current_angle());
        if viewport.1 > 0 {
            camera.set_aspect(viewport.0 as f32 / viewport.1 as f32);
        }

        let mut session = Self {
            items,
            state,
            keyboard,
            drag: DragAdapter::new(config.motion.drag_amplification, config.motion.snap_on_release),
            slider,
            interpolator: Interpolator::new(config.motion.smoothing),
            placer: ItemPlacer::new(config.geometry),
            constraint: Some(constraint),
            camera,
            on_close,
            on_item_select,
            viewport,
            placements: Vec::new(),
            close_requested: false,
        };
        session.refresh_placements();
        log::info!(
            "carousel mounted with {} item(s), facing index {}",
            session.items.len(),
            session.state.current_index()
        );
        session
    }

    // ── accessors ─────────────────────────────────────────────────────────

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn camera(&self) -> &Camera {
        &*self.camera
    }

    pub fn keyboard(&self) -> &KeyboardAdapter {
        &self.keyboard
    }

    /// Movement axes held on the shared keyboard, for a free-fly view that
    /// takes over once the carousel closes.  The carousel itself ignores them.
    pub fn fly_direction(&self) -> Vec3 {
        self.keyboard.fly_direction()
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Placements computed by the latest frame, in index order.
    pub fn placements(&self) -> &[ItemPlacement] {
        &self.placements
    }

    /// Item currently in front of the viewer.
    pub fn current_item(&self) -> Option<&GalleryItem> {
        self.items.get(self.state.current_index())
    }

    pub fn is_close_requested(&self) -> bool {
        self.close_requested
    }

    /// Overlay model for the latest frame.
    pub fn overlay(&self) -> Overlay {
        Overlay::build(
            &self.items,
            &self.placements,
            self.state.current_index(),
            self.state.is_transitioning(),
            &self.slider,
            &*self.camera,
            self.viewport,
        )
    }

    // ── input ─────────────────────────────────────────────────────────────

    /// Route one input event.  Only target, drag, hover and key state change
    /// here.
    pub fn handle_event(&mut self, event: &CarouselEvent) {
        match event {
            CarouselEvent::KeyDown(key) => {
                if self.keyboard.key_down(*key, &mut self.state) == KeyResponse::CloseRequested {
                    self.request_close();
                }
            }
            CarouselEvent::KeyUp(key) => self.keyboard.key_up(*key),
            CarouselEvent::Blur => {
                self.keyboard.blur();
                self.drag.pointer_up(&mut self.state);
            }
            CarouselEvent::PointerDown { x } => {
                self.drag.pointer_down(&mut self.state, *x, self.viewport.0 as f64)
            }
            CarouselEvent::PointerMove { x } => {
                self.drag.pointer_move(&mut self.state, *x, self.viewport.0 as f64)
            }
            CarouselEvent::PointerUp => self.drag.pointer_up(&mut self.state),
            CarouselEvent::Resized { width, height } => self.resize(*width, *height),
            CarouselEvent::Slider(value) => {
                self.slider.set_value(&mut self.state, *value);
            }
            CarouselEvent::SliderText(text) => {
                self.slider.set_text(&mut self.state, text);
            }
            CarouselEvent::Prev => {
                self.state.nudge(NudgeDirection::Prev);
            }
            CarouselEvent::Next => {
                self.state.nudge(NudgeDirection::Next);
            }
            CarouselEvent::Close => self.request_close(),
            CarouselEvent::Activate(index) => self.activate(*index),
            CarouselEvent::Hover(index) => {
                let id = index.and_then(|i| self.items.get(i)).map(|item| item.id);
                self.state.set_hovered(id);
            }
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        if height > 0 {
            self.camera.set_aspect(width as f32 / height as f32);
        }
    }

    fn request_close(&mut self) {
        self.close_requested = true;
        log::debug!("carousel close requested");
        if let Some(on_close) = self.on_close.as_mut() {
            on_close();
        }
    }

    fn activate(&mut self, index: usize) {
        let Some(item) = self.items.get(index) else {
            log::warn!("activation of missing item index {index} ignored");
            return;
        };
        log::debug!("item {} selected", item.id);
        if let Some(on_item_select) = self.on_item_select.as_mut() {
            on_item_select(item);
        }
    }

    // ── frame ─────────────────────────────────────────────────────────────

    /// One tick: drag → cooldown → interpolation → camera → placements.
    pub fn frame(&mut self, time: &Time) -> Option<IndexChange> {
        self.drag.frame(&mut self.state);
        self.state.advance_clock(time);
        let change = self.interpolator.step(&mut self.state, time);
        if let Some(constraint) = &self.constraint {
            constraint.apply(&mut *self.camera, self.state.current_angle());
        }
        self.refresh_placements();
        change
    }

    fn refresh_placements(&mut self) {
        let hovered = self
            .state
            .hovered()
            .and_then(|id| self.items.iter().position(|item| item.id == id));
        self.placements =
            self.placer
                .place_all(self.state.ring(), self.state.current_index(), hovered);
    }

    // ── teardown ──────────────────────────────────────────────────────────

    fn release_camera(&mut self) {
        if let Some(constraint) = self.constraint.take() {
            constraint.release(&mut *self.camera);
        }
    }

    /// Close the carousel and hand the camera back in the pose it had at
    /// mount.
    pub fn unmount(mut self) {
        self.release_camera();
        log::info!("carousel unmounted");
    }
}

impl Drop for CarouselSession<'_> {
    fn drop(&mut self) {
        self.release_camera();
    }
}

impl FrameHook for CarouselSession<'_> {
    fn on_frame(&mut self, ctx: &mut FrameContext) {
        self.frame(&ctx.time);
        if self.close_requested {
            ctx.request_stop();
        }
    }

    fn on_event(&mut self, event: &CarouselEvent, ctx: &mut FrameContext) {
        self.handle_event(event);
        if self.close_requested {
            ctx.request_stop();
        }
    }

    fn on_cancel(&mut self) {
        log::debug!("carousel frame loop cancelled");
    }
}

impl std::fmt::Debug for CarouselSession<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselSession")
            .field("items", &self.items.len())
            .field("state", &self.state)
            .field("viewport", &self.viewport)
            .field("mounted", &self.constraint.is_some())
            .field("close_requested", &self.close_requested)
            .finish_non_exhaustive()
    }
}
