use anyhow::Context as _;
use carousel_core::{FixedClock, Time, TimeClock};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::builder::AppConfig;
use crate::context::FrameContext;
use crate::events::{CarouselEvent, EventTranslator};
use crate::traits::FrameHook;

/// Token for a pending frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRequest(pub u64);

/// Render-loop driver: holds at most one pending frame request and runs the
/// hook when the host's loop produces a frame.
///
/// Each frame consumes the pending request; the hook keeps the loop alive
/// simply by not calling [`FrameContext::request_stop`].  [`Driver::cancel`]
/// drops the pending request so no further frame reaches the hook, which is
/// what unmounting a carousel does.
#[derive(Debug)]
pub struct Driver<H: FrameHook> {
    hook: H,
    pending: Option<FrameRequest>,
    next_request: u64,
    window_size: (u32, u32),
    last_time: Time,
    frames_run: u64,
}

impl<H: FrameHook> Driver<H> {
    /// Wrap `hook` and request its first frame.
    pub fn new(hook: H, window_size: (u32, u32)) -> Self {
        let mut driver = Self {
            hook,
            pending: None,
            next_request: 0,
            window_size,
            last_time: Time::default(),
            frames_run: 0,
        };
        driver.request_frame();
        driver
    }

    /// Ask for a frame.  A request that is already pending is reused.
    pub fn request_frame(&mut self) -> FrameRequest {
        if let Some(request) = self.pending {
            return request;
        }
        let request = FrameRequest(self.next_request);
        self.next_request += 1;
        self.pending = Some(request);
        request
    }

    /// Cancel the pending frame request.  Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(request) => {
                log::debug!("frame request {} cancelled after {} frame(s)", request.0, self.frames_run);
                self.hook.on_cancel();
                true
            }
            None => false,
        }
    }

    pub fn pending_request(&self) -> Option<FrameRequest> {
        self.pending
    }

    #[inline]
    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    pub fn window_size(&self) -> (u32, u32) {
        self.window_size
    }

    /// Run one frame if a request is pending.  Returns whether the hook ran.
    pub fn frame(&mut self, time: Time) -> bool {
        if self.pending.take().is_none() {
            return false;
        }
        let mut ctx = FrameContext::new(time, self.window_size);
        self.hook.on_frame(&mut ctx);
        self.last_time = time;
        self.frames_run += 1;
        if ctx.stop_requested {
            log::info!("frame loop stopped by hook after {} frame(s)", self.frames_run);
        } else {
            self.request_frame();
        }
        true
    }

    /// Forward an input event to the hook.  A hook that asks to stop while
    /// handling an event cancels the pending frame.
    pub fn dispatch(&mut self, event: &CarouselEvent) {
        if let CarouselEvent::Resized { width, height } = *event {
            self.window_size = (width, height);
        }
        let mut ctx = FrameContext::new(self.last_time, self.window_size);
        self.hook.on_event(event, &mut ctx);
        if ctx.stop_requested {
            self.cancel();
        }
    }

    /// Drive frames from a fixed-step clock until the hook stops or
    /// `max_frames` frames have run.  Returns the number of frames run.
    pub fn run_headless(&mut self, clock: &mut FixedClock, max_frames: u64) -> u64 {
        let mut ran = 0;
        while ran < max_frames && self.frame(clock.tick()) {
            ran += 1;
        }
        ran
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }

    pub fn hook_mut(&mut self) -> &mut H {
        &mut self.hook
    }

    /// Cancel any pending frame request and hand the hook back.
    pub fn into_hook(mut self) -> H {
        self.cancel();
        self.hook
    }
}

// ─── winit host ────────────────────────────────────────────────────────────

struct Runner<H: FrameHook> {
    driver: Driver<H>,
    config: AppConfig,
    window: Option<Window>,
    translator: EventTranslator,
    clock: TimeClock,
    error: Option<anyhow::Error>,
}

impl<H: FrameHook> ApplicationHandler for Runner<H> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attributes = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.config.width,
                self.config.height,
            ));
        match event_loop.create_window(attributes).context("failed to create window") {
            Ok(window) => {
                log::info!("window \"{}\" created", self.config.title);
                self.window = Some(window);
                self.clock = TimeClock::new();
            }
            Err(err) => {
                self.error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let WindowEvent::CloseRequested = event {
            self.driver.cancel();
            event_loop.exit();
            return;
        }
        if let Some(event) = self.translator.translate(&event) {
            self.driver.dispatch(&event);
        }
        if !self.driver.is_scheduled() {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };
        let time = self.clock.tick();
        self.driver.frame(time);
        if !self.driver.is_scheduled() {
            event_loop.exit();
            return;
        }
        window.request_redraw();
    }
}

/// Open a window and drive `hook` from its event loop until the hook stops
/// or the window is closed.  Returns the hook so the caller can unmount it.
///
/// Drawing is left to the hook; the window only provides input and timing.
pub fn run_windowed<H: FrameHook>(config: AppConfig, hook: H) -> anyhow::Result<H> {
    let event_loop = EventLoop::new().context("failed to create the event loop")?;
    // Poll = spin the loop as fast as possible; no sleeping between frames.
    event_loop.set_control_flow(ControlFlow::Poll);

    let size = (config.width, config.height);
    let mut runner = Runner {
        driver: Driver::new(hook, size),
        config,
        window: None,
        translator: EventTranslator::new(),
        clock: TimeClock::new(),
        error: None,
    };
    event_loop
        .run_app(&mut runner)
        .context("event loop terminated abnormally")?;
    if let Some(err) = runner.error.take() {
        return Err(err);
    }
    Ok(runner.driver.into_hook())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        frames: u32,
        stop_after: Option<u32>,
        events: Vec<CarouselEvent>,
        cancelled: bool,
    }

    impl FrameHook for Counter {
        fn on_frame(&mut self, ctx: &mut FrameContext) {
            self.frames += 1;
            if Some(self.frames) == self.stop_after {
                ctx.request_stop();
            }
        }

        fn on_event(&mut self, event: &CarouselEvent, ctx: &mut FrameContext) {
            self.events.push(event.clone());
            if *event == CarouselEvent::Close {
                ctx.request_stop();
            }
        }

        fn on_cancel(&mut self) {
            self.cancelled = true;
        }
    }

    #[test]
    fn frames_run_while_requested() {
        let mut driver = Driver::new(Counter::default(), (800, 600));
        let mut clock = FixedClock::new(1.0 / 60.0);
        assert_eq!(driver.run_headless(&mut clock, 10), 10);
        assert_eq!(driver.hook().frames, 10);
        assert!(driver.is_scheduled());
    }

    #[test]
    fn hook_can_stop_the_loop() {
        let hook = Counter { stop_after: Some(3), ..Counter::default() };
        let mut driver = Driver::new(hook, (800, 600));
        let mut clock = FixedClock::new(1.0 / 60.0);
        assert_eq!(driver.run_headless(&mut clock, 100), 3);
        assert!(!driver.is_scheduled());
        assert!(!driver.frame(clock.tick()));
    }

    #[test]
    fn cancel_stops_frames_and_notifies() {
        let mut driver = Driver::new(Counter::default(), (800, 600));
        let first = driver.pending_request().unwrap();
        assert_eq!(driver.request_frame(), first);
        assert!(driver.cancel());
        assert!(!driver.cancel());
        assert!(driver.hook().cancelled);
        assert!(!driver.frame(Time::fixed(0.016, 0)));
        assert_eq!(driver.hook().frames, 0);
        // a later request gets a fresh token
        assert_ne!(driver.request_frame(), first);
    }

    #[test]
    fn dispatch_tracks_size_and_close() {
        let mut driver = Driver::new(Counter::default(), (800, 600));
        driver.dispatch(&CarouselEvent::Resized { width: 1024, height: 768 });
        assert_eq!(driver.window_size(), (1024, 768));
        driver.dispatch(&CarouselEvent::Close);
        assert!(!driver.is_scheduled());
        let hook = driver.into_hook();
        assert_eq!(hook.events.len(), 2);
        assert!(hook.cancelled);
    }

    #[test]
    fn into_hook_cancels_the_pending_request() {
        let mut driver = Driver::new(Counter::default(), (800, 600));
        let mut clock = FixedClock::new(1.0 / 60.0);
        driver.run_headless(&mut clock, 3);
        assert!(driver.is_scheduled());
        let hook = driver.into_hook();
        assert_eq!(hook.frames, 3);
        assert!(hook.cancelled);

        // nothing pending: on_cancel is not called a second time
        let hook = Counter { stop_after: Some(1), ..Counter::default() };
        let mut driver = Driver::new(hook, (800, 600));
        driver.run_headless(&mut clock, 5);
        assert!(!driver.into_hook().cancelled);
    }
}
