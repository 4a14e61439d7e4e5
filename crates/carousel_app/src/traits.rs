use crate::context::FrameContext;
use crate::events::CarouselEvent;

/// Per-frame callback registered with a [`Driver`](crate::Driver).
///
/// This is the seam between the carousel and whatever owns the render loop:
/// a winit window ([`run_windowed`](crate::run_windowed)), a browser
/// `requestAnimationFrame` shim, or a headless replay.  Only `on_frame` is
/// required.
///
/// ```rust,ignore
/// struct Spinner { angle: f32 }
///
/// impl FrameHook for Spinner {
///     fn on_frame(&mut self, ctx: &mut FrameContext) {
///         self.angle += ctx.time.delta;
///         if self.angle > 10.0 {
///             ctx.request_stop();
///         }
///     }
/// }
/// ```
#[allow(unused_variables)]
pub trait FrameHook {
    /// Called once per displayed frame while a frame request is pending.
    ///
    /// Calling [`FrameContext::request_stop`] ends the loop: no further frame
    /// is requested.
    fn on_frame(&mut self, ctx: &mut FrameContext);

    /// Called for every input event, between frames.
    fn on_event(&mut self, event: &CarouselEvent, ctx: &mut FrameContext) {}

    /// Called once when the pending frame request is cancelled.
    fn on_cancel(&mut self) {}
}
