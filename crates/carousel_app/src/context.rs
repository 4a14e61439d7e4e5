use carousel_core::Time;

/// Per-frame context passed to every [`FrameHook`](crate::FrameHook)
/// callback.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    /// Frame timing: delta, elapsed, FPS.  Event callbacks get the timestamp
    /// of the latest frame.
    pub time: Time,

    /// Current window size in physical pixels.
    pub window_size: (u32, u32),

    pub(crate) stop_requested: bool,
}

impl FrameContext {
    pub fn new(time: Time, window_size: (u32, u32)) -> Self {
        Self {
            time,
            window_size,
            stop_requested: false,
        }
    }

    /// Do not request another frame after this one.
    pub fn request_stop(&mut self) {
        self.stop_requested = true;
    }

    pub fn stop_requested(&self) -> bool {
        self.stop_requested
    }

    /// Aspect ratio (width / height). Returns 1.0 if height is zero.
    #[inline]
    pub fn aspect(&self) -> f32 {
        let (w, h) = self.window_size;
        if h == 0 { 1.0 } else { w as f32 / h as f32 }
    }
}
