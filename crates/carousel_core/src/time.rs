//! Frame timing utilities.
//!
//! `Time` is produced once per frame and handed to every per-frame step of
//! the carousel (interpolation, drag sampling, transition cooldown).  A live
//! host uses [`TimeClock`], which reads the wall clock; tests and headless
//! replays build snapshots with [`Time::fixed`] so runs are deterministic.
//!
//! # Example
//! ```rust
//! use carousel_core::time::Time;
//!
//! // third frame of a 60 Hz timeline
//! let t = Time::fixed(1.0 / 60.0, 2);
//! assert_eq!(t.frame_count, 2);
//! assert!((t.elapsed - 0.05).abs() < 1e-6);
//! ```

#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;
#[cfg(target_arch = "wasm32")]
use web_time::Instant;

/// Largest delta a single frame may report.  Longer stalls (debugger,
/// backgrounded tab) would otherwise teleport the smoothed angle.
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// A snapshot of timing information for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Time {
    /// Seconds elapsed since the previous frame, clamped to
    /// [`MAX_FRAME_DELTA`].
    pub delta: f32,

    /// Total seconds elapsed since the clock started.
    pub elapsed: f64,

    /// Number of frames produced so far (starts at 0 for the first frame).
    pub frame_count: u64,

    /// Instantaneous frames-per-second derived from `delta`.
    pub fps: f32,
}

impl Default for Time {
    fn default() -> Self {
        Self {
            delta: 0.0,
            elapsed: 0.0,
            frame_count: 0,
            fps: 0.0,
        }
    }
}

impl Time {
    /// Snapshot of frame `frame_count` of a fixed-step timeline, where every
    /// frame lasts `delta` seconds.
    pub fn fixed(delta: f32, frame_count: u64) -> Self {
        let delta = delta.clamp(0.0, MAX_FRAME_DELTA);
        Self {
            delta,
            elapsed: delta as f64 * (frame_count + 1) as f64,
            frame_count,
            fps: if delta > 0.0 { 1.0 / delta } else { 0.0 },
        }
    }

    /// Returns the delta time clamped to `[0, max_dt]`.
    #[inline]
    pub fn clamped_delta(&self, max_dt: f32) -> f32 {
        self.delta.min(max_dt)
    }
}

// ─── Clocks ────────────────────────────────────────────────────────────────

/// Stateful wall-clock timer producing [`Time`] snapshots.
///
/// The driver creates one at mount and calls `tick()` at the beginning of
/// every frame.
#[derive(Debug)]
pub struct TimeClock {
    start:       Instant,
    last_tick:   Instant,
    frame_count: u64,
}

impl TimeClock {
    /// Create a new clock, starting the epoch now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start:       now,
            last_tick:   now,
            frame_count: 0,
        }
    }

    /// Return the current [`Time`] snapshot without advancing the clock.
    ///
    /// Event handlers use this: they need a timestamp but must not count as
    /// a frame.
    pub fn peek(&self) -> Time {
        self.snapshot(Instant::now())
    }

    /// Advance by one frame.  Returns the [`Time`] snapshot for this frame.
    pub fn tick(&mut self) -> Time {
        let now  = Instant::now();
        let time = self.snapshot(now);
        self.last_tick    = now;
        self.frame_count += 1;
        time
    }

    fn snapshot(&self, now: Instant) -> Time {
        let raw_dt  = (now - self.last_tick).as_secs_f32();
        let delta   = raw_dt.min(MAX_FRAME_DELTA);
        let elapsed = (now - self.start).as_secs_f64();
        let fps     = if delta > 0.0 { 1.0 / delta } else { 0.0 };
        Time { delta, elapsed, frame_count: self.frame_count, fps }
    }
}

impl Default for TimeClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-step clock for headless replays: every `tick()` advances by the
/// same delta regardless of how long the frame actually took.
#[derive(Debug, Clone)]
pub struct FixedClock {
    step:        f32,
    frame_count: u64,
}

impl FixedClock {
    pub fn new(step: f32) -> Self {
        Self { step, frame_count: 0 }
    }

    pub fn peek(&self) -> Time {
        // the timestamp of the last completed frame
        match self.frame_count {
            0 => Time::default(),
            n => Time::fixed(self.step, n - 1),
        }
    }

    pub fn tick(&mut self) -> Time {
        let time = Time::fixed(self.step, self.frame_count);
        self.frame_count += 1;
        time
    }
}
