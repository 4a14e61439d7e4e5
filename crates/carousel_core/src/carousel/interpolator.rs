//! Per-frame smoothing of the carousel angle.
//!
//! Each tick moves `current_angle` a fraction `f` of the remaining way to
//! `target_angle`.  For a fixed target with `0 < f <= 1` the gap shrinks by
//! `(1 - f)` every frame and can never overshoot.  Once the gap drops below
//! [`SNAP_EPSILON`] the angle is set to the target exactly so the animation
//! terminates instead of creeping forever.

use serde::{Deserialize, Serialize};

use super::state::{CarouselState, IndexChange};
use crate::error::{CarouselError, Result};
use crate::time::Time;

/// Gap (radians) under which the current angle jumps onto the target.
pub const SNAP_EPSILON: f32 = 1e-4;

/// How the blend factor for one frame is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Smoothing {
    /// `f = 1 - exp(-rate * dt)`: the same perceived speed at any refresh
    /// rate.  `rate = 5.0` matches a per-frame factor of about 0.08 at 60 Hz.
    Exponential { rate: f32 },
    /// Fixed `f` applied once per rendered frame, whatever its duration.
    PerFrame { factor: f32 },
}

impl Default for Smoothing {
    fn default() -> Self {
        Smoothing::Exponential { rate: 5.0 }
    }
}

impl Smoothing {
    /// Blend factor for a frame lasting `dt` seconds, always in `[0, 1]`.
    pub fn blend_factor(&self, dt: f32) -> f32 {
        let f = match *self {
            Smoothing::Exponential { rate } => 1.0 - (-rate * dt.max(0.0)).exp(),
            Smoothing::PerFrame { factor } => factor,
        };
        f.clamp(0.0, 1.0)
    }

    pub fn validate(&self) -> Result<()> {
        match *self {
            Smoothing::Exponential { rate } if !(rate.is_finite() && rate > 0.0) => Err(
                CarouselError::invalid("motion.smoothing.rate", "must be a positive number"),
            ),
            Smoothing::PerFrame { factor } if !(factor > 0.0 && factor < 1.0) => Err(
                CarouselError::invalid("motion.smoothing.factor", "must be in (0, 1)"),
            ),
            _ => Ok(()),
        }
    }
}

/// Linear interpolation from `current` toward `target` by `factor`.
#[inline]
pub fn lerp_angle(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Interpolator {
    smoothing: Smoothing,
}

impl Interpolator {
    pub fn new(smoothing: Smoothing) -> Self {
        Self { smoothing }
    }

    pub fn smoothing(&self) -> Smoothing {
        self.smoothing
    }

    /// Advance `state.current_angle` by one frame and re-derive the current
    /// index.  Returns the index change, if any.
    pub fn step(&self, state: &mut CarouselState, time: &Time) -> Option<IndexChange> {
        if state.current_angle() == state.target_angle() {
            return None;
        }
        state.rebase_turns();
        let current = state.current_angle();
        let target = state.target_angle();
        let f = self.smoothing.blend_factor(time.delta);
        let mut next = lerp_angle(current, target, f);
        // a step below f32 resolution would stall the animation short of the target
        if (target - next).abs() < SNAP_EPSILON || (f > 0.0 && next == current) {
            next = target;
        }
        let change = state.set_current_angle(next);
        if let Some(c) = change {
            log::debug!("active item {} -> {}", c.from, c.to);
        }
        change
    }

    /// Whether the current angle has reached the target.
    pub fn is_settled(state: &CarouselState) -> bool {
        state.current_angle() == state.target_angle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::state::NudgeDirection;
    use crate::config::MotionConfig;

    fn converge(smoothing: Smoothing, dt: f32) {
        let mut state = CarouselState::new(6, &MotionConfig::default());
        state.set_target_angle(2.5);
        let interp = Interpolator::new(smoothing);
        let mut gap = (state.target_angle() - state.current_angle()).abs();
        for frame in 0..2000 {
            interp.step(&mut state, &Time::fixed(dt, frame));
            let next_gap = (state.target_angle() - state.current_angle()).abs();
            if gap > 0.0 {
                assert!(next_gap < gap, "gap grew or stalled at frame {frame}");
            } else {
                assert_eq!(next_gap, 0.0);
            }
            // never crosses the target
            assert!(state.current_angle() <= state.target_angle());
            gap = next_gap;
        }
        assert!(Interpolator::is_settled(&state));
        assert_eq!(state.current_index(), state.target_index());
    }

    #[test]
    fn per_frame_converges_monotonically() {
        converge(Smoothing::PerFrame { factor: 0.05 }, 1.0 / 60.0);
        converge(Smoothing::PerFrame { factor: 0.1 }, 1.0 / 144.0);
    }

    #[test]
    fn exponential_converges_monotonically() {
        converge(Smoothing::default(), 1.0 / 60.0);
        converge(Smoothing::Exponential { rate: 12.0 }, 1.0 / 30.0);
    }

    #[test]
    fn exponential_is_frame_rate_independent() {
        let s = Smoothing::Exponential { rate: 5.0 };
        // two 1/120 s frames cover the same ground as one 1/60 s frame
        let f60 = s.blend_factor(1.0 / 60.0);
        let f120 = s.blend_factor(1.0 / 120.0);
        let remaining_120 = (1.0 - f120) * (1.0 - f120);
        assert!(((1.0 - f60) - remaining_120).abs() < 1e-5);
        assert_eq!(s.blend_factor(0.0), 0.0);
    }

    #[test]
    fn zero_delta_leaves_angle_alone() {
        let mut state = CarouselState::new(4, &MotionConfig::default());
        state.set_target_angle(1.0);
        Interpolator::default().step(&mut state, &Time::default());
        assert_eq!(state.current_angle(), 0.0);
    }

    #[test]
    fn large_accumulated_angle_still_settles() {
        let mut state = CarouselState::new(6, &MotionConfig::default());
        state.set_target_angle(1000.0);
        let target_index = state.target_index();
        let interp = Interpolator::new(Smoothing::PerFrame { factor: 0.05 });
        for frame in 0..20_000 {
            interp.step(&mut state, &Time::fixed(1.0 / 60.0, frame));
            if Interpolator::is_settled(&state) {
                break;
            }
        }
        assert!(Interpolator::is_settled(&state));
        assert!(state.target_angle().abs() < 10.0 * std::f32::consts::TAU);
        assert_eq!(state.current_index(), target_index);
    }

    #[test]
    fn index_follows_current_angle() {
        let mut state = CarouselState::new(5, &MotionConfig::default()).with_start_index(2);
        state.nudge(NudgeDirection::Next);
        let interp = Interpolator::new(Smoothing::PerFrame { factor: 0.1 });
        let mut changes = Vec::new();
        for frame in 0..200 {
            if let Some(c) = interp.step(&mut state, &Time::fixed(0.016, frame)) {
                changes.push(c);
            }
        }
        assert_eq!(changes, vec![IndexChange { from: 2, to: 1 }]);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn validates_parameters() {
        assert!(Smoothing::PerFrame { factor: 0.0 }.validate().is_err());
        assert!(Smoothing::PerFrame { factor: 1.0 }.validate().is_err());
        assert!(Smoothing::Exponential { rate: -1.0 }.validate().is_err());
        assert!(Smoothing::Exponential { rate: f32::NAN }.validate().is_err());
        assert!(Smoothing::default().validate().is_ok());
    }
}
