//! The single mutable source of truth of an open carousel.
//!
//! Field ownership is split by writer:
//! - input adapters write the *target* (`target_angle`, `target_index`), the
//!   drag sub-state and the transition lock;
//! - only the per-frame [`Interpolator`](super::interpolator::Interpolator)
//!   writes the *current* angle and index.
//!
//! Nothing here is shared across threads.  A host that feeds events from
//! another thread must wrap the whole state in one mutex.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::angle::Ring;
use crate::config::MotionConfig;
use crate::item::ItemId;
use crate::time::Time;

/// Turns of accumulated rotation tolerated before [`CarouselState::rebase_turns`]
/// folds the angles back toward zero.
pub const REBASE_TURNS: f32 = 4.0;

// ─── Direction conventions ─────────────────────────────────────────────────

/// User-facing step direction: `Next` is the "forward" button / right arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NudgeDirection {
    Prev,
    Next,
}

impl NudgeDirection {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            NudgeDirection::Prev => -1.0,
            NudgeDirection::Next => 1.0,
        }
    }
}

/// How a nudge direction maps onto the ring.
///
/// The camera stands at the centre and the ring is laid out counter-clockwise
/// seen from above, so item `i - 1` appears to the viewer's *right* of item
/// `i`.  `Reversed` makes `Next` move toward the item on the right (the index
/// decreases), which is what a viewer expects from a right arrow.  `Literal`
/// makes `Next` increase the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NudgeConvention {
    #[default]
    Reversed,
    Literal,
}

impl NudgeConvention {
    /// Sign applied to `angle_step` for a nudge in `direction`.
    #[inline]
    pub fn angle_sign(self, direction: NudgeDirection) -> f32 {
        match self {
            NudgeConvention::Reversed => -direction.sign(),
            NudgeConvention::Literal => direction.sign(),
        }
    }
}

// ─── Sub-states ────────────────────────────────────────────────────────────

/// Timed lock that keeps discrete jumps from overlapping.
///
/// The deadline lives on the session's own frame clock, so dropping the
/// state drops the "timer" with it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransitionLock {
    until: Option<f64>,
}

impl TransitionLock {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.until.is_some()
    }

    /// Lock until `now + cooldown`, replacing any previous deadline.
    pub fn engage(&mut self, now: f64, cooldown: f64) {
        self.until = Some(now + cooldown);
    }

    /// Release the lock once `now` reaches the deadline.  Returns `true` on
    /// the frame the lock is released.
    pub fn update(&mut self, now: f64) -> bool {
        match self.until {
            Some(deadline) if now >= deadline => {
                self.until = None;
                true
            }
            _ => false,
        }
    }
}

/// Pointer-drag sub-state.
///
/// Pointer-move events only record `pending_norm_x`; the frame tick turns
/// the difference to `last_norm_x` into rotation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    pub active: bool,
    pub last_norm_x: f32,
    pub pending_norm_x: f32,
}

/// Emitted when the displayed item changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChange {
    pub from: usize,
    pub to: usize,
}

// ─── CarouselState ─────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct CarouselState {
    ring: Ring,
    current_index: usize,
    target_index: usize,
    target_angle: f32,
    current_angle: f32,
    transition: TransitionLock,
    drag: DragState,
    hovered: Option<ItemId>,
    convention: NudgeConvention,
    cooldown: f64,
    /// Timestamp of the latest frame, used to start cooldowns from event
    /// handlers that run between frames.
    now: f64,
}

impl CarouselState {
    /// Fresh state for `item_count` items, facing item 0.
    pub fn new(item_count: usize, motion: &MotionConfig) -> Self {
        Self {
            ring: Ring::new(item_count),
            current_index: 0,
            target_index: 0,
            target_angle: 0.0,
            current_angle: 0.0,
            transition: TransitionLock::default(),
            drag: DragState::default(),
            hovered: None,
            convention: motion.convention,
            cooldown: motion.cooldown_secs(),
            now: 0.0,
        }
    }

    /// Start facing `index` instead of item 0, without any animation.
    pub fn with_start_index(mut self, index: usize) -> Self {
        if !self.ring.is_empty() {
            let index = index % self.ring.item_count();
            let angle = self.ring.index_to_angle(index);
            self.current_index = index;
            self.target_index = index;
            self.current_angle = angle;
            self.target_angle = angle;
        }
        self
    }

    // ── read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.ring.item_count()
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[inline]
    pub fn target_index(&self) -> usize {
        self.target_index
    }

    #[inline]
    pub fn current_angle(&self) -> f32 {
        self.current_angle
    }

    #[inline]
    pub fn target_angle(&self) -> f32 {
        self.target_angle
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_active()
    }

    #[inline]
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    #[inline]
    pub fn hovered(&self) -> Option<ItemId> {
        self.hovered
    }

    #[inline]
    pub fn convention(&self) -> NudgeConvention {
        self.convention
    }

    // ── target writers (input side) ───────────────────────────────────────

    /// Discrete one-item step.
    ///
    /// Ignored while the transition lock is held or when there is nothing to
    /// navigate.  Returns whether the nudge was accepted.
    pub fn nudge(&mut self, direction: NudgeDirection) -> bool {
        if self.ring.is_empty() {
            return false;
        }
        if self.transition.is_active() {
            log::trace!("nudge {direction:?} ignored: transition in progress");
            return false;
        }
        let step = self.convention.angle_sign(direction) * self.ring.angle_step();
        self.set_target_angle(self.target_angle + step);
        self.transition.engage(self.now, self.cooldown);
        log::debug!("nudge {direction:?} -> target index {}", self.target_index);
        true
    }

    /// Absolute jump to `index`, taking the short way round.  Engages the
    /// transition lock but is not blocked by it.
    pub fn jump_to_index(&mut self, index: usize) {
        if self.ring.is_empty() {
            return;
        }
        let index = index.min(self.ring.item_count() - 1);
        let angle = self
            .ring
            .nearest_equivalent(self.ring.index_to_angle(index), self.target_angle);
        self.target_angle = angle;
        self.target_index = index;
        self.transition.engage(self.now, self.cooldown);
    }

    /// Move the target to an arbitrary angle and re-derive the target index.
    pub fn set_target_angle(&mut self, angle: f32) {
        self.target_angle = angle;
        self.target_index = self.ring.angle_to_index(angle);
    }

    /// Move the target to the closest item boundary.
    pub fn snap_target(&mut self) {
        let index = self.ring.angle_to_index(self.target_angle);
        let angle = self
            .ring
            .nearest_equivalent(self.ring.index_to_angle(index), self.target_angle);
        self.set_target_angle(angle);
    }

    pub fn drag_mut(&mut self) -> &mut DragState {
        &mut self.drag
    }

    pub fn set_hovered(&mut self, hovered: Option<ItemId>) {
        self.hovered = hovered;
    }

    // ── frame-side writers ────────────────────────────────────────────────

    /// Advance the state's notion of "now" and release an expired lock.
    pub fn advance_clock(&mut self, time: &Time) {
        self.now = time.elapsed;
        if self.transition.update(self.now) {
            log::trace!("transition lock released at {:.3}s", self.now);
        }
    }

    /// Shift both angles by the same whole number of turns once the current
    /// angle has wandered more than [`REBASE_TURNS`] turns from zero.
    ///
    /// Placement and indices only see the angles modulo a turn, but f32
    /// spacing grows with magnitude and would eventually swallow the
    /// per-frame smoothing step.
    pub fn rebase_turns(&mut self) -> bool {
        if self.current_angle.abs() < REBASE_TURNS * TAU {
            return false;
        }
        let shift = (self.current_angle / TAU).trunc() * TAU;
        self.current_angle -= shift;
        self.target_angle -= shift;
        log::trace!("angles rebased by {shift:.3} rad");
        true
    }

    /// Store the smoothed angle and re-derive the displayed index.
    pub fn set_current_angle(&mut self, angle: f32) -> Option<IndexChange> {
        self.current_angle = angle;
        let index = self.ring.angle_to_index(angle);
        if index != self.current_index {
            let change = IndexChange { from: self.current_index, to: index };
            self.current_index = index;
            Some(change)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(n: usize) -> CarouselState {
        CarouselState::new(n, &MotionConfig::default())
    }

    fn literal(n: usize) -> CarouselState {
        let motion = MotionConfig {
            convention: NudgeConvention::Literal,
            ..MotionConfig::default()
        };
        CarouselState::new(n, &motion)
    }

    #[test]
    fn reversed_next_decrements_index() {
        let mut s = state(5).with_start_index(2);
        assert!(s.nudge(NudgeDirection::Next));
        assert_eq!(s.target_index(), 1);
    }

    #[test]
    fn literal_next_increments_index() {
        let mut s = literal(5).with_start_index(2);
        assert!(s.nudge(NudgeDirection::Next));
        assert_eq!(s.target_index(), 3);
    }

    #[test]
    fn prev_wraps_under_both_conventions() {
        let mut s = state(5);
        s.nudge(NudgeDirection::Next);
        assert_eq!(s.target_index(), 4);

        let mut s = literal(5);
        s.nudge(NudgeDirection::Prev);
        assert_eq!(s.target_index(), 4);
    }

    #[test]
    fn transition_lock_blocks_second_nudge() {
        let mut s = state(5).with_start_index(2);
        s.advance_clock(&Time::fixed(0.016, 0));
        assert!(s.nudge(NudgeDirection::Next));
        assert!(s.is_transitioning());
        assert!(!s.nudge(NudgeDirection::Next));
        assert_eq!(s.target_index(), 1);

        // still inside the 500 ms window
        s.advance_clock(&Time { elapsed: 0.4, ..Time::default() });
        assert!(!s.nudge(NudgeDirection::Next));
        assert_eq!(s.target_index(), 1);

        s.advance_clock(&Time { elapsed: 0.6, ..Time::default() });
        assert!(!s.is_transitioning());
        assert!(s.nudge(NudgeDirection::Next));
        assert_eq!(s.target_index(), 0);
    }

    #[test]
    fn jump_restarts_cooldown_and_takes_short_way() {
        let mut s = state(4);
        // pretend several turns were accumulated by dragging
        s.set_target_angle(6.0 * std::f32::consts::TAU + 0.1);
        s.jump_to_index(3);
        assert_eq!(s.target_index(), 3);
        assert!(s.is_transitioning());
        let expected = 6.0 * std::f32::consts::TAU - std::f32::consts::FRAC_PI_2;
        assert!((s.target_angle() - expected).abs() < 1e-3);
    }

    #[test]
    fn empty_carousel_ignores_navigation() {
        let mut s = state(0);
        assert!(!s.nudge(NudgeDirection::Next));
        s.jump_to_index(3);
        assert_eq!(s.target_index(), 0);
        assert!(!s.is_transitioning());
        assert_eq!(s.set_current_angle(2.0), None);
    }

    #[test]
    fn snap_target_lands_on_item() {
        let mut s = state(8);
        let step = s.ring().angle_step();
        s.set_target_angle(-3.0 * step - 0.2 * step);
        s.snap_target();
        assert_eq!(s.target_index(), 5);
        assert!((s.target_angle() + 3.0 * step).abs() < 1e-4);
    }

    #[test]
    fn current_angle_reports_index_changes() {
        let mut s = state(4);
        let step = s.ring().angle_step();
        assert_eq!(s.set_current_angle(0.4 * step), None);
        assert_eq!(s.set_current_angle(0.6 * step), Some(IndexChange { from: 0, to: 1 }));
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn rebase_keeps_indices_and_gap() {
        let mut s = state(6);
        let step = s.ring().angle_step();
        assert!(!s.rebase_turns());

        let far = 40.0 * TAU + 2.0 * step;
        s.set_current_angle(far);
        s.set_target_angle(far + 0.5);
        let (current_index, target_index) = (s.current_index(), s.target_index());
        assert!(s.rebase_turns());
        assert!(s.current_angle().abs() < TAU);
        assert!((s.target_angle() - s.current_angle() - 0.5).abs() < 1e-3);
        assert_eq!(s.ring().angle_to_index(s.current_angle()), current_index);
        assert_eq!(s.ring().angle_to_index(s.target_angle()), target_index);
    }
}
