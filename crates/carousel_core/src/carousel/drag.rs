//! Grab-and-spin pointer dragging.
//!
//! Pointer events arrive at whatever rate the platform delivers them; the
//! rotation is applied once per frame from the latest recorded position so a
//! burst of move events cannot spin the ring faster than it is drawn.
//! Dragging ignores the transition lock: a drag may start right after a
//! keyboard nudge.

use super::state::CarouselState;

/// Pointer X relative to the viewport, mapped to `[-1, 1]`.  A zero-width
/// viewport maps everything to the centre.
#[inline]
pub fn normalized_pointer_x(x: f64, viewport_width: f64) -> f32 {
    if viewport_width <= 0.0 {
        return 0.0;
    }
    ((x / viewport_width) * 2.0 - 1.0) as f32
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAdapter {
    /// Radians of rotation per unit of normalised pointer travel.
    amplification: f32,
    snap_on_release: bool,
}

impl Default for DragAdapter {
    fn default() -> Self {
        Self::new(3.0, false)
    }
}

impl DragAdapter {
    pub fn new(amplification: f32, snap_on_release: bool) -> Self {
        Self {
            amplification,
            snap_on_release,
        }
    }

    pub fn pointer_down(&self, state: &mut CarouselState, x: f64, viewport_width: f64) {
        let norm = normalized_pointer_x(x, viewport_width);
        let drag = state.drag_mut();
        drag.active = true;
        drag.last_norm_x = norm;
        drag.pending_norm_x = norm;
    }

    /// Record the latest pointer position.  No rotation happens here.
    pub fn pointer_move(&self, state: &mut CarouselState, x: f64, viewport_width: f64) {
        let drag = state.drag_mut();
        if drag.active {
            drag.pending_norm_x = normalized_pointer_x(x, viewport_width);
        }
    }

    /// End the drag.  The target stays where the pointer left it unless
    /// snapping on release is enabled.
    pub fn pointer_up(&self, state: &mut CarouselState) {
        if !state.drag().active {
            return;
        }
        // movement since the last frame still counts
        self.frame(state);
        state.drag_mut().active = false;
        if self.snap_on_release {
            state.snap_target();
        }
        log::debug!("drag released at target index {}", state.target_index());
    }

    /// Per-frame step: rotate the target by the pointer travel since the
    /// previous frame.  Returns the applied angle delta.
    pub fn frame(&self, state: &mut CarouselState) -> f32 {
        let drag = *state.drag();
        if !drag.active || state.ring().is_empty() {
            return 0.0;
        }
        let delta = (drag.pending_norm_x - drag.last_norm_x) * self.amplification;
        state.drag_mut().last_norm_x = drag.pending_norm_x;
        if delta != 0.0 {
            state.set_target_angle(state.target_angle() - delta);
        }
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::state::NudgeDirection;
    use crate::config::MotionConfig;

    const WIDTH: f64 = 1000.0;

    fn state() -> CarouselState {
        CarouselState::new(8, &MotionConfig::default())
    }

    #[test]
    fn normalisation() {
        assert_eq!(normalized_pointer_x(0.0, WIDTH), -1.0);
        assert_eq!(normalized_pointer_x(500.0, WIDTH), 0.0);
        assert_eq!(normalized_pointer_x(1000.0, WIDTH), 1.0);
        assert_eq!(normalized_pointer_x(10.0, 0.0), 0.0);
    }

    #[test]
    fn rotation_is_applied_per_frame_not_per_move() {
        let drag = DragAdapter::new(2.0, false);
        let mut s = state();
        drag.pointer_down(&mut s, 500.0, WIDTH);
        drag.pointer_move(&mut s, 550.0, WIDTH);
        drag.pointer_move(&mut s, 600.0, WIDTH);
        assert_eq!(s.target_angle(), 0.0);

        let applied = drag.frame(&mut s);
        // 0.2 normalised units * 2.0, sign inverted
        assert!((applied - 0.4).abs() < 1e-6);
        assert!((s.target_angle() + 0.4).abs() < 1e-6);

        // no movement since the last frame
        assert_eq!(drag.frame(&mut s), 0.0);
    }

    #[test]
    fn target_index_follows_the_drag() {
        let drag = DragAdapter::default();
        let mut s = state();
        let step = s.ring().angle_step();
        drag.pointer_down(&mut s, 500.0, WIDTH);
        // drag left by exactly one step worth of travel
        let travel = (step / 3.0) as f64 * WIDTH / 2.0;
        drag.pointer_move(&mut s, 500.0 + travel, WIDTH);
        drag.frame(&mut s);
        assert_eq!(s.target_index(), 7);
    }

    #[test]
    fn release_leaves_target_unsnapped() {
        let drag = DragAdapter::default();
        let mut s = state();
        drag.pointer_down(&mut s, 500.0, WIDTH);
        drag.pointer_move(&mut s, 530.0, WIDTH);
        drag.pointer_up(&mut s);
        assert!(!s.drag().active);
        assert!((s.target_angle() + 0.18).abs() < 1e-5);

        // moves after release are ignored
        drag.pointer_move(&mut s, 900.0, WIDTH);
        assert_eq!(drag.frame(&mut s), 0.0);
    }

    #[test]
    fn release_can_snap() {
        let drag = DragAdapter::new(3.0, true);
        let mut s = state();
        drag.pointer_down(&mut s, 500.0, WIDTH);
        drag.pointer_move(&mut s, 530.0, WIDTH);
        drag.pointer_up(&mut s);
        assert_eq!(s.target_angle(), 0.0);
        assert_eq!(s.target_index(), 0);
    }

    #[test]
    fn drag_is_not_blocked_by_the_transition_lock() {
        let drag = DragAdapter::default();
        let mut s = state();
        assert!(s.nudge(NudgeDirection::Prev));
        assert!(s.is_transitioning());
        let before = s.target_angle();
        drag.pointer_down(&mut s, 500.0, WIDTH);
        drag.pointer_move(&mut s, 400.0, WIDTH);
        drag.frame(&mut s);
        assert!(s.target_angle() > before);
    }
}
