use glam::Vec3;

use super::state::CarouselState;
use crate::input::{KeyCode, PressedKeys};
use crate::scene::controller::{Controller, KeyAction};

/// What a key-down did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    /// Unbound key, auto-repeat, or a key that only feeds free-fly.
    Ignored,
    /// A nudge was requested; `accepted` is false when the transition lock
    /// swallowed it.
    Nudged { accepted: bool },
    /// The host should close the carousel.
    CloseRequested,
}

/// Turns key events into discrete carousel steps.
///
/// Owns the set of held keys.  A nudge fires only on a fresh press, so
/// holding an arrow key does not queue a jump per OS repeat event unless
/// [`allow_repeat`](Self::with_repeat) is switched on.
#[derive(Debug, Clone, Default)]
pub struct KeyboardAdapter {
    keys: PressedKeys,
    controller: Controller,
    allow_repeat: bool,
}

impl KeyboardAdapter {
    pub fn new(controller: Controller) -> Self {
        Self {
            keys: PressedKeys::new(),
            controller,
            allow_repeat: false,
        }
    }

    /// Let repeated key-down events of a held key nudge again.
    pub fn with_repeat(mut self, allow_repeat: bool) -> Self {
        self.allow_repeat = allow_repeat;
        self
    }

    pub fn keys(&self) -> &PressedKeys {
        &self.keys
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Free-fly movement requested by the held keys.
    pub fn fly_direction(&self) -> Vec3 {
        self.controller.fly_direction(&self.keys)
    }

    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    pub fn key_down(&mut self, key: KeyCode, state: &mut CarouselState) -> KeyResponse {
        let fresh = self.keys.press(key);
        if !fresh && !self.allow_repeat {
            return KeyResponse::Ignored;
        }
        match self.controller.action(key) {
            Some(KeyAction::Nudge(direction)) => KeyResponse::Nudged {
                accepted: state.nudge(direction),
            },
            Some(KeyAction::Close) => KeyResponse::CloseRequested,
            None => KeyResponse::Ignored,
        }
    }

    pub fn key_up(&mut self, key: KeyCode) {
        self.keys.release(key);
    }

    /// Window lost focus: the key-up events for anything still held will
    /// never arrive, so forget all of them.
    pub fn blur(&mut self) {
        if !self.keys.is_empty() {
            log::debug!("focus lost, dropping {} held key(s)", self.keys.len());
        }
        self.keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MotionConfig;
    use crate::time::Time;

    fn setup() -> (KeyboardAdapter, CarouselState) {
        (
            KeyboardAdapter::new(Controller::default()),
            CarouselState::new(5, &MotionConfig::default()).with_start_index(2),
        )
    }

    #[test]
    fn right_arrow_steps_once_per_press() {
        let (mut kb, mut state) = setup();
        assert_eq!(
            kb.key_down(KeyCode::ArrowRight, &mut state),
            KeyResponse::Nudged { accepted: true }
        );
        assert_eq!(state.target_index(), 1);

        // OS auto-repeat after the cooldown expired is still ignored
        state.advance_clock(&Time { elapsed: 1.0, ..Time::default() });
        assert_eq!(kb.key_down(KeyCode::ArrowRight, &mut state), KeyResponse::Ignored);
        assert_eq!(state.target_index(), 1);

        kb.key_up(KeyCode::ArrowRight);
        kb.key_down(KeyCode::ArrowRight, &mut state);
        assert_eq!(state.target_index(), 0);
    }

    #[test]
    fn lock_swallows_quick_second_press() {
        let (mut kb, mut state) = setup();
        kb.key_down(KeyCode::ArrowLeft, &mut state);
        kb.key_up(KeyCode::ArrowLeft);
        assert_eq!(
            kb.key_down(KeyCode::ArrowLeft, &mut state),
            KeyResponse::Nudged { accepted: false }
        );
        assert_eq!(state.target_index(), 3);
    }

    #[test]
    fn repeat_can_be_allowed() {
        let (kb, mut state) = setup();
        let mut kb = kb.with_repeat(true);
        kb.key_down(KeyCode::KeyD, &mut state);
        state.advance_clock(&Time { elapsed: 1.0, ..Time::default() });
        kb.key_down(KeyCode::KeyD, &mut state);
        assert_eq!(state.target_index(), 0);
    }

    #[test]
    fn blur_clears_stuck_keys() {
        let (mut kb, mut state) = setup();
        kb.key_down(KeyCode::ArrowRight, &mut state);
        kb.key_down(KeyCode::KeyW, &mut state);
        assert_eq!(kb.keys().len(), 2);
        kb.blur();
        assert!(kb.keys().is_empty());
        // after blur the next press counts as fresh
        state.advance_clock(&Time { elapsed: 1.0, ..Time::default() });
        kb.key_down(KeyCode::ArrowRight, &mut state);
        assert_eq!(state.target_index(), 0);
    }

    #[test]
    fn escape_requests_close_and_fly_keys_do_not_nudge() {
        let (mut kb, mut state) = setup();
        assert_eq!(kb.key_down(KeyCode::Escape, &mut state), KeyResponse::CloseRequested);
        assert_eq!(kb.key_down(KeyCode::ArrowUp, &mut state), KeyResponse::Ignored);
        assert!(kb.keys().is_pressed(KeyCode::ArrowUp));
        assert_eq!(state.target_index(), 2);
    }
}
