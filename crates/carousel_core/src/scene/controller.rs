use std::collections::HashMap;

use glam::Vec3;

use crate::carousel::state::NudgeDirection;
use crate::input::{KeyCode, PressedKeys};

/// What a bound key does while the carousel is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Step one item in the given direction.
    Nudge(NudgeDirection),
    /// Ask the host to close the carousel.
    Close,
}

/// Maps keys to carousel actions and to free-fly movement axes.
///
/// The carousel only reacts to [`KeyAction`] bindings.  Fly bindings are
/// tracked in the same pressed-key set so a free-fly view that shares the
/// keyboard adapter can query it through
/// [`KeyboardAdapter::fly_direction`](crate::carousel::KeyboardAdapter::fly_direction).
///
/// # Example
/// ```rust,ignore
/// use carousel_core::scene::{Controller, KeyAction};
/// use carousel_core::carousel::NudgeDirection;
/// use carousel_core::input::KeyCode;
///
/// let mut controller = Controller::new();
/// controller.bind(KeyCode::PageUp,   KeyAction::Nudge(NudgeDirection::Prev));
/// controller.bind(KeyCode::PageDown, KeyAction::Nudge(NudgeDirection::Next));
/// controller.bind(KeyCode::Escape,   KeyAction::Close);
/// ```
#[derive(Debug, Clone)]
pub struct Controller {
    actions: HashMap<KeyCode, KeyAction>,
    fly_axes: HashMap<KeyCode, Vec3>,
}

impl Controller {
    /// Creates an empty controller with no key bindings.
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
            fly_axes: HashMap::new(),
        }
    }

    /// Arrow keys and A/D to step, Escape to close, W/S and the vertical
    /// arrows as free-fly forward/back.
    pub fn with_default_bindings() -> Self {
        let mut ctl = Self::new();
        ctl.bind(KeyCode::ArrowLeft,  KeyAction::Nudge(NudgeDirection::Prev));
        ctl.bind(KeyCode::KeyA,       KeyAction::Nudge(NudgeDirection::Prev));
        ctl.bind(KeyCode::ArrowRight, KeyAction::Nudge(NudgeDirection::Next));
        ctl.bind(KeyCode::KeyD,       KeyAction::Nudge(NudgeDirection::Next));
        ctl.bind(KeyCode::Escape,     KeyAction::Close);
        ctl.bind_fly(KeyCode::ArrowUp,   Vec3::new(0.0, 0.0,  1.0));
        ctl.bind_fly(KeyCode::KeyW,      Vec3::new(0.0, 0.0,  1.0));
        ctl.bind_fly(KeyCode::ArrowDown, Vec3::new(0.0, 0.0, -1.0));
        ctl.bind_fly(KeyCode::KeyS,      Vec3::new(0.0, 0.0, -1.0));
        ctl
    }

    /// Binds `key` to a carousel action, replacing any previous binding.
    pub fn bind(&mut self, key: KeyCode, action: KeyAction) {
        self.actions.insert(key, action);
    }

    /// Binds `key` to a camera-space free-fly direction.
    pub fn bind_fly(&mut self, key: KeyCode, dir: Vec3) {
        self.fly_axes.insert(key, dir);
    }

    /// Removes every binding for `key`, if any.
    pub fn unbind(&mut self, key: KeyCode) {
        self.actions.remove(&key);
        self.fly_axes.remove(&key);
    }

    /// Removes all key bindings.
    pub fn clear_bindings(&mut self) {
        self.actions.clear();
        self.fly_axes.clear();
    }

    pub fn action(&self, key: KeyCode) -> Option<KeyAction> {
        self.actions.get(&key).copied()
    }

    /// Sum of the fly directions whose keys are held.  Not normalised.
    pub fn fly_direction(&self, keys: &PressedKeys) -> Vec3 {
        let mut out = Vec3::ZERO;
        for (key, dir) in &self.fly_axes {
            if keys.is_pressed(*key) {
                out += *dir;
            }
        }
        out
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::with_default_bindings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings() {
        let ctl = Controller::default();
        assert_eq!(ctl.action(KeyCode::ArrowLeft), Some(KeyAction::Nudge(NudgeDirection::Prev)));
        assert_eq!(ctl.action(KeyCode::KeyD), Some(KeyAction::Nudge(NudgeDirection::Next)));
        assert_eq!(ctl.action(KeyCode::Escape), Some(KeyAction::Close));
        assert_eq!(ctl.action(KeyCode::ArrowUp), None);
    }

    #[test]
    fn rebinding_and_unbinding() {
        let mut ctl = Controller::new();
        ctl.bind(KeyCode::KeyQ, KeyAction::Close);
        ctl.bind(KeyCode::KeyQ, KeyAction::Nudge(NudgeDirection::Prev));
        assert_eq!(ctl.action(KeyCode::KeyQ), Some(KeyAction::Nudge(NudgeDirection::Prev)));
        ctl.unbind(KeyCode::KeyQ);
        assert_eq!(ctl.action(KeyCode::KeyQ), None);
    }

    #[test]
    fn fly_direction_sums_held_keys() {
        let ctl = Controller::default();
        let mut keys = PressedKeys::new();
        assert_eq!(ctl.fly_direction(&keys), Vec3::ZERO);
        keys.press(KeyCode::KeyW);
        keys.press(KeyCode::ArrowUp);
        assert_eq!(ctl.fly_direction(&keys), Vec3::new(0.0, 0.0, 2.0));
        keys.press(KeyCode::KeyS);
        assert_eq!(ctl.fly_direction(&keys), Vec3::new(0.0, 0.0, 1.0));
    }
}
