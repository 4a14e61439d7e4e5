use std::collections::HashSet;

/// Re-exported key and mouse enums from `winit` for convenience.
// winit 0.30 moved key codes under `winit::keyboard`; the alias keeps
// callers independent of that layout.
pub use winit::event::MouseButton;
pub use winit::keyboard::KeyCode;

/// Set of keys currently held down.
///
/// Owned by a single [`KeyboardAdapter`](crate::carousel::keyboard::KeyboardAdapter);
/// the only mutations are add, remove and clear, so the set can be handed to
/// the frame driver by reference without any shared global state.
#[derive(Debug, Default, Clone)]
pub struct PressedKeys {
    keys_down: HashSet<KeyCode>,
}

impl PressedKeys {
    /// Creates a fresh, empty key set.
    pub fn new() -> Self {
        Default::default()
    }

    /// Record a key press.  Returns `true` only for a fresh press, so OS
    /// auto-repeat of a held key reports `false`.
    pub fn press(&mut self, key: KeyCode) -> bool {
        self.keys_down.insert(key)
    }

    /// Record a key release.  Returns `true` if the key was held.
    pub fn release(&mut self, key: KeyCode) -> bool {
        self.keys_down.remove(&key)
    }

    /// Forget every held key, e.g. when the window loses focus and the
    /// matching key-up events will never arrive.
    pub fn clear(&mut self) {
        self.keys_down.clear();
    }

    /// Returns true if the given key is currently pressed down.
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys_down.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys_down.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys_down.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_tracking() {
        let mut keys = PressedKeys::new();
        assert!(!keys.is_pressed(KeyCode::ArrowLeft));
        assert!(keys.press(KeyCode::ArrowLeft));
        assert!(keys.is_pressed(KeyCode::ArrowLeft));
        // auto-repeat
        assert!(!keys.press(KeyCode::ArrowLeft));
        assert_eq!(keys.len(), 1);
        assert!(keys.release(KeyCode::ArrowLeft));
        assert!(!keys.release(KeyCode::ArrowLeft));
        assert!(keys.is_empty());
    }

    #[test]
    fn clear_forgets_everything() {
        let mut keys = PressedKeys::new();
        keys.press(KeyCode::KeyA);
        keys.press(KeyCode::ArrowUp);
        keys.clear();
        assert!(keys.is_empty());
        assert_eq!(keys.iter().count(), 0);
    }
}
