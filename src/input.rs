//! Keyboard state and the per-frame input snapshot handed to scenes.

use std::collections::HashSet;

/// The keys the demos react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    /// Switches the camera to an orthographic projection.
    Orthographic,
    /// Switches the camera back to a perspective projection.
    Perspective,
}

impl Key {
    pub fn from_keycode(keycode: sdl2::keyboard::Keycode) -> Option<Key> {
        use sdl2::keyboard::Keycode;

        match keycode {
            Keycode::Escape => Some(Key::Escape),
            Keycode::O => Some(Key::Orthographic),
            Keycode::P => Some(Key::Perspective),
            _ => None,
        }
    }
}

/// The current state of the keyboard.
#[derive(Debug, Default)]
pub struct KeyboardState {
    pub down: HashSet<Key>,
}

impl KeyboardState {
    pub fn press(&mut self, key: Key) {
        self.down.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.down.remove(&key);
    }
}

/// Everything a scene learns about the outside world in one frame.
#[derive(Debug, Default, Clone)]
pub struct FrameInput {
    /// Keys held down at the start of the frame.
    pub keys_down: HashSet<Key>,
    /// The window system asked the window to close.
    pub close_requested: bool,
    /// New framebuffer size, if the window was resized since the last frame.
    pub resized: Option<(i32, i32)>,
}

impl FrameInput {
    pub fn with_keys(keys: &[Key]) -> Self {
        Self {
            keys_down: keys.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// Whether this frame carries a close signal.
    pub fn wants_close(&self) -> bool {
        self.close_requested || self.is_down(Key::Escape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_signal_sources() {
        assert!(!FrameInput::default().wants_close());
        assert!(FrameInput::with_keys(&[Key::Escape]).wants_close());
        assert!(
            FrameInput {
                close_requested: true,
                ..FrameInput::default()
            }
            .wants_close()
        );
        assert!(!FrameInput::with_keys(&[Key::Orthographic]).wants_close());
    }

    #[test]
    fn test_keyboard_tracks_held_keys() {
        let mut keyboard = KeyboardState::default();
        keyboard.press(Key::Orthographic);
        keyboard.press(Key::Escape);
        keyboard.release(Key::Orthographic);
        assert_eq!(keyboard.down, HashSet::from([Key::Escape]));
    }
}
