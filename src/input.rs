//! Keyboard state tracking.
//!
//! `InputState` is fed raw key events by the host and answers two kinds of
//! query:
//!
//! - level: [`InputState::is_down`] reports whether a key is held right now
//! - edge: [`InputState::was_pressed`] reports a press once, then clears it
//!
//! Key codes are the DOM `KeyboardEvent.code` strings (`"ArrowLeft"`,
//! `"Space"`, ...), so the browser host can pass them through untouched.
//!
//! ```
//! use atom_deflector::InputState;
//!
//! let mut input = InputState::new();
//! input.key_down("Space", false);
//! assert!(input.is_down("Space"));
//! assert!(input.was_pressed("Space"));
//! // consumed
//! assert!(!input.was_pressed("Space"));
//! ```

use std::collections::HashMap;

/// Pressed/released state per key code.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Auto-repeat events are ignored so a consumed
    /// press is not re-armed while the key stays held.
    pub fn key_down(&mut self, code: &str, repeat: bool) {
        if repeat {
            return;
        }
        self.keys.insert(code.to_string(), true);
    }

    /// Record a key release
    pub fn key_up(&mut self, code: &str) {
        self.keys.insert(code.to_string(), false);
    }

    /// Level-sensitive query
    pub fn is_down(&self, code: &str) -> bool {
        self.keys.get(code).copied().unwrap_or(false)
    }

    /// Edge-triggered query: returns the current state and clears it.
    ///
    /// After a `true` result `is_down` also reports `false` until the next
    /// non-repeat press.
    pub fn was_pressed(&mut self, code: &str) -> bool {
        match self.keys.get_mut(code) {
            Some(down) => std::mem::replace(down, false),
            None => false,
        }
    }

    /// Forget every key (e.g. on focus loss)
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_state_follows_events() {
        let mut input = InputState::new();
        assert!(!input.is_down("ArrowLeft"));

        input.key_down("ArrowLeft", false);
        assert!(input.is_down("ArrowLeft"));
        assert!(input.is_down("ArrowLeft"));

        input.key_up("ArrowLeft");
        assert!(!input.is_down("ArrowLeft"));
    }

    #[test]
    fn test_was_pressed_consumes_once() {
        let mut input = InputState::new();
        input.key_down("Space", false);

        assert!(input.was_pressed("Space"));
        assert!(!input.was_pressed("Space"));
        assert!(!input.is_down("Space"));
    }

    #[test]
    fn test_repeat_does_not_rearm() {
        let mut input = InputState::new();
        input.key_down("Space", false);
        assert!(input.was_pressed("Space"));

        // Held key generating repeats
        input.key_down("Space", true);
        assert!(!input.was_pressed("Space"));

        input.key_up("Space");
        input.key_down("Space", false);
        assert!(input.was_pressed("Space"));
    }

    #[test]
    fn test_unknown_key() {
        let mut input = InputState::new();
        assert!(!input.is_down("KeyQ"));
        assert!(!input.was_pressed("KeyQ"));
    }

    #[test]
    fn test_clear() {
        let mut input = InputState::new();
        input.key_down("ArrowRight", false);
        input.clear();
        assert!(!input.is_down("ArrowRight"));
    }
}
