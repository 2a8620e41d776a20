//! Held-key tracking that resolves to one action per frame.
//!
//! Keys are kept in the order they were pressed and the oldest one wins. A
//! held key does not fire on consecutive frames: if the first held key is
//! the action emitted on the previous frame, this frame gets `None`. Holding
//! a key therefore repeats it every other frame (15 Hz at 30 Hz), while a
//! tap fires exactly once.
//!
//! Supports terminals that do not emit key release events by using a
//! timeout counted in frames.

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::map::action_for_key;
use crate::types::Action;

/// Frames after the last press before held keys are dropped on terminals
/// without release events. Two frames let a tap fire exactly once.
pub const DEFAULT_RELEASE_TIMEOUT_FRAMES: u32 = 2;

/// Tracks held keys for per-frame action resolution.
#[derive(Debug, Clone)]
pub struct KeyState {
    /// Held actions, oldest press first
    held: ArrayVec<Action, 8>,
    /// Action resolved on the previous frame
    last: Action,
    frames_since_press: u32,
    release_timeout_frames: Option<u32>,
}

impl KeyState {
    pub fn new() -> Self {
        Self {
            held: ArrayVec::new(),
            last: Action::None,
            frames_since_press: 0,
            release_timeout_frames: Some(DEFAULT_RELEASE_TIMEOUT_FRAMES),
        }
    }

    /// Use when the terminal reports key releases: keys stay held until
    /// [`KeyState::release`] is called.
    pub fn without_release_timeout(mut self) -> Self {
        self.release_timeout_frames = None;
        self
    }

    /// Record a press. Repeated presses of a held key only refresh the timeout.
    pub fn press(&mut self, action: Action) {
        self.frames_since_press = 0;
        if !self.held.contains(&action) {
            // Full means eight distinct keys are down; ignoring a ninth is fine.
            let _ = self.held.try_push(action);
        }
    }

    /// Record a release of every instance of `action`.
    pub fn release(&mut self, action: Action) {
        self.held.retain(|held| *held != action);
    }

    /// Press by key code. Returns the mapped action, if any.
    pub fn press_key(&mut self, code: KeyCode) -> Option<Action> {
        let action = action_for_key(code)?;
        self.press(action);
        Some(action)
    }

    pub fn release_key(&mut self, code: KeyCode) {
        if let Some(action) = action_for_key(code) {
            self.release(action);
        }
    }

    pub fn held(&self) -> &[Action] {
        &self.held
    }

    /// Resolve the action for this frame. Call exactly once per frame.
    pub fn next_action(&mut self) -> Action {
        let action = match self.held.first() {
            None => Action::None,
            Some(&first) if first == self.last => Action::None,
            Some(&first) => first,
        };
        self.last = action;

        // Auto-release when terminal does not emit release events.
        if let Some(timeout) = self.release_timeout_frames {
            self.frames_since_press = self.frames_since_press.saturating_add(1);
            if self.frames_since_press >= timeout {
                self.held.clear();
            }
        }

        action
    }
}

impl Default for KeyState {
    fn default() -> Self {
        Self::new()
    }
}
