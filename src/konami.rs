//! Key sequence detector
//!
//! Watches every key press (focus does not matter) and fires when the last
//! ten key codes spell out the classic cheat code.

use std::collections::VecDeque;

pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "KeyB",
    "KeyA",
];

/// Sliding window over the most recent key codes.
#[derive(Debug, Clone)]
pub struct KeySequenceDetector {
    sequence: Vec<String>,
    window: VecDeque<String>,
}

impl KeySequenceDetector {
    pub fn new<I, S>(sequence: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sequence: Vec<String> = sequence.into_iter().map(Into::into).collect();
        let window = VecDeque::with_capacity(sequence.len() + 1);
        Self { sequence, window }
    }

    /// Feed one key code. Returns true exactly when the window completes
    /// the sequence; the window is then emptied.
    pub fn push(&mut self, code: &str) -> bool {
        if self.sequence.is_empty() {
            return false;
        }

        self.window.push_back(code.to_string());
        if self.window.len() > self.sequence.len() {
            self.window.pop_front();
        }

        if self.window.len() == self.sequence.len() && self.window.iter().eq(self.sequence.iter()) {
            self.window.clear();
            return true;
        }
        false
    }

    pub fn pending(&self) -> usize {
        self.window.len()
    }
}

impl Default for KeySequenceDetector {
    fn default() -> Self {
        Self::new(KONAMI_SEQUENCE)
    }
}
