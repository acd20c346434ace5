//! Session state: working directory and command history.

/// What the input field should show after a history key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryRecall {
    /// Replace the input with this entry.
    Recall(String),
    /// Empty the input.
    Clear,
    /// Leave the input alone.
    Unchanged,
}

/// Per-page state. Created once, never persisted.
#[derive(Debug, Clone)]
pub struct Session {
    pub cwd: String,
    history: Vec<String>,
    /// Equal to `history.len()` when nothing is selected.
    cursor: usize,
}

impl Session {
    pub fn new(cwd: &str) -> Self {
        Self {
            cwd: cwd.to_string(),
            history: Vec::new(),
            cursor: 0,
        }
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Record a submitted line. Blank lines are not kept.
    pub fn push_history(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        self.history.push(line.to_string());
        self.cursor = self.history.len();
    }

    pub fn history_up(&mut self) -> HistoryRecall {
        if self.cursor == 0 {
            return HistoryRecall::Unchanged;
        }
        self.cursor -= 1;
        HistoryRecall::Recall(self.history[self.cursor].clone())
    }

    pub fn history_down(&mut self) -> HistoryRecall {
        if self.cursor + 1 < self.history.len() {
            self.cursor += 1;
            return HistoryRecall::Recall(self.history[self.cursor].clone());
        }
        self.cursor = self.history.len();
        HistoryRecall::Clear
    }
}
