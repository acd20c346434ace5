//! lvl404-term - A fake terminal for landing pages
//!
//! This library is the presentation-free core of a decorative shell: a fixed
//! command table, a tiny read-only filesystem and per-page session state.
//! Every input event answers with [`Record`]s that a renderer turns into
//! styled lines or page effects.

pub mod commands;
pub mod content;
pub mod fs;
pub mod konami;
pub mod options;
pub mod output;
pub mod session;
pub mod terminal;

pub use options::{ConfigError, TerminalOptions};
pub use output::{Animation, Category, Effect, Record};
pub use session::{HistoryRecall, Session};
pub use terminal::{Completion, Terminal};
