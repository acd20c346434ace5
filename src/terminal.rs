//! Terminal
//!
//! Main entry point for the fake terminal.
//! Ties together the command registry, the virtual filesystem, the session
//! and the key-sequence listener. Every method takes one input event and
//! answers with the records to append to the output log.

use std::sync::Arc;

use tracing::debug;

use crate::commands::fun_cmd::konami_records;
use crate::commands::{create_default_registry, CommandContext, CommandRegistry};
use crate::content::ContentStore;
use crate::fs::VirtualFs;
use crate::konami::KeySequenceDetector;
use crate::options::TerminalOptions;
use crate::output::{Effect, Record};
use crate::session::{HistoryRecall, Session};

pub const NOT_FOUND_HINT: &str = "Type 'help' to see available commands";

/// Outcome of a Tab press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Exactly one command matched; the input becomes this name.
    Replace(String),
    /// Several commands matched; the input stays as typed.
    Candidates(Vec<String>),
    None,
}

/// The fake terminal.
pub struct Terminal {
    registry: CommandRegistry,
    fs: Arc<VirtualFs>,
    content: Arc<ContentStore>,
    options: Arc<TerminalOptions>,
    session: Session,
    keys: KeySequenceDetector,
}

impl Terminal {
    /// Create a terminal with the built-in command table.
    pub fn new(options: TerminalOptions) -> Self {
        Self::with_registry(options, create_default_registry())
    }

    pub fn with_registry(options: TerminalOptions, registry: CommandRegistry) -> Self {
        let fs = Arc::new(VirtualFs::new(&options.home));
        let content = Arc::new(ContentStore::with_overrides(&options.content));
        let session = Session::new(&options.home);

        Self {
            registry,
            fs,
            content,
            options: Arc::new(options),
            session,
            keys: KeySequenceDetector::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    /// Records to emit when the page first shows the terminal.
    pub fn start(&self) -> Vec<Record> {
        vec![Record::effect(Effect::FocusInput)]
    }

    /// A click anywhere on the page hands focus back to the input.
    pub fn clicked(&self) -> Vec<Record> {
        vec![Record::effect(Effect::FocusInput)]
    }

    /// `user@host:~$ `, with the home directory shortened to `~`.
    pub fn prompt(&self) -> String {
        let home = &self.options.home;
        let cwd = &self.session.cwd;
        let shown = match cwd.strip_prefix(home.as_str()) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => format!("~{}", rest),
            _ => cwd.clone(),
        };
        format!("{}@{}:{}$ ", self.options.user, self.options.host, shown)
    }

    /// Enter: run the line, then remember it.
    pub async fn submit(&mut self, input: &str) -> Vec<Record> {
        let line = input.trim();
        if line.is_empty() {
            return Vec::new();
        }

        let records = self.dispatch(line).await;
        self.session.push_history(line);
        records
    }

    /// Run one line without touching history.
    pub async fn dispatch(&mut self, line: &str) -> Vec<Record> {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return Vec::new();
        };
        let args: Vec<String> = parts.map(String::from).collect();

        let mut records = vec![Record::echo(line)];

        let Some(cmd) = self.registry.get(name) else {
            debug!(command = name, "command not found");
            records.push(Record::error(format!("bash: {}: command not found", name)));
            records.push(Record::info(NOT_FOUND_HINT));
            return records;
        };

        debug!(command = name, args = ?args, cwd = %self.session.cwd, "dispatch");
        let ctx = CommandContext {
            args,
            cwd: self.session.cwd.clone(),
            fs: self.fs.clone(),
            content: self.content.clone(),
            options: self.options.clone(),
        };
        let result = cmd.execute(ctx).await;

        if let Some(cwd) = result.cwd {
            debug!(from = %self.session.cwd, to = %cwd, "cwd changed");
            self.session.cwd = cwd;
        }
        records.extend(result.records);
        records
    }

    pub fn history_up(&mut self) -> HistoryRecall {
        self.session.history_up()
    }

    pub fn history_down(&mut self) -> HistoryRecall {
        self.session.history_down()
    }

    /// Tab: complete the input against command names.
    pub fn complete(&self, input: &str) -> (Completion, Vec<Record>) {
        let mut matches = self.registry.autocomplete(input);
        debug!(input, matches = matches.len(), "autocomplete");

        match matches.len() {
            0 => (Completion::None, Vec::new()),
            1 => (Completion::Replace(matches.remove(0)), Vec::new()),
            _ => {
                let listed = Record::info(matches.join("  "));
                (Completion::Candidates(matches), vec![listed])
            }
        }
    }

    /// Any key press anywhere on the page, by key code.
    pub fn key_pressed(&mut self, code: &str) -> Vec<Record> {
        if self.keys.push(code) {
            debug!("key sequence matched");
            return konami_records();
        }
        Vec::new()
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new(TerminalOptions::default())
    }
}
