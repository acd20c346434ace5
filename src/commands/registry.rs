// src/commands/registry.rs
use indexmap::IndexMap;
use thiserror::Error;

use super::types::Command;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("command '{name}' is already registered")]
    DuplicateCommand { name: String },
}

/// Command table in registration order.
pub struct CommandRegistry {
    commands: IndexMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: IndexMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) -> Result<(), RegistryError> {
        let name = cmd.name();
        if self.commands.contains_key(name) {
            return Err(RegistryError::DuplicateCommand { name: name.to_string() });
        }
        self.commands.insert(name.to_string(), cmd);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(|s| s.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Names starting with `partial`, in registration order.
    pub fn autocomplete(&self, partial: &str) -> Vec<String> {
        self.commands
            .keys()
            .filter(|name| name.starts_with(partial))
            .cloned()
            .collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat::CatCommand;
use super::cd_cmd::CdCommand;
use super::clear_cmd::ClearCommand;
use super::contact_cmd::{ContactCommand, EmailCommand, SendIdeaCommand};
use super::date::DateCommand;
use super::fun_cmd::{EasterEggCommand, GlitchCommand, HackCommand, KonamiCommand, MatrixCommand};
use super::help_cmd::HelpCommand;
use super::ls::LsCommand;
use super::network_cmd::{CurlCommand, PingCommand};
use super::open_cmd::OpenCommand;
use super::ps_cmd::{PsCommand, TopCommand};
use super::pwd::PwdCommand;
use super::uname_cmd::UnameCommand;
use super::whoami_cmd::WhoamiCommand;

/// Every built-in command, in the order `help` and completion list them.
pub fn default_commands() -> Vec<Box<dyn Command>> {
    vec![
        Box::new(HelpCommand),
        Box::new(LsCommand),
        Box::new(CatCommand),
        Box::new(CdCommand),
        Box::new(PwdCommand),
        Box::new(ClearCommand),
        Box::new(WhoamiCommand),
        Box::new(DateCommand),
        Box::new(UnameCommand),
        Box::new(PsCommand),
        Box::new(TopCommand),
        Box::new(PingCommand),
        Box::new(CurlCommand),
        Box::new(OpenCommand),
        Box::new(SendIdeaCommand),
        Box::new(EmailCommand),
        Box::new(ContactCommand),
        Box::new(HackCommand),
        Box::new(MatrixCommand),
        Box::new(GlitchCommand),
        Box::new(EasterEggCommand),
        Box::new(KonamiCommand),
    ]
}

/// 创建包含全部内置命令的注册表
pub fn create_default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    for cmd in default_commands() {
        if let Err(e) = registry.register(cmd) {
            tracing::warn!(error = %e, "skipping command");
        }
    }
    registry
}
