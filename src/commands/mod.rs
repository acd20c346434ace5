// src/commands/mod.rs
pub mod cat;
pub mod cd_cmd;
pub mod clear_cmd;
pub mod contact_cmd;
pub mod date;
pub mod fun_cmd;
pub mod help_cmd;
pub mod ls;
pub mod network_cmd;
pub mod open_cmd;
pub mod ps_cmd;
pub mod pwd;
pub mod registry;
pub mod types;
pub mod uname_cmd;
pub mod whoami_cmd;

pub use registry::{create_default_registry, CommandRegistry, RegistryError};
pub use types::{Command, CommandContext, CommandResult};
