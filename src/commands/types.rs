// src/commands/types.rs
use async_trait::async_trait;
use std::sync::Arc;

use crate::content::ContentStore;
use crate::fs::VirtualFs;
use crate::options::TerminalOptions;
use crate::output::Record;

/// 命令执行结果
#[derive(Debug, Clone, Default)]
pub struct CommandResult {
    pub records: Vec<Record>,
    /// New working directory, when the command changed it
    pub cwd: Option<String>,
}

impl CommandResult {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records, cwd: None }
    }

    pub fn single(record: Record) -> Self {
        Self::new(vec![record])
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::single(Record::error(text))
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_cwd(mut self, cwd: String) -> Self {
        self.cwd = Some(cwd);
        self
    }
}

/// 命令执行上下文
#[derive(Clone)]
pub struct CommandContext {
    pub args: Vec<String>,
    pub cwd: String,
    pub fs: Arc<VirtualFs>,
    pub content: Arc<ContentStore>,
    pub options: Arc<TerminalOptions>,
}

impl CommandContext {
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}

/// 命令 trait
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    async fn execute(&self, ctx: CommandContext) -> CommandResult;
}

#[cfg(test)]
pub(crate) fn test_ctx(args: Vec<&str>) -> CommandContext {
    let options = TerminalOptions::default();
    CommandContext {
        args: args.into_iter().map(String::from).collect(),
        cwd: options.home.clone(),
        fs: Arc::new(VirtualFs::new(&options.home)),
        content: Arc::new(ContentStore::with_overrides(&options.content)),
        options: Arc::new(options),
    }
}

#[cfg(test)]
pub(crate) fn texts(result: &CommandResult) -> Vec<&str> {
    result.records.iter().filter_map(Record::text).collect()
}
