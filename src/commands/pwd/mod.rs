// src/commands/pwd/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::output::Record;

pub struct PwdCommand;

#[async_trait]
impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        // Arguments are ignored (bash behavior)
        CommandResult::single(Record::info(ctx.cwd))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::{test_ctx, texts};

    #[tokio::test]
    async fn test_pwd_default() {
        let result = PwdCommand.execute(test_ctx(vec![])).await;
        assert_eq!(texts(&result), vec!["/home/user"]);
    }

    #[tokio::test]
    async fn test_pwd_nested() {
        let mut ctx = test_ctx(vec![]);
        ctx.cwd = "/home/user/experiments".to_string();
        let result = PwdCommand.execute(ctx).await;
        assert_eq!(texts(&result), vec!["/home/user/experiments"]);
    }

    #[tokio::test]
    async fn test_pwd_ignore_args() {
        let result = PwdCommand.execute(test_ctx(vec!["ignored", "args"])).await;
        assert_eq!(texts(&result), vec!["/home/user"]);
    }
}
