//! cd - Change directory
//!
//! Supports:
//! - cd - back to the home directory
//! - cd [dir] - change to one of the directories the virtual tree knows

use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::output::Record;

pub struct CdCommand;

#[async_trait]
impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let target = ctx.arg(0);

        match ctx.fs.change_directory(target, &ctx.cwd) {
            Ok(new_dir) => {
                let message = match target {
                    None => "Changed to home directory".to_string(),
                    Some(path) => format!("Changed directory to {}", path),
                };
                CommandResult::single(Record::success(message)).with_cwd(new_dir)
            }
            Err(_) => CommandResult::error(format!(
                "cd: {}: No such file or directory",
                target.unwrap_or_default()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::{test_ctx, texts};
    use crate::output::Category;

    #[tokio::test]
    async fn test_cd_experiments() {
        let result = CdCommand.execute(test_ctx(vec!["experiments"])).await;
        assert_eq!(result.cwd.as_deref(), Some("experiments"));
        assert_eq!(texts(&result), vec!["Changed directory to experiments"]);
        assert_eq!(result.records[0].category(), Some(Category::Success));
    }

    #[tokio::test]
    async fn test_cd_home() {
        let mut ctx = test_ctx(vec![]);
        ctx.cwd = "experiments".to_string();
        let result = CdCommand.execute(ctx).await;
        assert_eq!(result.cwd.as_deref(), Some("/home/user"));
        assert_eq!(texts(&result), vec!["Changed to home directory"]);
    }

    #[tokio::test]
    async fn test_cd_missing() {
        let result = CdCommand.execute(test_ctx(vec!["/root"])).await;
        assert!(result.cwd.is_none());
        assert_eq!(texts(&result), vec!["cd: /root: No such file or directory"]);
        assert_eq!(result.records[0].category(), Some(Category::Error));
    }
}
