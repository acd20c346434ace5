use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::output::Record;

pub struct WhoamiCommand;

#[async_trait]
impl Command for WhoamiCommand {
    fn name(&self) -> &'static str {
        "whoami"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        CommandResult::new(vec![
            Record::info(ctx.options.user.clone()),
            Record::success("You are a digital explorer in the lvl404 void"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::{test_ctx, texts};

    #[tokio::test]
    async fn test_whoami() {
        let result = WhoamiCommand.execute(test_ctx(vec![])).await;
        assert_eq!(
            texts(&result),
            vec!["user", "You are a digital explorer in the lvl404 void"]
        );
    }
}
