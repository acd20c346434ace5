use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::output::{Effect, Record};

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        CommandResult::single(Record::effect(Effect::ClearOutput))
    }
}
