use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::output::Record;

pub struct UnameCommand;

const SYSTEM: &str = "lvl404 4.04.404 #1 SMP PREEMPT Digital Void x86_64 GNU/Glitch";

#[async_trait]
impl Command for UnameCommand {
    fn name(&self) -> &'static str {
        "uname"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        // Flags are accepted and ignored; there is only one answer.
        CommandResult::single(Record::info(SYSTEM))
    }
}
