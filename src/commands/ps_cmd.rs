use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::output::{Category, Record};

const PROCESS_TABLE: &str = "  PID TTY          TIME CMD
 1337 pts/0    00:00:01 bash
 1404 pts/0    00:00:00 sitch.lol
 2048 pts/0    00:00:00 glitch_engine
 4096 pts/0    00:00:00 meme_generator
 8192 pts/0    00:00:00 void_explorer";

pub struct PsCommand;

#[async_trait]
impl Command for PsCommand {
    fn name(&self) -> &'static str {
        "ps"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        CommandResult::single(Record::line(Category::Listing, PROCESS_TABLE))
    }
}

pub struct TopCommand;

#[async_trait]
impl Command for TopCommand {
    fn name(&self) -> &'static str {
        "top"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        CommandResult::new(vec![
            Record::info("top - 04:04:04 up 404 days, 4:04, 1 user, load average: 4.04, 4.04, 4.04"),
            Record::success("Tasks: 5 total, 1 running, 4 sleeping, 0 stopped, 0 zombie"),
        ])
    }
}
