//! email, contact and send-idea

use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::content::CONTACT_CONTENT;
use crate::output::{Category, Record};

pub struct EmailCommand;

#[async_trait]
impl Command for EmailCommand {
    fn name(&self) -> &'static str {
        "email"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        CommandResult::new(vec![
            Record::success(format!("📧 EMAIL: {}", ctx.options.email)),
            Record::info("We don't take clients. We take ideas."),
            Record::line(Category::Link, "Send your crazy ideas to this email!"),
        ])
    }
}

pub struct ContactCommand;

#[async_trait]
impl Command for ContactCommand {
    fn name(&self) -> &'static str {
        "contact"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        // Silent when the page has no contact card.
        match ctx.content.get(CONTACT_CONTENT) {
            Some(text) => CommandResult::single(Record::line(Category::FileContent, text)),
            None => CommandResult::empty(),
        }
    }
}

pub struct SendIdeaCommand;

#[async_trait]
impl Command for SendIdeaCommand {
    fn name(&self) -> &'static str {
        "send-idea"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        CommandResult::new(vec![
            Record::line(Category::SectionHeader, "IDEA SUBMISSION FORM"),
            Record::info("Launching idea submission interface..."),
            Record::success("Form loaded. Type your crazy idea below:"),
            Record::warning("Note: This is a demo. Real form would be interactive."),
            Record::line(Category::Link, format!("Contact us: {}", ctx.options.email)),
        ])
    }
}
