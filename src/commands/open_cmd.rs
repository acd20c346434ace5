use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::output::{Effect, Record};

pub struct OpenCommand;

fn display_host(url: &str) -> &str {
    let rest = url.split("://").nth(1).unwrap_or(url);
    rest.split('/').next().unwrap_or(rest)
}

#[async_trait]
impl Command for OpenCommand {
    fn name(&self) -> &'static str {
        "open"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let link = ctx.arg(0).unwrap_or_default();

        if let Some(url) = ctx.options.links.get(link) {
            return CommandResult::new(vec![
                Record::effect(Effect::OpenUrl { url: url.clone() }),
                Record::success(format!("Opening {} in new tab...", display_host(url))),
            ]);
        }

        // Short names first, so `sitch` is listed rather than `sitch.lol`.
        let mut names: Vec<&str> = ctx.options.links.keys().map(String::as_str).collect();
        names.sort_by_key(|name| (name.len(), *name));
        let mut available: Vec<&str> = Vec::new();
        for name in names {
            let url = &ctx.options.links[name];
            if !available.iter().any(|seen| &ctx.options.links[*seen] == url) {
                available.push(name);
            }
        }

        CommandResult::new(vec![
            Record::error(format!("Unknown link: {}", link)),
            Record::info(format!("Available links: {}", available.join(", "))),
        ])
    }
}
