// src/commands/ls/mod.rs
use async_trait::async_trait;
use rand::Rng;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::DirentEntry;
use crate::output::{Category, Record};

pub struct LsCommand;

const OWNER: &str = "user lvl404";
const MTIME: &str = "Dec 25 04:04";
const DIR_SIZE: u32 = 4096;

fn format_mode(is_dir: bool) -> &'static str {
    if is_dir { "drwxr-xr-x" } else { "-rw-r--r--" }
}

// Sizes are decoration; a fresh roll on every listing is fine.
fn fake_size<R: Rng>(rng: &mut R, is_dir: bool) -> u32 {
    if is_dir {
        DIR_SIZE
    } else {
        rng.gen_range(512..8704)
    }
}

fn format_entry<R: Rng>(rng: &mut R, entry: &DirentEntry) -> String {
    let is_dir = entry.is_directory();
    let name = if is_dir { format!("{}/", entry.name) } else { entry.name.clone() };
    format!(
        "{}  1 {}  {} {} {}",
        format_mode(is_dir),
        OWNER,
        fake_size(rng, is_dir),
        MTIME,
        name
    )
}

fn format_listing(entries: &[DirentEntry]) -> String {
    let mut rng = rand::thread_rng();
    let mut lines = vec![format!("total {}", entries.len())];
    lines.extend(entries.iter().map(|entry| format_entry(&mut rng, entry)));
    lines.join("\n")
}

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let path = ctx.arg(0).unwrap_or(ctx.cwd.as_str());

        let entries = match ctx.fs.list(path, &ctx.cwd) {
            Ok(entries) => entries,
            Err(_) => {
                return CommandResult::error(format!(
                    "ls: cannot access '{}': No such file or directory",
                    path
                ));
            }
        };

        CommandResult::single(Record::line(Category::Listing, format_listing(&entries)))
    }
}
