use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::output::{Category, Record};

pub struct HelpCommand;

const COMMANDS: &[(&str, &str)] = &[
    ("ls", "list files and directories"),
    ("cat [file]", "display file contents"),
    ("cd [dir]", "change directory"),
    ("pwd", "show current directory"),
    ("clear", "clear terminal screen"),
    ("whoami", "display current user"),
    ("date", "show current date/time"),
    ("uname", "system information"),
    ("ps", "show running processes"),
    ("ping [host]", "ping a host"),
    ("open [link]", "open external links"),
    ("email", "show email contact"),
    ("contact", "show full contact info"),
    ("send-idea", "submit your crazy idea"),
];

const SPECIAL: &[(&str, &str)] = &[
    ("hack", "initiate hacking sequence"),
    ("matrix", "enter the matrix"),
    ("glitch", "activate glitch mode"),
    ("konami", "↑↑↓↓←→←→BA"),
];

fn push_table(out: &mut String, rows: &[(&str, &str)]) {
    for (usage, description) in rows {
        out.push_str(&format!("{:<12}- {}\n", usage, description));
    }
}

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str { "help" }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        let mut body = String::new();
        push_table(&mut body, COMMANDS);
        body.push_str("\nSPECIAL COMMANDS:\n");
        push_table(&mut body, SPECIAL);
        body.push_str("\nQUICK START:\n");
        body.push_str("Try: ls then cat about.txt\n");
        body.push_str("Contact: email or contact");

        CommandResult::new(vec![
            Record::line(Category::SectionHeader, "AVAILABLE COMMANDS:"),
            Record::line(Category::FileContent, body),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::{test_ctx, texts};

    #[tokio::test]
    async fn test_help_lists_commands() {
        let result = HelpCommand.execute(test_ctx(vec![])).await;
        let lines = texts(&result);
        assert_eq!(lines[0], "AVAILABLE COMMANDS:");
        assert!(lines[1].contains("cat [file]  - display file contents"));
        assert!(lines[1].contains("send-idea"));
    }

    #[tokio::test]
    async fn test_help_sections() {
        let result = HelpCommand.execute(test_ctx(vec!["ignored"])).await;
        assert_eq!(result.records[0].category(), Some(Category::SectionHeader));
        let body = texts(&result)[1];
        assert!(body.contains("SPECIAL COMMANDS:"));
        assert!(body.contains("QUICK START:"));
        assert!(body.contains("konami"));
        assert!(result.cwd.is_none());
    }
}
