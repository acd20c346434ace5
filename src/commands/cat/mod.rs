// src/commands/cat/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::output::{Category, Record};

pub struct CatCommand;

#[async_trait]
impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let Some(file) = ctx.arg(0) else {
            return CommandResult::error("cat: missing file operand");
        };

        let reference = match ctx.fs.read(file) {
            Ok(reference) => reference,
            Err(_) => {
                return CommandResult::error(format!("cat: {}: No such file or directory", file));
            }
        };

        // The file exists but the page never supplied its text.
        match ctx.content.get(reference) {
            Some(text) => CommandResult::single(Record::line(Category::FileContent, text)),
            None => CommandResult::error(format!("cat: {}: Permission denied", file)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::{test_ctx, texts};
    use crate::content::ContentStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_cat_root_file() {
        let result = CatCommand.execute(test_ctx(vec!["about.txt"])).await;
        assert_eq!(result.records[0].category(), Some(Category::FileContent));
        assert!(texts(&result)[0].contains("LVL404"));
    }

    #[tokio::test]
    async fn test_cat_nested_file_by_bare_name() {
        let result = CatCommand.execute(test_ctx(vec!["secret_project_x.???"])).await;
        assert!(texts(&result)[0].contains("SECRET PROJECT X"));
    }

    #[tokio::test]
    async fn test_cat_missing_operand() {
        let result = CatCommand.execute(test_ctx(vec![])).await;
        assert_eq!(texts(&result), vec!["cat: missing file operand"]);
        assert_eq!(result.records[0].category(), Some(Category::Error));
    }

    #[tokio::test]
    async fn test_cat_missing_file() {
        let result = CatCommand.execute(test_ctx(vec!["passwd"])).await;
        assert_eq!(texts(&result), vec!["cat: passwd: No such file or directory"]);
    }

    #[tokio::test]
    async fn test_cat_directory_is_not_found() {
        let result = CatCommand.execute(test_ctx(vec!["experiments"])).await;
        assert_eq!(texts(&result), vec!["cat: experiments: No such file or directory"]);
    }

    #[tokio::test]
    async fn test_cat_without_content_is_denied() {
        let mut ctx = test_ctx(vec!["merch.txt"]);
        ctx.content = Arc::new(ContentStore::new());
        let result = CatCommand.execute(ctx).await;
        assert_eq!(texts(&result), vec!["cat: merch.txt: Permission denied"]);
    }
}
