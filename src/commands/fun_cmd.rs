//! hack, matrix, glitch, easter-egg, konami

use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::output::{Animation, Category, Effect, Record};

pub const GLITCH_DURATION_MS: u64 = 3000;

const GLITCH_BANNER: &str = "G̴̰̈l̵̰̇i̴̱̍t̶̰̄c̵̱̈ḣ̴̰ ̵̰̍m̴̱̄ö̵̰ḏ̴̇ḛ̵̍ ̴̱̄ä̵̰ċ̴̱t̵̰̍ī̴̱v̵̰̈ȧ̴̱t̵̰̍ē̴̱d̵̰̈";

pub struct HackCommand;

#[async_trait]
impl Command for HackCommand {
    fn name(&self) -> &'static str {
        "hack"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        CommandResult::new(vec![
            Record::error("Initiating hack sequence..."),
            Record::warning("Bypassing firewall... [████████████] 100%"),
            Record::success("Access granted to level 404"),
            Record::info("Welcome to the secret level, hacker."),
        ])
    }
}

pub struct MatrixCommand;

#[async_trait]
impl Command for MatrixCommand {
    fn name(&self) -> &'static str {
        "matrix"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        CommandResult::new(vec![
            Record::success("Entering the matrix..."),
            Record::line(Category::Glitch, "Wake up, Neo..."),
            Record::success("Matrix rain activated (simplified version)"),
        ])
    }
}

pub struct GlitchCommand;

#[async_trait]
impl Command for GlitchCommand {
    fn name(&self) -> &'static str {
        "glitch"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        CommandResult::new(vec![
            Record::error(GLITCH_BANNER),
            Record::effect(Effect::Animate {
                animation: Animation::Glitch,
                duration_ms: GLITCH_DURATION_MS,
            }),
        ])
    }
}

pub struct EasterEggCommand;

#[async_trait]
impl Command for EasterEggCommand {
    fn name(&self) -> &'static str {
        "easter-egg"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        CommandResult::new(vec![
            Record::success("🥚 You found an easter egg! 🥚"),
            Record::info("The real treasure was the glitches we made along the way."),
        ])
    }
}

/// Also what the key-sequence listener prints.
pub fn konami_records() -> Vec<Record> {
    vec![
        Record::line(Category::Glitch, "KONAMI CODE ACTIVATED!"),
        Record::success("30 lives granted! Wait, this isn't a game..."),
        Record::info("But you get extra hacker points! 🎮"),
    ]
}

pub struct KonamiCommand;

#[async_trait]
impl Command for KonamiCommand {
    fn name(&self) -> &'static str {
        "konami"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        CommandResult::new(konami_records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::{test_ctx, texts};

    #[tokio::test]
    async fn test_hack() {
        let result = HackCommand.execute(test_ctx(vec![])).await;
        assert_eq!(result.records.len(), 4);
        assert_eq!(texts(&result)[2], "Access granted to level 404");
    }

    #[tokio::test]
    async fn test_matrix() {
        let result = MatrixCommand.execute(test_ctx(vec![])).await;
        assert_eq!(result.records[1].category(), Some(Category::Glitch));
        assert_eq!(texts(&result)[1], "Wake up, Neo...");
    }

    #[tokio::test]
    async fn test_glitch_requests_timed_animation() {
        let result = GlitchCommand.execute(test_ctx(vec![])).await;
        let effects: Vec<&Effect> = result.records.iter().filter_map(Record::as_effect).collect();
        assert_eq!(
            effects,
            vec![&Effect::Animate { animation: Animation::Glitch, duration_ms: 3000 }]
        );
        assert_eq!(result.records[0].category(), Some(Category::Error));
    }

    #[tokio::test]
    async fn test_easter_egg() {
        let result = EasterEggCommand.execute(test_ctx(vec![])).await;
        assert!(texts(&result)[0].contains("easter egg"));
    }

    #[tokio::test]
    async fn test_konami_command_matches_key_response() {
        let result = KonamiCommand.execute(test_ctx(vec![])).await;
        assert_eq!(result.records, konami_records());
        assert_eq!(texts(&result)[0], "KONAMI CODE ACTIVATED!");
    }
}
