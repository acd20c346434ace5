//! ping and curl
//!
//! Neither touches the network. Both print the same canned exchange for any
//! target.

use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::output::Record;

const DEFAULT_PING_HOST: &str = "sitch.lol";
const DEFAULT_CURL_URL: &str = "lvl404.com";

pub struct PingCommand;

#[async_trait]
impl Command for PingCommand {
    fn name(&self) -> &'static str {
        "ping"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let host = ctx.arg(0).unwrap_or(DEFAULT_PING_HOST);
        CommandResult::new(vec![
            Record::info(format!("PING {} (404.404.404.404): 56 data bytes", host)),
            Record::success(format!("64 bytes from {}: icmp_seq=1 ttl=64 time=4.04 ms", host)),
            Record::success(format!("64 bytes from {}: icmp_seq=2 ttl=64 time=0.404 ms", host)),
        ])
    }
}

pub struct CurlCommand;

#[async_trait]
impl Command for CurlCommand {
    fn name(&self) -> &'static str {
        "curl"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let url = ctx.arg(0).unwrap_or(DEFAULT_CURL_URL);
        CommandResult::new(vec![
            Record::info(format!("Fetching {}...", url)),
            Record::success("HTTP/1.1 200 OK"),
            Record::info("Content-Type: application/glitch"),
        ])
    }
}
