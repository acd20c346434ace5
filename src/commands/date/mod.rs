// src/commands/date/mod.rs
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};
use crate::commands::{Command, CommandContext, CommandResult};
use crate::output::Record;

pub struct DateCommand;

/// Browser-style `Date.toString()` layout.
pub fn format_date<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%a %b %d %Y %H:%M:%S GMT%z").to_string()
}

#[async_trait]
impl Command for DateCommand {
    fn name(&self) -> &'static str { "date" }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        CommandResult::single(Record::info(format_date(&Local::now())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::{test_ctx, texts};
    use chrono::{Datelike, FixedOffset, Utc};

    #[test]
    fn test_format_fixed_instant() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let dt = tz.with_ymd_and_hms(2024, 12, 25, 4, 4, 4).unwrap();
        assert_eq!(format_date(&dt), "Wed Dec 25 2024 04:04:04 GMT+0200");
    }

    #[test]
    fn test_format_utc() {
        let dt = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_date(&dt), "Sat Jan 01 2000 00:00:00 GMT+0000");
    }

    #[tokio::test]
    async fn test_date_prints_current_year() {
        let result = DateCommand.execute(test_ctx(vec![])).await;
        let text = texts(&result)[0];
        assert!(text.contains(&Local::now().year().to_string()));
        assert!(text.contains("GMT"));
    }
}
