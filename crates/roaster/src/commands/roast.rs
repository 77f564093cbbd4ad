use async_trait::async_trait;
use clap::Parser;
use roaster_core::use_cases::roast::RoastDeveloperInterface;
use shaku::HasComponent;

use super::{Command, CommandContext};
use crate::Result;

/// Roast a GitHub user from their recent commits
#[derive(Parser)]
pub(crate) struct RoastCommand {
    /// GitHub username
    username: String,
}

#[async_trait]
impl Command for RoastCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let roast_developer: &dyn RoastDeveloperInterface = ctx.core_module.resolve_ref();
        let report = roast_developer
            .run(&ctx.as_core_context(), &self.username)
            .await?;

        let mut writer = ctx.writer.write().await;
        writeln!(writer, "{}", report.roast.to_prose())?;
        writeln!(writer)?;
        writeln!(writer, "Total commits: {}", report.stats.total_commits)?;
        writeln!(writer, "Repositories analyzed: {}", report.stats.repos_analyzed)?;

        Ok(())
    }
}
