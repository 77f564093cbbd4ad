use roaster_ghapi_interface::types::GhCommit;

use super::CommitMetrics;
use crate::use_cases::roast::Roast;

pub const NO_ACTIVITY_MESSAGE: &str =
    "Wow, you haven't committed anything recently. Are you even a developer?";
pub const LATE_NIGHT_MESSAGE: &str =
    "Over 50% of your commits are late at night. Do you even sleep?";
pub const MERGE_MESSAGE: &str = "You merge more than you code. Git plumber much?";
pub const FIX_MESSAGE: &str = "Most of your commits are fixes. Maybe test before committing?";
pub const GENERIC_MESSAGE: &str = "Your commit messages are as generic as a motivational poster.";
pub const CLEAN_MESSAGE: &str = "Your commits are suspiciously clean. Are you even trying?";

fn profanity_message(count: usize) -> String {
    format!("Found {count} swear words in commits. Someone needs a stress ball!")
}

#[derive(Default)]
pub struct RoastGenerator {
    _private: (),
}

impl RoastGenerator {
    /// Generate roast lines from commits.
    ///
    /// Rules are evaluated in a fixed order, each one adding at most one line.
    /// Thresholds use truncated integer division and strict comparisons.
    #[tracing::instrument(skip_all, fields(commits = commits.len()), ret)]
    pub fn generate(&self, commits: &[GhCommit]) -> Roast {
        if commits.is_empty() {
            return Roast::single(NO_ACTIVITY_MESSAGE);
        }

        let metrics = CommitMetrics::compute(commits);
        let mut lines = vec![];

        if metrics.late_night > metrics.total / 2 {
            lines.push(LATE_NIGHT_MESSAGE.to_string());
        }
        if metrics.profanity > 0 {
            lines.push(profanity_message(metrics.profanity));
        }
        if metrics.merge > metrics.total / 3 {
            lines.push(MERGE_MESSAGE.to_string());
        }
        if metrics.fix > metrics.total / 2 {
            lines.push(FIX_MESSAGE.to_string());
        }
        if metrics.generic > metrics.total / 3 {
            lines.push(GENERIC_MESSAGE.to_string());
        }

        Roast::from_lines(lines).unwrap_or_else(|| Roast::single(CLEAN_MESSAGE))
    }
}
