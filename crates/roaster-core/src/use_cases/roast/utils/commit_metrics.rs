use roaster_ghapi_interface::types::GhCommit;

const LATE_NIGHT_START_HOUR: u8 = 22;
const LATE_NIGHT_END_HOUR: u8 = 4;
const FIX_KEYWORDS: &[&str] = &["fix", "bug", "error"];
const MERGE_KEYWORDS: &[&str] = &["merge", "pull"];
const PROFANITY_KEYWORDS: &[&str] = &["fuck", "shit", "damn", "wtf"];
const GENERIC_PREFIXES: &[&str] = &["update", "changes"];

/// Behavioral counters over a commit collection.
///
/// Keyword checks run on the lower-cased message; the hour is read in the
/// offset the commit date was reported with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitMetrics {
    pub total: usize,
    pub late_night: usize,
    pub fix: usize,
    pub merge: usize,
    pub profanity: usize,
    pub generic: usize,
}

impl CommitMetrics {
    pub fn compute(commits: &[GhCommit]) -> Self {
        commits.iter().fold(Self::default(), |mut metrics, commit| {
            metrics.record(commit);
            metrics
        })
    }

    fn record(&mut self, commit: &GhCommit) {
        let message = commit.message.to_lowercase();
        let hour = commit.committed_at.hour();

        self.total += 1;
        if hour >= LATE_NIGHT_START_HOUR || hour <= LATE_NIGHT_END_HOUR {
            self.late_night += 1;
        }
        if contains_any(&message, FIX_KEYWORDS) {
            self.fix += 1;
        }
        if contains_any(&message, MERGE_KEYWORDS) {
            self.merge += 1;
        }
        if contains_any(&message, PROFANITY_KEYWORDS) {
            self.profanity += 1;
        }
        if GENERIC_PREFIXES.iter().any(|p| message.starts_with(p)) {
            self.generic += 1;
        }
    }
}

fn contains_any(message: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| message.contains(k))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use time::{macros::datetime, OffsetDateTime};

    use super::*;

    fn commit(message: &str, committed_at: OffsetDateTime) -> GhCommit {
        GhCommit {
            message: message.into(),
            committed_at,
        }
    }

    #[test]
    fn empty() {
        assert_eq!(CommitMetrics::compute(&[]), CommitMetrics::default());
    }

    #[test]
    fn late_night_bounds() {
        let hours = [21, 22, 23, 0, 4, 5, 12];
        let commits: Vec<_> = hours
            .iter()
            .map(|h| {
                commit(
                    "Add feature",
                    datetime!(2024-05-01 0:00 UTC).replace_hour(*h).unwrap(),
                )
            })
            .collect();

        let metrics = CommitMetrics::compute(&commits);
        assert_eq!(metrics.total, 7);
        assert_eq!(metrics.late_night, 4);
    }

    #[test]
    fn hour_uses_reported_offset() {
        // 23:30 in Paris, 21:30 in UTC.
        let metrics = CommitMetrics::compute(&[commit(
            "Add feature",
            datetime!(2024-05-01 23:30 +2),
        )]);

        assert_eq!(metrics.late_night, 1);
    }

    #[test]
    fn keywords() {
        let at = datetime!(2024-05-01 14:00 UTC);
        let metrics = CommitMetrics::compute(&[
            commit("Fix login Bug", at),
            commit("Handle ERROR codes", at),
            commit("Merge pull request #12 from octocat/patch-1", at),
            commit("damn WTF is this", at),
            commit("Update README.md", at),
            commit("Changes", at),
            commit("Minor update of docs", at),
        ]);

        assert_eq!(
            metrics,
            CommitMetrics {
                total: 7,
                late_night: 0,
                fix: 2,
                merge: 1,
                profanity: 1,
                generic: 2,
            }
        );
    }
}
