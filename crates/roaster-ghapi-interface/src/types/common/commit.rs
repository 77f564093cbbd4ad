use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// GitHub Commit, reduced to what the roast needs.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GhCommit {
    /// Message.
    pub message: String,
    /// Commit date, with the offset reported by the API.
    #[serde(with = "time::serde::rfc3339")]
    pub committed_at: OffsetDateTime,
}
