use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// GitHub Repository.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GhRepository {
    /// Name.
    pub name: String,
    /// Last update.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}
