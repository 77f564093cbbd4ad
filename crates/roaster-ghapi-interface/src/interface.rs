use async_trait::async_trait;
use time::OffsetDateTime;

use crate::{
    types::{GhCommit, GhRepository, GhRepositoryListOptions, GhUser},
    Result,
};

/// GitHub API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Get a user from its login.
    async fn users_get(&self, username: &str) -> Result<GhUser>;
    /// List repositories of a user.
    async fn repositories_list(
        &self,
        username: &str,
        options: GhRepositoryListOptions,
    ) -> Result<Vec<GhRepository>>;
    /// List commits of a repository, committed after `since`.
    async fn commits_list(
        &self,
        owner: &str,
        name: &str,
        since: OffsetDateTime,
    ) -> Result<Vec<GhCommit>>;
}
