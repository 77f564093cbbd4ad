use async_trait::async_trait;
use futures::future::join_all;
use roaster_ghapi_interface::types::{GhCommit, GhRepositoryListOptions};
use shaku::{Component, Interface};
use time::{Duration, OffsetDateTime};
use tracing::{debug, warn};

use crate::{CoreContext, DomainError, Result};

/// Maximum count of repositories looked at, most recently updated first.
pub const REPOSITORIES_LIMIT: u8 = 10;
/// Trailing window of commits looked at.
pub const ACTIVITY_WINDOW: Duration = Duration::days(30);

/// Recent commits of a user, merged across repositories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedActivity {
    pub commits: Vec<GhCommit>,
    /// Repositories attempted, including the ones whose commits could not be listed.
    pub repos_considered: usize,
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait AggregateActivityInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, username: &str) -> Result<AggregatedActivity>;
}

#[derive(Component)]
#[shaku(interface = AggregateActivityInterface)]
pub struct AggregateActivity;

#[async_trait]
impl AggregateActivityInterface for AggregateActivity {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, username: &str) -> Result<AggregatedActivity> {
        ctx.api_service
            .users_get(username)
            .await
            .map_err(|e| DomainError::from_api_error(username, e))?;

        let repositories = ctx
            .api_service
            .repositories_list(
                username,
                GhRepositoryListOptions::recently_updated(REPOSITORIES_LIMIT),
            )
            .await
            .map_err(|e| DomainError::from_api_error(username, e))?;

        let since = OffsetDateTime::now_utc() - ACTIVITY_WINDOW;
        let commit_lists = join_all(repositories.iter().map(|repository| async move {
            match ctx
                .api_service
                .commits_list(username, &repository.name, since)
                .await
            {
                Ok(commits) => commits,
                Err(e) => {
                    // Failures only drop the commits of this repository.
                    warn!(
                        repository = %repository.name,
                        error = %e,
                        message = "Could not list commits, skipping repository"
                    );
                    vec![]
                }
            }
        }))
        .await;

        let commits: Vec<GhCommit> = commit_lists.into_iter().flatten().collect();
        debug!(
            commits = commits.len(),
            repositories = repositories.len(),
            message = "Aggregated activity"
        );

        Ok(AggregatedActivity {
            commits,
            repos_considered: repositories.len(),
        })
    }
}
