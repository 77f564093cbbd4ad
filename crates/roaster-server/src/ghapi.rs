//! GitHub Api wrappers.

use async_trait::async_trait;
use roaster_config::Config;
use roaster_ghapi_github::GithubApiService;
use roaster_ghapi_interface::{
    types::{GhCommit, GhRepository, GhRepositoryListOptions, GhUser},
    ApiService, Result,
};
use time::OffsetDateTime;

use crate::metrics::GITHUB_API_CALLS;

/// Api Service counting outgoing calls.
pub struct MetricsApiService {
    inner: Box<dyn ApiService>,
}

impl MetricsApiService {
    /// Creates a new service on top of the GitHub API.
    pub fn new(config: Config) -> Self {
        Self::with_inner(Box::new(GithubApiService::new(config)))
    }

    /// Creates a new service on top of another service.
    pub fn with_inner(inner: Box<dyn ApiService>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ApiService for MetricsApiService {
    async fn users_get(&self, username: &str) -> Result<GhUser> {
        GITHUB_API_CALLS.inc();
        self.inner.users_get(username).await
    }

    async fn repositories_list(
        &self,
        username: &str,
        options: GhRepositoryListOptions,
    ) -> Result<Vec<GhRepository>> {
        GITHUB_API_CALLS.inc();
        self.inner.repositories_list(username, options).await
    }

    async fn commits_list(
        &self,
        owner: &str,
        name: &str,
        since: OffsetDateTime,
    ) -> Result<Vec<GhCommit>> {
        GITHUB_API_CALLS.inc();
        self.inner.commits_list(owner, name, since).await
    }
}
