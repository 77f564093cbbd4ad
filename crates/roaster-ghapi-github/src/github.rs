//! GitHub adapter

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use roaster_config::Config;
use roaster_ghapi_interface::{
    types::{GhCommit, GhRepository, GhRepositoryListOptions, GhUser},
    ApiError, ApiService, Result,
};
use serde::{de::DeserializeOwned, Deserialize};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tracing::warn;

use crate::{
    auth::{build_github_url, get_client_builder},
    errors::GitHubError,
};

#[derive(Deserialize)]
struct CommitResponse {
    sha: String,
    commit: CommitDetails,
}

#[derive(Deserialize)]
struct CommitDetails {
    message: String,
    author: Option<CommitSignature>,
    committer: Option<CommitSignature>,
}

#[derive(Deserialize)]
struct CommitSignature {
    #[serde(with = "time::serde::rfc3339")]
    date: OffsetDateTime,
}

impl CommitResponse {
    fn into_commit(self) -> Option<GhCommit> {
        let CommitDetails {
            message,
            author,
            committer,
        } = self.commit;

        match committer.or(author) {
            Some(signature) => Some(GhCommit {
                message,
                committed_at: signature.date,
            }),
            None => {
                warn!(sha = %self.sha, message = "Skipping commit without date");
                None
            }
        }
    }
}

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client, GitHubError> {
        get_client_builder(&self.config)?
            .build()
            .map_err(GitHubError::from)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        customize: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<T, GitHubError> {
        let url = build_github_url(&self.config, segments)?;
        let path = url.path().to_string();
        let request = self.get_client()?.get(url);
        let response = customize(request).send().await?;

        if let Some(error) = GitHubError::from_status(response.status(), response.headers(), &path)
        {
            return Err(error);
        }

        Ok(response.error_for_status()?.json::<T>().await?)
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn users_get(&self, username: &str) -> Result<GhUser> {
        self.get_json(&["users", username], |r| r)
            .await
            .map_err(ApiError::from)
    }

    #[tracing::instrument(skip(self))]
    async fn repositories_list(
        &self,
        username: &str,
        options: GhRepositoryListOptions,
    ) -> Result<Vec<GhRepository>> {
        self.get_json(&["users", username, "repos"], |r| r.query(&options))
            .await
            .map_err(ApiError::from)
    }

    #[tracing::instrument(skip(self))]
    async fn commits_list(
        &self,
        owner: &str,
        name: &str,
        since: OffsetDateTime,
    ) -> Result<Vec<GhCommit>> {
        let since = since
            .format(&Rfc3339)
            .map_err(|e| GitHubError::DateFormatError { source: e })?;

        let commits: Vec<CommitResponse> = self
            .get_json(&["repos", owner, name, "commits"], |r| {
                r.query(&[("since", since.as_str())])
            })
            .await?;

        Ok(commits
            .into_iter()
            .filter_map(CommitResponse::into_commit)
            .collect())
    }
}
