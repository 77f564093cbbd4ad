//! Null driver for GH API.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use roaster_ghapi_interface::{
    types::{GhCommit, GhRepository, GhRepositoryListOptions, GhUser},
    ApiService, Result,
};
use time::OffsetDateTime;

/// Null API service.
///
/// Every user exists and owns no repository.
#[derive(Clone, Default)]
pub struct NullApiService {
    _private: (),
}

impl NullApiService {
    /// Build a null API service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl ApiService for NullApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn users_get(&self, username: &str) -> Result<GhUser> {
        Ok(GhUser {
            login: username.into(),
        })
    }

    #[tracing::instrument(skip(self), ret)]
    async fn repositories_list(
        &self,
        _username: &str,
        _options: GhRepositoryListOptions,
    ) -> Result<Vec<GhRepository>> {
        Ok(vec![])
    }

    #[tracing::instrument(skip(self), ret)]
    async fn commits_list(
        &self,
        _owner: &str,
        _name: &str,
        _since: OffsetDateTime,
    ) -> Result<Vec<GhCommit>> {
        Ok(vec![])
    }
}
