//! Auth.

use std::time::Duration;

use http::{header, HeaderMap};
use reqwest::{ClientBuilder, Url};
use roaster_config::Config;

use crate::errors::GitHubError;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Get a GitHub client builder, authenticated when a token is configured.
pub fn get_client_builder(config: &Config) -> Result<ClientBuilder, GitHubError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static(GITHUB_MEDIA_TYPE),
    );

    if config.api.github.is_authenticated() {
        let mut value =
            header::HeaderValue::from_str(&format!("Bearer {}", config.api.github.token))
                .map_err(|e| GitHubError::InvalidTokenError { source: e })?;
        value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, value);
    }

    Ok(ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.github.connect_timeout))
        .user_agent(format!("roaster/{}", config.version))
        .default_headers(headers))
}

/// Build a GitHub URL, appending each segment percent-encoded to the root URL path.
pub fn build_github_url(config: &Config, segments: &[&str]) -> Result<Url, GitHubError> {
    let root_url = &config.api.github.root_url;
    let invalid = || GitHubError::InvalidRootUrlError {
        root_url: root_url.clone(),
    };

    let mut url = Url::parse(root_url).map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|_| invalid())?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}
