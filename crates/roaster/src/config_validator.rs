//! Validation utilities.

use std::fmt::Write;

use roaster_config::{ApiDriver, Config};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        let _ = write!(error, "  - Missing env. var.: {}", name);
    }

    let mut error = String::new();

    // Check server configuration
    if config.server.bind_ip.is_empty() {
        _missing(&mut error, "ROASTER_SERVER_BIND_IP");
    }
    if config.server.bind_port == 0 {
        _missing(&mut error, "ROASTER_SERVER_BIND_PORT");
    }

    // Check API configuration
    if config.api.driver == ApiDriver::GitHub && config.api.github.root_url.is_empty() {
        _missing(&mut error, "ROASTER_API_GITHUB_ROOT_URL");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_env_vars() {
        let mut config = Config::from_env_no_version().unwrap();
        config.server.bind_ip = "127.0.0.1".into();
        config.server.bind_port = 8080;
        config.api.driver = ApiDriver::GitHub;
        config.api.github.root_url = "https://api.github.com".into();
        assert!(validate_configuration(&config).is_ok());

        config.api.driver = ApiDriver::Null;
        config.api.github.root_url = String::new();
        assert!(validate_configuration(&config).is_ok());

        config.api.driver = ApiDriver::GitHub;
        config.server.bind_port = 0;
        let ValidationError::EnvVarsError { errors } =
            validate_configuration(&config).unwrap_err();
        assert_eq!(
            errors,
            concat!(
                "\n  - Missing env. var.: ROASTER_SERVER_BIND_PORT",
                "\n  - Missing env. var.: ROASTER_API_GITHUB_ROOT_URL"
            )
        );
    }
}
