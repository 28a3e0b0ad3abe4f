//! Configuration types.

use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Connection settings for the profile-creation API.
#[derive(Debug, Clone)]
pub struct ProfileApiConfig {
    /// Base URL; profiles are created at `{base_url}/profiles`.
    pub base_url: String,
    /// Bearer token, if the API requires one.
    pub token: Option<SecretString>,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port for the onboarding HTTP surface.
    pub port: u16,
    pub profile_api: ProfileApiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            profile_api: ProfileApiConfig {
                base_url: "http://localhost:3000".to_string(),
                token: None,
                timeout: Duration::from_secs(15),
            },
        }
    }
}

impl AppConfig {
    /// Load from environment variables.
    ///
    /// - `PROFILE_API_URL` (required)
    /// - `PROFILE_API_TOKEN`
    /// - `PROFILE_API_TIMEOUT_SECS` (default 15)
    /// - `MATCH_ONBOARDING_PORT` (default 8080)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let base_url = lookup("PROFILE_API_URL")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("PROFILE_API_URL".to_string()))?;

        let token = lookup("PROFILE_API_TOKEN")
            .filter(|s| !s.is_empty())
            .map(SecretString::from);

        let timeout = match lookup("PROFILE_API_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_value("PROFILE_API_TIMEOUT_SECS", &raw)?),
            None => defaults.profile_api.timeout,
        };

        let port = match lookup("MATCH_ONBOARDING_PORT") {
            Some(raw) => parse_value("MATCH_ONBOARDING_PORT", &raw)?,
            None => defaults.port,
        };

        Ok(Self {
            port,
            profile_api: ProfileApiConfig {
                base_url,
                token,
                timeout,
            },
        })
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })
}
