//! Hand-off of the completed draft to the external profile-creation API.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::model::ProfileDraft;
use crate::config::ProfileApiConfig;
use crate::error::{ConfigError, SubmissionError};

/// Identifier of a created profile, as returned by the profile API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Boundary to the profile-creation service.
///
/// Called once per completed wizard session with the fully validated draft.
/// Implementations must not retry internally; the error is surfaced to the
/// host application.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    async fn submit(&self, draft: &ProfileDraft) -> Result<ProfileId, SubmissionError>;
}

#[derive(Debug, Deserialize)]
struct CreatedProfile {
    id: String,
}

/// `SubmissionGateway` backed by the HTTP profile API.
pub struct HttpProfileApi {
    client: reqwest::Client,
    endpoint: String,
    token: Option<SecretString>,
    timeout: Duration,
}

impl HttpProfileApi {
    pub fn new(config: &ProfileApiConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!("{}/profiles", config.base_url.trim_end_matches('/')),
            token: config.token.clone(),
            timeout: config.timeout,
        })
    }

    fn map_transport_error(&self, err: reqwest::Error) -> SubmissionError {
        if err.is_timeout() {
            SubmissionError::Timeout(self.timeout)
        } else {
            SubmissionError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl SubmissionGateway for HttpProfileApi {
    async fn submit(&self, draft: &ProfileDraft) -> Result<ProfileId, SubmissionError> {
        let draft_id = draft.draft_id();
        let mut request = self
            .client
            .post(&self.endpoint)
            .header("Idempotency-Key", draft_id.to_string())
            .json(draft);
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(%draft_id, status = status.as_u16(), "Profile API rejected submission");
            return Err(SubmissionError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let created: CreatedProfile = response
            .json()
            .await
            .map_err(|e| SubmissionError::InvalidResponse(e.to_string()))?;
        if created.id.trim().is_empty() {
            return Err(SubmissionError::InvalidResponse(
                "empty profile id".to_string(),
            ));
        }

        info!(%draft_id, profile_id = %created.id, "Profile created");
        Ok(ProfileId(created.id))
    }
}
