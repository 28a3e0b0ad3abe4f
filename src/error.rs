//! Error types for the onboarding service.

use std::time::Duration;

use crate::onboarding::state::WizardStep;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Failures reported by the external profile-creation API.
///
/// This is the only error class that crosses the wizard/collaborator
/// boundary. None of these are retried internally.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Profile API rejected the submission ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Profile API timed out after {0:?}")]
    Timeout(Duration),

    #[error("Profile API request failed: {0}")]
    Transport(String),

    #[error("Invalid response from profile API: {0}")]
    InvalidResponse(String),
}

impl SubmissionError {
    /// Whether the host application may reasonably offer a retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout(_) | Self::Transport(_) => true,
            Self::Rejected { status, .. } => *status == 429 || *status >= 500,
            Self::InvalidResponse(_) => false,
        }
    }
}

/// A wizard transition that was refused. The wizard state is unchanged.
#[derive(Debug, thiserror::Error)]
pub enum TransitionError {
    #[error("Step {step} is incomplete")]
    Incomplete { step: WizardStep },

    #[error("Already at the first step")]
    AtStart,

    #[error("Onboarding is already complete")]
    Finished,

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// A draft edit that could not be applied.
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("Onboarding is already complete; the draft was submitted")]
    DraftConsumed,
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
