//! OnboardingManager — owns the active wizard session for the host
//! application and produces status snapshots.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::info;

use super::edit::DraftEdit;
use super::model::ProfileDraft;
use super::state::{STEP_COUNT, WizardStep};
use super::submission::{ProfileId, SubmissionGateway};
use super::validation::StepValidator;
use super::wizard::OnboardingWizard;
use crate::error::{EditError, TransitionError};

/// Snapshot of the session, returned by every REST endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct OnboardingStatus {
    pub step: WizardStep,
    pub step_index: usize,
    pub step_count: usize,
    pub step_title: &'static str,
    pub can_advance: bool,
    pub onboarding_completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<ProfileDraft>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<ProfileId>,
}

/// Result of applying a draft edit.
#[derive(Debug, Clone, Serialize)]
pub struct EditOutcome {
    /// False when the edit was accepted but changed nothing.
    pub applied: bool,
    pub status: OnboardingStatus,
}

/// Single-session coordinator. Every mutation takes the write lock, so
/// there is exactly one writer at a time.
pub struct OnboardingManager {
    gateway: Arc<dyn SubmissionGateway>,
    validator: StepValidator,
    wizard: RwLock<OnboardingWizard>,
}

impl OnboardingManager {
    pub fn new(gateway: Arc<dyn SubmissionGateway>) -> Self {
        Self::with_validator(gateway, StepValidator::new())
    }

    pub fn with_validator(gateway: Arc<dyn SubmissionGateway>, validator: StepValidator) -> Self {
        let wizard = OnboardingWizard::with_validator(Arc::clone(&gateway), validator);
        Self {
            gateway,
            validator,
            wizard: RwLock::new(wizard),
        }
    }

    /// Get the current onboarding status.
    pub async fn status(&self) -> OnboardingStatus {
        let wizard = self.wizard.read().await;
        snapshot(&wizard)
    }

    /// Apply one edit to the draft.
    pub async fn edit(&self, edit: DraftEdit) -> Result<EditOutcome, EditError> {
        let mut wizard = self.wizard.write().await;
        let draft = wizard.draft_mut().ok_or(EditError::DraftConsumed)?;
        let applied = edit.apply(draft);
        Ok(EditOutcome {
            applied,
            status: snapshot(&wizard),
        })
    }

    /// Advance one step, submitting when leaving `Preferences`.
    pub async fn advance(&self) -> Result<OnboardingStatus, TransitionError> {
        let mut wizard = self.wizard.write().await;
        wizard.advance().await?;
        Ok(snapshot(&wizard))
    }

    pub async fn retreat(&self) -> Result<OnboardingStatus, TransitionError> {
        let mut wizard = self.wizard.write().await;
        wizard.retreat()?;
        Ok(snapshot(&wizard))
    }

    /// Abandon the current session and start over with an empty draft.
    pub async fn restart(&self) -> OnboardingStatus {
        let mut wizard = self.wizard.write().await;
        if let Some(draft) = wizard.draft() {
            info!(draft_id = %draft.draft_id(), step = %wizard.step(), "Onboarding abandoned");
        }
        *wizard = OnboardingWizard::with_validator(Arc::clone(&self.gateway), self.validator);
        snapshot(&wizard)
    }
}

fn snapshot(wizard: &OnboardingWizard) -> OnboardingStatus {
    let step = wizard.step();
    OnboardingStatus {
        step,
        step_index: wizard.current_step_index(),
        step_count: STEP_COUNT,
        step_title: step.title(),
        can_advance: wizard.can_advance(),
        onboarding_completed: wizard.is_complete(),
        draft: wizard.draft().cloned(),
        profile_id: wizard.profile_id().cloned(),
    }
}
