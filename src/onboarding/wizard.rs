//! Wizard controller: owns the draft and drives step transitions.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::model::ProfileDraft;
use super::state::WizardStep;
use super::submission::{ProfileId, SubmissionGateway};
use super::validation::StepValidator;
use crate::error::TransitionError;

/// A single onboarding session.
///
/// Refused transitions return an error and leave both the step and the draft
/// untouched, whether they come from the UI or a direct call.
pub struct OnboardingWizard {
    step: WizardStep,
    /// `None` once the draft has been submitted.
    draft: Option<ProfileDraft>,
    profile_id: Option<ProfileId>,
    validator: StepValidator,
    gateway: Arc<dyn SubmissionGateway>,
}

impl OnboardingWizard {
    /// Start a new session at `Welcome` with an empty draft.
    pub fn new(gateway: Arc<dyn SubmissionGateway>) -> Self {
        Self::with_validator(gateway, StepValidator::new())
    }

    pub fn with_validator(gateway: Arc<dyn SubmissionGateway>, validator: StepValidator) -> Self {
        let draft = ProfileDraft::new();
        debug!(draft_id = %draft.draft_id(), "Onboarding session started");
        Self {
            step: WizardStep::Welcome,
            draft: Some(draft),
            profile_id: None,
            validator,
            gateway,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// 0-based position of the current step, for progress display.
    pub fn current_step_index(&self) -> usize {
        self.step.index()
    }

    /// The draft being built, or `None` once it has been submitted.
    pub fn draft(&self) -> Option<&ProfileDraft> {
        self.draft.as_ref()
    }

    /// Mutable access for editing. `None` once the draft has been submitted.
    pub fn draft_mut(&mut self) -> Option<&mut ProfileDraft> {
        self.draft.as_mut()
    }

    /// Profile created by a successful submission.
    pub fn profile_id(&self) -> Option<&ProfileId> {
        self.profile_id.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.step.is_terminal()
    }

    /// Whether the current step's rule is satisfied right now.
    pub fn can_advance(&self) -> bool {
        match self.draft {
            Some(ref draft) => self.validator.is_valid(self.step, draft),
            None => false,
        }
    }

    /// Move to the next step.
    ///
    /// Advancing from `Preferences` submits the draft. The submission is
    /// attempted once per call; on failure the wizard stays on
    /// `Preferences` with the draft intact so the caller can retry.
    pub async fn advance(&mut self) -> Result<WizardStep, TransitionError> {
        let current = self.step;
        let next = current.next().ok_or(TransitionError::Finished)?;
        let draft = self.draft.as_ref().ok_or(TransitionError::Finished)?;

        if !self.validator.is_valid(current, draft) {
            debug!(step = %current, "Advance refused, step incomplete");
            return Err(TransitionError::Incomplete { step: current });
        }

        if next.is_terminal() {
            if let Some(step) = self.validator.first_invalid_step(draft) {
                warn!(step = %step, "Submission refused, earlier step no longer valid");
                return Err(TransitionError::Incomplete { step });
            }

            let draft_id = draft.draft_id();
            info!(%draft_id, "Submitting profile");
            let profile_id = self.gateway.submit(draft).await.map_err(|e| {
                warn!(%draft_id, error = %e, "Profile submission failed");
                TransitionError::Submission(e)
            })?;

            self.draft = None;
            self.profile_id = Some(profile_id);
        }

        self.step = next;
        info!(from = %current, to = %next, "Onboarding advanced");
        Ok(next)
    }

    /// Move back one step. Refused at `Welcome` and after completion.
    pub fn retreat(&mut self) -> Result<WizardStep, TransitionError> {
        if self.step.is_terminal() {
            return Err(TransitionError::Finished);
        }
        let previous = self.step.previous().ok_or(TransitionError::AtStart)?;
        debug!(from = %self.step, to = %previous, "Onboarding retreated");
        self.step = previous;
        Ok(previous)
    }
}
