//! Guided profile onboarding.
//!
//! A linear wizard collects photos, basic facts, a bio, interests, answers
//! to fixed questions and matching preferences into a `ProfileDraft`. Each
//! step is gated by `StepValidator`; leaving the last step hands the draft
//! to a `SubmissionGateway` exactly once.

pub mod edit;
pub mod interests;
pub mod manager;
pub mod model;
pub mod photos;
pub mod routes;
pub mod state;
pub mod submission;
pub mod validation;
pub mod wizard;

pub use edit::DraftEdit;
pub use interests::{INTEREST_TAXONOMY, InterestCategory, Interests};
pub use manager::{EditOutcome, OnboardingManager, OnboardingStatus};
pub use model::{
    AgeRange, Gender, GenderPreference, Identity, Preferences, ProfileDraft, QuestionAnswer,
    RelationshipType,
};
pub use photos::{PhotoCollection, PhotoRef};
pub use routes::{OnboardingRouteState, onboarding_routes};
pub use state::WizardStep;
pub use submission::{HttpProfileApi, ProfileId, SubmissionGateway};
pub use validation::StepValidator;
pub use wizard::OnboardingWizard;
