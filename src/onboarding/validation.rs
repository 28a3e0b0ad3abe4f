//! Per-step completeness rules.
//!
//! The validator is the single authority on whether a step's slice of the
//! draft is complete. It never mutates the draft and is re-evaluated on every
//! call, so "can continue" reflects the latest edit immediately.

use chrono::{NaiveDate, Utc};

use super::interests::MIN_INTERESTS;
use super::model::{MIN_BIO_CHARS, MINIMUM_AGE, ProfileDraft};
use super::state::WizardStep;

/// Evaluates step rules against a draft.
///
/// Age checks need a reference date. By default that is the current UTC
/// date at evaluation time; tests and replays can pin it with [`StepValidator::as_of`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StepValidator {
    as_of: Option<NaiveDate>,
}

impl StepValidator {
    /// Validator that checks ages against today's date.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator that checks ages against a fixed date.
    pub fn as_of(today: NaiveDate) -> Self {
        Self { as_of: Some(today) }
    }

    fn today(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Whether `draft` satisfies the rule for `step`.
    ///
    /// `Welcome` is always valid. `Complete` has no rule and is never valid
    /// to advance from.
    pub fn is_valid(&self, step: WizardStep, draft: &ProfileDraft) -> bool {
        match step {
            WizardStep::Welcome => true,
            WizardStep::Photos => !draft.photos.is_empty(),
            WizardStep::Basics => self.basics_valid(draft),
            WizardStep::Bio => draft.bio_len() >= MIN_BIO_CHARS,
            WizardStep::Interests => draft.interests.len() >= MIN_INTERESTS,
            WizardStep::Questions => draft
                .questions()
                .iter()
                .all(|q| !q.answer.trim().is_empty()),
            WizardStep::Preferences => {
                draft.preferences.gender_preference.is_some()
                    && draft.preferences.relationship_type.is_some()
            }
            WizardStep::Complete => false,
        }
    }

    /// First pre-terminal step whose rule fails, in wizard order.
    pub fn first_invalid_step(&self, draft: &ProfileDraft) -> Option<WizardStep> {
        WizardStep::ALL
            .into_iter()
            .filter(|step| !step.is_terminal())
            .find(|step| !self.is_valid(*step, draft))
    }

    fn basics_valid(&self, draft: &ProfileDraft) -> bool {
        let identity = &draft.identity;
        let old_enough = identity
            .age_on(self.today())
            .is_some_and(|age| age >= MINIMUM_AGE);

        !identity.name.trim().is_empty()
            && old_enough
            && identity.gender.is_some()
            && !identity.location.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Months;

    use super::*;
    use crate::onboarding::model::{Gender, GenderPreference, RelationshipType};
    use crate::onboarding::photos::PhotoRef;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    fn years_ago(years: u32) -> NaiveDate {
        today().checked_sub_months(Months::new(years * 12)).unwrap()
    }

    fn validator() -> StepValidator {
        StepValidator::as_of(today())
    }

    fn with_basics(draft: &mut ProfileDraft) {
        draft.identity.name = "Ava".into();
        draft.identity.birthdate = Some(years_ago(25));
        draft.identity.gender = Some(Gender::Woman);
        draft.identity.location = "Austin".into();
    }

    #[test]
    fn welcome_always_valid_complete_never() {
        let draft = ProfileDraft::new();
        assert!(validator().is_valid(WizardStep::Welcome, &draft));
        assert!(!validator().is_valid(WizardStep::Complete, &draft));
    }

    #[test]
    fn photos_need_one_entry() {
        let mut draft = ProfileDraft::new();
        assert!(!validator().is_valid(WizardStep::Photos, &draft));
        draft.photos.add(PhotoRef::from("p1"));
        assert!(validator().is_valid(WizardStep::Photos, &draft));
    }

    #[test]
    fn basics_require_every_field() {
        let mut draft = ProfileDraft::new();
        with_basics(&mut draft);
        assert!(validator().is_valid(WizardStep::Basics, &draft));

        let mut missing_name = draft.clone();
        missing_name.identity.name = "   ".into();
        assert!(!validator().is_valid(WizardStep::Basics, &missing_name));

        let mut missing_birthdate = draft.clone();
        missing_birthdate.identity.birthdate = None;
        assert!(!validator().is_valid(WizardStep::Basics, &missing_birthdate));

        let mut missing_gender = draft.clone();
        missing_gender.identity.gender = None;
        assert!(!validator().is_valid(WizardStep::Basics, &missing_gender));

        let mut missing_location = draft.clone();
        missing_location.identity.location.clear();
        assert!(!validator().is_valid(WizardStep::Basics, &missing_location));
    }

    #[test]
    fn basics_enforce_minimum_age() {
        let mut draft = ProfileDraft::new();
        with_basics(&mut draft);

        draft.identity.birthdate = Some(years_ago(18));
        assert!(validator().is_valid(WizardStep::Basics, &draft));

        draft.identity.birthdate = years_ago(18).succ_opt();
        assert!(!validator().is_valid(WizardStep::Basics, &draft));

        draft.identity.birthdate = Some(years_ago(17));
        assert!(!validator().is_valid(WizardStep::Basics, &draft));
    }

    #[test]
    fn bio_needs_twenty_characters() {
        let mut draft = ProfileDraft::new();
        draft.set_bio("Short bio.");
        assert!(!validator().is_valid(WizardStep::Bio, &draft));
        draft.set_bio("Exactly twenty chars");
        assert_eq!(draft.bio_len(), 20);
        assert!(validator().is_valid(WizardStep::Bio, &draft));
    }

    #[test]
    fn interests_need_three() {
        let mut draft = ProfileDraft::new();
        draft.interests.toggle("Yoga");
        draft.interests.toggle("Coffee");
        assert!(!validator().is_valid(WizardStep::Interests, &draft));
        draft.interests.toggle("Travel");
        assert!(validator().is_valid(WizardStep::Interests, &draft));
    }

    #[test]
    fn questions_need_every_answer() {
        let mut draft = ProfileDraft::new();
        draft.answer_question(0, "Tacos and a walk");
        draft.answer_question(1, "I speak three languages");
        assert!(!validator().is_valid(WizardStep::Questions, &draft));
        draft.answer_question(2, "Laughs easily");
        assert!(validator().is_valid(WizardStep::Questions, &draft));
        draft.answer_question(2, "  ");
        assert!(!validator().is_valid(WizardStep::Questions, &draft));
    }

    #[test]
    fn preferences_need_gender_and_relationship_type() {
        let mut draft = ProfileDraft::new();
        draft.preferences.gender_preference = Some(GenderPreference::Men);
        assert!(!validator().is_valid(WizardStep::Preferences, &draft));
        draft.preferences.relationship_type = Some(RelationshipType::Casual);
        assert!(validator().is_valid(WizardStep::Preferences, &draft));
    }

    #[test]
    fn first_invalid_step_follows_wizard_order() {
        let mut draft = ProfileDraft::new();
        assert_eq!(
            validator().first_invalid_step(&draft),
            Some(WizardStep::Photos)
        );
        draft.photos.add(PhotoRef::from("p1"));
        with_basics(&mut draft);
        assert_eq!(validator().first_invalid_step(&draft), Some(WizardStep::Bio));
    }

    #[test]
    fn validation_does_not_mutate() {
        let mut draft = ProfileDraft::new();
        with_basics(&mut draft);
        let before = draft.clone();
        for step in WizardStep::ALL {
            validator().is_valid(step, &draft);
        }
        assert_eq!(draft, before);
    }
}
