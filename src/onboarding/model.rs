//! Profile draft data model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::interests::Interests;
use super::photos::PhotoCollection;

/// Minimum age to create a profile.
pub const MINIMUM_AGE: u32 = 18;
/// Hard cap on bio length, in characters.
pub const MAX_BIO_CHARS: usize = 500;
/// Shortest bio accepted to continue past the bio step, in characters.
pub const MIN_BIO_CHARS: usize = 20;
/// Lowest selectable age in the match age range.
pub const AGE_RANGE_FLOOR: u32 = 18;
/// Highest selectable age in the match age range.
pub const AGE_RANGE_CEILING: u32 = 70;
/// Match distance bounds, in miles.
pub const MIN_DISTANCE: u32 = 5;
pub const MAX_DISTANCE: u32 = 100;

/// Predetermined prompts, in display order.
pub const QUESTION_PROMPTS: [&str; 3] = [
    "My ideal first date is...",
    "A fun fact about me is...",
    "I'm looking for someone who...",
];

/// The user's own gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Woman,
    Man,
    #[serde(rename = "Non-binary")]
    NonBinary,
    Other,
}

/// Which genders the user wants to be matched with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenderPreference {
    Men,
    Women,
    Everyone,
}

/// What the user is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationshipType {
    #[serde(rename = "Long-term relationship")]
    LongTerm,
    #[serde(rename = "Casual dating")]
    Casual,
    Friendship,
    #[serde(rename = "Not sure yet")]
    NotSure,
}

/// Required basic facts about the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub name: String,
    pub birthdate: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub location: String,
}

impl Identity {
    /// Age in whole years on `today`. `None` without a birthdate or when the
    /// birthdate lies in the future.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        self.birthdate.and_then(|birthdate| today.years_since(birthdate))
    }
}

/// Inclusive `[min, max]` age range. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeRange {
    min: u32,
    max: u32,
}

impl AgeRange {
    pub fn new(min: u32, max: u32) -> Self {
        let mut range = Self::default();
        range.set_min(min);
        range.set_max(max);
        range
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Set the lower bound, clamped into the selectable range. Raises the
    /// upper bound if it would otherwise fall below the new minimum.
    pub fn set_min(&mut self, min: u32) {
        self.min = min.clamp(AGE_RANGE_FLOOR, AGE_RANGE_CEILING);
        if self.max < self.min {
            self.max = self.min;
        }
    }

    /// Set the upper bound, clamped into the selectable range. Lowers the
    /// lower bound if it would otherwise exceed the new maximum.
    pub fn set_max(&mut self, max: u32) {
        self.max = max.clamp(AGE_RANGE_FLOOR, AGE_RANGE_CEILING);
        if self.min > self.max {
            self.min = self.max;
        }
    }
}

impl Default for AgeRange {
    fn default() -> Self {
        Self { min: 18, max: 45 }
    }
}

/// Matching preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preferences {
    pub gender_preference: Option<GenderPreference>,
    pub age_range: AgeRange,
    distance: u32,
    pub relationship_type: Option<RelationshipType>,
}

impl Preferences {
    /// Maximum match distance, in miles.
    pub fn distance(&self) -> u32 {
        self.distance
    }

    pub fn set_distance(&mut self, miles: u32) {
        self.distance = miles.clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            gender_preference: None,
            age_range: AgeRange::default(),
            distance: 25,
            relationship_type: None,
        }
    }
}

/// One predetermined prompt and the user's answer to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionAnswer {
    pub prompt: &'static str,
    pub answer: String,
}

/// The in-progress profile built across the wizard steps.
///
/// Owned by the wizard for the whole session and handed to the submission
/// gateway once, when the last step completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileDraft {
    #[serde(skip)]
    draft_id: Uuid,
    pub identity: Identity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    pub photos: PhotoCollection,
    bio: String,
    pub interests: Interests,
    questions: Vec<QuestionAnswer>,
    pub preferences: Preferences,
}

impl ProfileDraft {
    /// Create an empty draft with a fresh identifier.
    pub fn new() -> Self {
        Self {
            draft_id: Uuid::new_v4(),
            identity: Identity::default(),
            occupation: None,
            company: None,
            school: None,
            height: None,
            photos: PhotoCollection::new(),
            bio: String::new(),
            interests: Interests::new(),
            questions: QUESTION_PROMPTS
                .iter()
                .map(|&prompt| QuestionAnswer {
                    prompt,
                    answer: String::new(),
                })
                .collect(),
            preferences: Preferences::default(),
        }
    }

    /// Identifier of this onboarding session's draft. Sent as the
    /// idempotency key on submission.
    pub fn draft_id(&self) -> Uuid {
        self.draft_id
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    /// Bio length in characters.
    pub fn bio_len(&self) -> usize {
        self.bio.chars().count()
    }

    /// Replace the bio, truncating to [`MAX_BIO_CHARS`] characters.
    pub fn set_bio(&mut self, text: &str) {
        self.bio = text.chars().take(MAX_BIO_CHARS).collect();
    }

    pub fn questions(&self) -> &[QuestionAnswer] {
        &self.questions
    }

    /// Set the answer for the question at `index`. Prompts never change.
    /// Returns false for an out-of-range index.
    pub fn answer_question(&mut self, index: usize, answer: &str) -> bool {
        match self.questions.get_mut(index) {
            Some(question) => {
                question.answer = answer.to_string();
                true
            }
            None => false,
        }
    }
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize free text for an optional field: blank input clears it.
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
