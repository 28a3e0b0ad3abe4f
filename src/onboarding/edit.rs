//! Draft edit commands — the wire form of every in-place draft mutation.

use chrono::NaiveDate;
use serde::Deserialize;

use super::model::{Gender, GenderPreference, ProfileDraft, RelationshipType, optional_text};
use super::photos::PhotoRef;

/// A single edit to the profile draft, as sent by the client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DraftEdit {
    AddPhoto { photo: PhotoRef },
    RemovePhoto { index: usize },
    PromotePhoto { index: usize },
    SetName { name: String },
    SetBirthdate { birthdate: Option<NaiveDate> },
    SetGender { gender: Option<Gender> },
    SetLocation { location: String },
    /// Optional details. An absent field is left as is; a blank one clears it.
    SetDetails {
        #[serde(default)]
        occupation: Option<String>,
        #[serde(default)]
        company: Option<String>,
        #[serde(default)]
        school: Option<String>,
        #[serde(default)]
        height: Option<String>,
    },
    SetBio { bio: String },
    ToggleInterest { interest: String },
    AnswerQuestion { index: usize, answer: String },
    SetGenderPreference { preference: Option<GenderPreference> },
    SetRelationshipType { relationship_type: Option<RelationshipType> },
    SetAgeMin { min: u32 },
    SetAgeMax { max: u32 },
    SetDistance { miles: u32 },
}

impl DraftEdit {
    /// Apply the edit in place. Returns false when the edit was a no-op
    /// (full photo list, out-of-range index, interest outside the taxonomy).
    pub fn apply(self, draft: &mut ProfileDraft) -> bool {
        match self {
            Self::AddPhoto { photo } => draft.photos.add(photo),
            Self::RemovePhoto { index } => draft.photos.remove(index).is_some(),
            Self::PromotePhoto { index } => draft.photos.promote_to_primary(index),
            Self::SetName { name } => {
                draft.identity.name = name;
                true
            }
            Self::SetBirthdate { birthdate } => {
                draft.identity.birthdate = birthdate;
                true
            }
            Self::SetGender { gender } => {
                draft.identity.gender = gender;
                true
            }
            Self::SetLocation { location } => {
                draft.identity.location = location;
                true
            }
            Self::SetDetails {
                occupation,
                company,
                school,
                height,
            } => {
                let update = |field: &mut Option<String>, value: Option<String>| {
                    if let Some(value) = value {
                        *field = optional_text(&value);
                    }
                };
                update(&mut draft.occupation, occupation);
                update(&mut draft.company, company);
                update(&mut draft.school, school);
                update(&mut draft.height, height);
                true
            }
            Self::SetBio { bio } => {
                draft.set_bio(&bio);
                true
            }
            Self::ToggleInterest { interest } => draft.interests.toggle(&interest),
            Self::AnswerQuestion { index, answer } => draft.answer_question(index, &answer),
            Self::SetGenderPreference { preference } => {
                draft.preferences.gender_preference = preference;
                true
            }
            Self::SetRelationshipType { relationship_type } => {
                draft.preferences.relationship_type = relationship_type;
                true
            }
            Self::SetAgeMin { min } => {
                draft.preferences.age_range.set_min(min);
                true
            }
            Self::SetAgeMax { max } => {
                draft.preferences.age_range.set_max(max);
                true
            }
            Self::SetDistance { miles } => {
                draft.preferences.set_distance(miles);
                true
            }
        }
    }
}
