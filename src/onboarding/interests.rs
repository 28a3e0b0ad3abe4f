//! Interest selection over a fixed taxonomy.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

/// Minimum number of interests a profile must select.
pub const MIN_INTERESTS: usize = 3;

/// A named group of selectable interests.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InterestCategory {
    pub name: &'static str,
    pub interests: &'static [&'static str],
}

/// Read-only taxonomy used to render the selectable options.
pub static INTEREST_TAXONOMY: &[InterestCategory] = &[
    InterestCategory {
        name: "Sports & Fitness",
        interests: &[
            "Yoga", "Running", "Gym", "Hiking", "Cycling", "Swimming", "Climbing",
        ],
    },
    InterestCategory {
        name: "Food & Drink",
        interests: &[
            "Coffee", "Cooking", "Wine", "Craft beer", "Brunch", "Vegan", "Foodie",
        ],
    },
    InterestCategory {
        name: "Arts & Culture",
        interests: &[
            "Museums", "Photography", "Painting", "Theater", "Writing", "Design",
        ],
    },
    InterestCategory {
        name: "Outdoors & Travel",
        interests: &[
            "Travel", "Camping", "Road trips", "Beaches", "Skiing", "Backpacking",
        ],
    },
    InterestCategory {
        name: "Entertainment",
        interests: &[
            "Movies", "Live music", "Concerts", "Gaming", "Board games", "Podcasts", "Reading",
        ],
    },
    InterestCategory {
        name: "Lifestyle",
        interests: &[
            "Dogs", "Cats", "Volunteering", "Meditation", "Fashion", "Gardening",
        ],
    },
];

/// Whether `interest` is one of the selectable taxonomy entries.
pub fn is_known_interest(interest: &str) -> bool {
    INTEREST_TAXONOMY
        .iter()
        .any(|category| category.interests.contains(&interest))
}

/// Selected interests, drawn from [`INTEREST_TAXONOMY`]. A set: no
/// duplicates, order is not meaningful.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Interests(BTreeSet<String>);

impl Interests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `interest` if absent, remove it if present. Interests outside
    /// the taxonomy are never added. Returns whether the set changed.
    pub fn toggle(&mut self, interest: &str) -> bool {
        if self.0.remove(interest) {
            return true;
        }
        if !is_known_interest(interest) {
            debug!(interest, "Ignoring interest outside the taxonomy");
            return false;
        }
        self.0.insert(interest.to_string())
    }

    pub fn contains(&self, interest: &str) -> bool {
        self.0.contains(interest)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_state() {
        let mut interests = Interests::new();
        interests.toggle("Yoga");
        interests.toggle("Coffee");
        let before = interests.clone();

        assert!(interests.toggle("Travel"));
        assert!(interests.contains("Travel"));
        assert!(interests.toggle("Travel"));
        assert_eq!(interests, before);

        assert!(interests.toggle("Yoga"));
        assert!(!interests.contains("Yoga"));
        assert!(interests.toggle("Yoga"));
        assert_eq!(interests, before);
    }

    #[test]
    fn blank_and_unknown_interests_are_ignored() {
        let mut interests = Interests::new();
        interests.toggle("Yoga");
        let before = interests.clone();

        for bogus in ["", " ", "Underwater basket weaving", "yoga"] {
            assert!(!interests.toggle(bogus), "{bogus:?} should be refused");
        }
        assert_eq!(interests, before);
        assert_eq!(interests.len(), 1);
    }

    #[test]
    fn known_interest_lookup() {
        assert!(is_known_interest("Coffee"));
        assert!(is_known_interest("Board games"));
        assert!(!is_known_interest(""));
        assert!(!is_known_interest("Sports & Fitness"));
    }

    #[test]
    fn set_semantics_have_no_duplicates() {
        let mut interests = Interests::new();
        interests.toggle("Hiking");
        interests.toggle("Hiking");
        interests.toggle("Hiking");
        assert_eq!(interests.len(), 1);
        assert!(interests.contains("Hiking"));
    }

    #[test]
    fn taxonomy_contains_common_interests() {
        let all: Vec<&str> = INTEREST_TAXONOMY
            .iter()
            .flat_map(|c| c.interests.iter().copied())
            .collect();
        for expected in ["Yoga", "Coffee", "Travel"] {
            assert!(all.contains(&expected), "{expected} missing from taxonomy");
        }
        assert!(all.len() >= MIN_INTERESTS);
    }

    #[test]
    fn taxonomy_serializes_categories() {
        let json = serde_json::to_value(INTEREST_TAXONOMY).unwrap();
        assert_eq!(json[0]["name"], "Sports & Fitness");
        assert_eq!(json[0]["interests"][0], "Yoga");
    }
}
