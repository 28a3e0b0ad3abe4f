//! Wizard step sequence.

use serde::{Deserialize, Serialize};

/// Number of pre-terminal steps shown in the progress indicator.
pub const STEP_COUNT: usize = 7;

/// The steps of the onboarding wizard.
///
/// Progresses linearly: Welcome → Photos → Basics → Bio → Interests →
/// Questions → Preferences → Complete. There is no branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Welcome,
    Photos,
    Basics,
    Bio,
    Interests,
    Questions,
    Preferences,
    Complete,
}

impl WizardStep {
    /// All steps in order, terminal step last.
    pub const ALL: [WizardStep; 8] = [
        Self::Welcome,
        Self::Photos,
        Self::Basics,
        Self::Bio,
        Self::Interests,
        Self::Questions,
        Self::Preferences,
        Self::Complete,
    ];

    /// Whether this step is terminal (the profile has been submitted).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Get the next step in the linear progression, if any.
    pub fn next(&self) -> Option<WizardStep> {
        use WizardStep::*;
        match self {
            Welcome => Some(Photos),
            Photos => Some(Basics),
            Basics => Some(Bio),
            Bio => Some(Interests),
            Interests => Some(Questions),
            Questions => Some(Preferences),
            Preferences => Some(Complete),
            Complete => None,
        }
    }

    /// Get the previous step. `Welcome` has no predecessor and `Complete`
    /// cannot be left once reached.
    pub fn previous(&self) -> Option<WizardStep> {
        use WizardStep::*;
        match self {
            Welcome | Complete => None,
            Photos => Some(Welcome),
            Basics => Some(Photos),
            Bio => Some(Basics),
            Interests => Some(Bio),
            Questions => Some(Interests),
            Preferences => Some(Questions),
        }
    }

    /// 0-based ordinal for progress display. `Complete` reports
    /// [`STEP_COUNT`].
    pub fn index(&self) -> usize {
        use WizardStep::*;
        match self {
            Welcome => 0,
            Photos => 1,
            Basics => 2,
            Bio => 3,
            Interests => 4,
            Questions => 5,
            Preferences => 6,
            Complete => STEP_COUNT,
        }
    }

    /// Human-readable title for the step header.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Photos => "Add your photos",
            Self::Basics => "The basics",
            Self::Bio => "About you",
            Self::Interests => "Your interests",
            Self::Questions => "Get to know you",
            Self::Preferences => "Who you're looking for",
            Self::Complete => "All set",
        }
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::Welcome
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Welcome => "welcome",
            Self::Photos => "photos",
            Self::Basics => "basics",
            Self::Bio => "bio",
            Self::Interests => "interests",
            Self::Questions => "questions",
            Self::Preferences => "preferences",
            Self::Complete => "complete",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_walks_all_steps() {
        let mut current = WizardStep::Welcome;
        for expected in &WizardStep::ALL[1..] {
            let next = current.next().unwrap();
            assert_eq!(next, *expected);
            current = next;
        }
        assert!(current.is_terminal());
        assert!(current.next().is_none());
    }

    #[test]
    fn previous_is_inverse_of_next() {
        for step in &WizardStep::ALL[1..WizardStep::ALL.len() - 1] {
            assert_eq!(step.previous().and_then(|p| p.next()), Some(*step));
        }
        assert!(WizardStep::Welcome.previous().is_none());
        assert!(WizardStep::Complete.previous().is_none());
    }

    #[test]
    fn index_matches_fixed_order() {
        for (i, step) in WizardStep::ALL.iter().enumerate() {
            assert_eq!(step.index(), i);
        }
        assert_eq!(WizardStep::Preferences.index(), STEP_COUNT - 1);
    }

    #[test]
    fn display_matches_serde() {
        for step in WizardStep::ALL {
            let display = format!("{step}");
            let json = serde_json::to_string(&step).unwrap();
            assert_eq!(
                format!("\"{display}\""),
                json,
                "Display and serde should match for {step:?}"
            );
        }
    }
}
