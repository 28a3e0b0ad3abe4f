//! Match onboarding — guided profile creation for new members.

pub mod config;
pub mod error;
pub mod onboarding;
