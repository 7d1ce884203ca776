//! Hydration domain module.
//!
//! This module contains the domain types and pure logic for daily water
//! intake tracking, including:
//! - Age groups and their recommended daily goals
//! - Progress calculation (remaining amount, progress percentage)
//! - Reaction tiers and threshold policies
//! - Tip selection

mod calculator;
mod error;
mod tips;

pub use calculator::{assess, ProgressSnapshot, ReactionPolicy, ReactionTier};
pub use error::HydrationError;
pub use tips::{default_tips, RandomTipPicker, SequentialTipPicker, TipPicker};

/// Smallest daily goal accepted by the goal form, in millilitres.
pub const GOAL_MIN_ML: u32 = 500;

/// Largest daily goal accepted by the goal form, in millilitres.
pub const GOAL_MAX_ML: u32 = 5000;

/// Specifying the supported age groups.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AgeGroup {
    Children,
    Teens,
    Adults,
    Seniors,
}

impl AgeGroup {
    /// All age groups in display order.
    pub const ALL: [AgeGroup; 4] = [
        AgeGroup::Children,
        AgeGroup::Teens,
        AgeGroup::Adults,
        AgeGroup::Seniors,
    ];

    /// Index into [`AgeGroup::ALL`] selected when nothing is committed yet.
    pub const DEFAULT_INDEX: usize = 2;

    /// Returns the display label including the age bracket.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Children => "Children (4-8 yrs)",
            AgeGroup::Teens => "Teens (9-13 yrs)",
            AgeGroup::Adults => "Adults (14-64 yrs)",
            AgeGroup::Seniors => "Seniors (65+ yrs)",
        }
    }

    /// Returns the recommended daily intake for the group in millilitres.
    ///
    pub fn recommended_goal(&self) -> u32 {
        match self {
            AgeGroup::Children => 1200,
            AgeGroup::Teens => 1700,
            AgeGroup::Adults => 2500,
            AgeGroup::Seniors => 2000,
        }
    }
}

/// Validate a proposed daily goal against the accepted bounds. Returns the
/// value unchanged when it lies within [`GOAL_MIN_ML`, `GOAL_MAX_ML`];
/// out-of-range values surface an error instead of being clamped.
///
pub fn validate_goal(value: u32) -> Result<u32, HydrationError> {
    if (GOAL_MIN_ML..=GOAL_MAX_ML).contains(&value) {
        Ok(value)
    } else {
        Err(HydrationError::GoalOutOfRange {
            value,
            min: GOAL_MIN_ML,
            max: GOAL_MAX_ML,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_group_recommended_goals() {
        assert_eq!(AgeGroup::Children.recommended_goal(), 1200);
        assert_eq!(AgeGroup::Teens.recommended_goal(), 1700);
        assert_eq!(AgeGroup::Adults.recommended_goal(), 2500);
        assert_eq!(AgeGroup::Seniors.recommended_goal(), 2000);
    }

    #[test]
    fn test_age_group_labels_include_brackets() {
        assert!(AgeGroup::Children.label().contains("4-8"));
        assert!(AgeGroup::Teens.label().contains("9-13"));
        assert!(AgeGroup::Adults.label().contains("14-64"));
        assert!(AgeGroup::Seniors.label().contains("65+"));
    }

    #[test]
    fn test_age_group_all_order() {
        assert_eq!(AgeGroup::ALL.len(), 4);
        assert_eq!(AgeGroup::ALL[0], AgeGroup::Children);
        assert_eq!(AgeGroup::ALL[3], AgeGroup::Seniors);
        assert_eq!(AgeGroup::ALL[AgeGroup::DEFAULT_INDEX], AgeGroup::Adults);
    }

    #[test]
    fn test_validate_goal_accepts_bounds() {
        assert_eq!(validate_goal(GOAL_MIN_ML).unwrap(), 500);
        assert_eq!(validate_goal(GOAL_MAX_ML).unwrap(), 5000);
        assert_eq!(validate_goal(2500).unwrap(), 2500);
    }

    #[test]
    fn test_validate_goal_rejects_out_of_range() {
        assert!(matches!(
            validate_goal(499),
            Err(HydrationError::GoalOutOfRange { value: 499, .. })
        ));
        assert!(matches!(
            validate_goal(5001),
            Err(HydrationError::GoalOutOfRange { value: 5001, .. })
        ));
        assert!(matches!(
            validate_goal(0),
            Err(HydrationError::GoalOutOfRange { value: 0, .. })
        ));
    }

    #[test]
    fn test_every_recommended_goal_is_within_bounds() {
        for group in AgeGroup::ALL {
            assert!(validate_goal(group.recommended_goal()).is_ok());
        }
    }
}
