//! Session data for a single tracking run.
//!
//! The session owns everything the user has committed so far: the active
//! goal, the age group it was derived from and the running intake total.
//! Staged form values live elsewhere and only land here through an
//! explicit commit.

use crate::hydration::AgeGroup;
use serde::{Deserialize, Serialize};

/// Specifying what a restart keeps.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RestartPolicy {
    /// Clear the intake total but keep the committed goal.
    KeepGoal,
    /// Clear the intake total and the committed goal.
    ClearAll,
}

impl Default for RestartPolicy {
    fn default() -> Self {
        RestartPolicy::KeepGoal
    }
}

/// Committed data for one tracking session.
///
#[derive(Debug, Clone)]
pub struct Session {
    goal: u32,
    age_group: Option<AgeGroup>,
    total_intake: u32,
    entry_count: u32,
    tips: Vec<String>,
}

impl Session {
    /// Creates an empty session with the given tip pool.
    ///
    pub fn new(tips: Vec<String>) -> Self {
        Self {
            goal: 0,
            age_group: None,
            total_intake: 0,
            entry_count: 0,
            tips,
        }
    }

    /// Returns the committed daily goal in millilitres, 0 if none is set.
    ///
    pub fn goal(&self) -> u32 {
        self.goal
    }

    /// Returns the age group the goal was committed for, if any.
    ///
    pub fn age_group(&self) -> Option<AgeGroup> {
        self.age_group
    }

    /// Returns whether a goal has been committed.
    ///
    pub fn has_goal(&self) -> bool {
        self.goal > 0
    }

    /// Returns the running intake total in millilitres.
    ///
    pub fn total_intake(&self) -> u32 {
        self.total_intake
    }

    /// Returns how many intake entries have been logged.
    ///
    pub fn entry_count(&self) -> u32 {
        self.entry_count
    }

    /// Returns the tip pool.
    ///
    pub fn tips(&self) -> &[String] {
        &self.tips
    }

    /// Commits a validated goal together with the age group it belongs to.
    ///
    pub fn set_goal(&mut self, age_group: AgeGroup, goal: u32) -> &mut Self {
        self.goal = goal;
        self.age_group = Some(age_group);
        self
    }

    /// Adds an intake amount and returns the new running total.
    ///
    /// The total saturates at `u32::MAX` instead of overflowing.
    ///
    pub fn add_intake(&mut self, amount: u32) -> u32 {
        self.total_intake = self.total_intake.saturating_add(amount);
        self.entry_count = self.entry_count.saturating_add(1);
        self.total_intake
    }

    /// Clears the intake total while keeping the goal and age group.
    ///
    pub fn reset_intake(&mut self) -> &mut Self {
        self.total_intake = 0;
        self.entry_count = 0;
        self
    }

    /// Resets the session for a fresh run according to the restart policy.
    ///
    pub fn restart(&mut self, policy: RestartPolicy) -> &mut Self {
        self.reset_intake();
        if policy == RestartPolicy::ClearAll {
            self.goal = 0;
            self.age_group = None;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hydration::default_tips;

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new(default_tips());
        assert_eq!(session.goal(), 0);
        assert_eq!(session.age_group(), None);
        assert_eq!(session.total_intake(), 0);
        assert_eq!(session.entry_count(), 0);
        assert!(!session.has_goal());
        assert!(!session.tips().is_empty());
    }

    #[test]
    fn test_add_intake_accumulates() {
        let mut session = Session::new(vec![]);
        assert_eq!(session.add_intake(250), 250);
        assert_eq!(session.add_intake(330), 580);
        assert_eq!(session.total_intake(), 580);
        assert_eq!(session.entry_count(), 2);
    }

    #[test]
    fn test_add_intake_saturates() {
        let mut session = Session::new(vec![]);
        session.add_intake(u32::MAX - 10);
        assert_eq!(session.add_intake(500), u32::MAX);
    }

    #[test]
    fn test_reset_intake_keeps_goal() {
        let mut session = Session::new(vec![]);
        session.set_goal(AgeGroup::Adults, 2500);
        session.add_intake(750);
        session.reset_intake();
        assert_eq!(session.total_intake(), 0);
        assert_eq!(session.entry_count(), 0);
        assert_eq!(session.goal(), 2500);
        assert_eq!(session.age_group(), Some(AgeGroup::Adults));
    }

    #[test]
    fn test_restart_keep_goal() {
        let mut session = Session::new(vec![]);
        session.set_goal(AgeGroup::Teens, 1700);
        session.add_intake(500);
        session.restart(RestartPolicy::KeepGoal);
        assert_eq!(session.total_intake(), 0);
        assert_eq!(session.goal(), 1700);
        assert!(session.has_goal());
    }

    #[test]
    fn test_restart_clear_all() {
        let mut session = Session::new(vec![]);
        session.set_goal(AgeGroup::Teens, 1700);
        session.add_intake(500);
        session.restart(RestartPolicy::ClearAll);
        assert_eq!(session.total_intake(), 0);
        assert_eq!(session.goal(), 0);
        assert_eq!(session.age_group(), None);
        assert!(!session.has_goal());
    }

    #[test]
    fn test_default_restart_policy() {
        assert_eq!(RestartPolicy::default(), RestartPolicy::KeepGoal);
    }
}
