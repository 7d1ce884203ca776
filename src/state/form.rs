//! Goal form state types.
//!
//! This module contains the staged goal selection. Edits made here never
//! touch the session directly: they only land through an explicit commit,
//! and backing out of the goal screen discards them.

use crate::hydration::AgeGroup;

/// Specifying the goal form fields.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GoalField {
    AgeGroup,
    Goal,
}

/// Staged goal selection.
///
#[derive(Debug, Clone)]
pub struct GoalForm {
    age_index: usize,
    value_input: String,
    active_field: GoalField,
}

impl Default for GoalForm {
    fn default() -> Self {
        Self {
            age_index: 0,
            value_input: String::new(),
            active_field: GoalField::AgeGroup,
        }
    }
}

/// Maximum number of digits accepted in the goal input.
const GOAL_INPUT_LIMIT: usize = 5;

impl GoalForm {
    /// Returns the currently selected age group.
    ///
    pub fn age_group(&self) -> AgeGroup {
        AgeGroup::ALL[self.age_index]
    }

    /// Returns the index of the selected age group.
    ///
    pub fn age_index(&self) -> usize {
        self.age_index
    }

    /// Returns the staged goal input as typed.
    ///
    pub fn value_input(&self) -> &str {
        &self.value_input
    }

    /// Returns the staged goal value, 0 if the input is empty.
    ///
    pub fn staged_value(&self) -> u32 {
        self.value_input.parse().unwrap_or(0)
    }

    /// Returns the field currently being edited.
    ///
    pub fn active_field(&self) -> GoalField {
        self.active_field
    }

    /// Resets the form from the committed session values.
    ///
    /// The committed age group is re-selected when present. A nonzero
    /// committed goal pre-fills the value, otherwise the recommended
    /// default of the selected age group does.
    ///
    pub fn prefill(&mut self, committed_goal: u32, committed_group: Option<AgeGroup>) -> &mut Self {
        self.age_index = committed_group
            .and_then(|group| AgeGroup::ALL.iter().position(|candidate| *candidate == group))
            .unwrap_or(AgeGroup::DEFAULT_INDEX);
        self.active_field = GoalField::AgeGroup;
        self.refill_value(committed_goal);
        self
    }

    /// Switches editing to the other form field.
    ///
    pub fn toggle_field(&mut self) -> &mut Self {
        self.active_field = match self.active_field {
            GoalField::AgeGroup => GoalField::Goal,
            GoalField::Goal => GoalField::AgeGroup,
        };
        self
    }

    /// Selects the next age group, wrapping around.
    ///
    pub fn next_age_group(&mut self, committed_goal: u32) -> &mut Self {
        self.age_index = (self.age_index + 1) % AgeGroup::ALL.len();
        self.refill_value(committed_goal);
        self
    }

    /// Selects the previous age group, wrapping around.
    ///
    pub fn previous_age_group(&mut self, committed_goal: u32) -> &mut Self {
        self.age_index = self
            .age_index
            .checked_sub(1)
            .unwrap_or(AgeGroup::ALL.len() - 1);
        self.refill_value(committed_goal);
        self
    }

    /// Appends a digit to the goal input.
    ///
    pub fn push_digit(&mut self, digit: char) -> &mut Self {
        if digit.is_ascii_digit() && self.value_input.len() < GOAL_INPUT_LIMIT {
            self.value_input.push(digit);
        }
        self
    }

    /// Removes the last digit from the goal input.
    ///
    pub fn pop_digit(&mut self) -> &mut Self {
        self.value_input.pop();
        self
    }

    fn refill_value(&mut self, committed_goal: u32) {
        let value = if committed_goal > 0 {
            committed_goal
        } else {
            self.age_group().recommended_goal()
        };
        self.value_input = value.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefill_without_committed_goal_uses_recommendation() {
        let mut form = GoalForm::default();
        form.prefill(0, None);
        assert_eq!(form.age_group(), AgeGroup::Adults);
        assert_eq!(form.value_input(), "2500");
        assert_eq!(form.staged_value(), 2500);
        assert_eq!(form.active_field(), GoalField::AgeGroup);
    }

    #[test]
    fn test_prefill_with_committed_goal_uses_committed_value() {
        let mut form = GoalForm::default();
        form.prefill(3100, Some(AgeGroup::Seniors));
        assert_eq!(form.age_group(), AgeGroup::Seniors);
        assert_eq!(form.value_input(), "3100");
    }

    #[test]
    fn test_cycling_age_group_refills_recommendation() {
        let mut form = GoalForm::default();
        form.prefill(0, None);
        form.next_age_group(0);
        assert_eq!(form.age_group(), AgeGroup::Seniors);
        assert_eq!(form.value_input(), "2000");
        form.next_age_group(0);
        assert_eq!(form.age_group(), AgeGroup::Children);
        assert_eq!(form.value_input(), "1200");
    }

    #[test]
    fn test_cycling_age_group_keeps_committed_goal() {
        let mut form = GoalForm::default();
        form.prefill(2200, Some(AgeGroup::Adults));
        form.next_age_group(2200);
        assert_eq!(form.age_group(), AgeGroup::Seniors);
        assert_eq!(form.value_input(), "2200");
    }

    #[test]
    fn test_previous_age_group_wraps() {
        let mut form = GoalForm::default();
        form.prefill(0, Some(AgeGroup::Children));
        form.previous_age_group(0);
        assert_eq!(form.age_group(), AgeGroup::Seniors);
    }

    #[test]
    fn test_toggle_field() {
        let mut form = GoalForm::default();
        assert_eq!(form.active_field(), GoalField::AgeGroup);
        form.toggle_field();
        assert_eq!(form.active_field(), GoalField::Goal);
        form.toggle_field();
        assert_eq!(form.active_field(), GoalField::AgeGroup);
    }

    #[test]
    fn test_push_digit_caps_length_and_rejects_non_digits() {
        let mut form = GoalForm::default();
        for digit in ['9', '9', '9', '9', '9', '9', '9'] {
            form.push_digit(digit);
        }
        assert_eq!(form.value_input(), "99999");
        form.pop_digit();
        form.push_digit('a');
        form.push_digit('.');
        assert_eq!(form.value_input(), "9999");
    }
}
