//! Hydration-specific error types.

/// Errors that can occur when validating hydration inputs.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HydrationError {
    /// Proposed daily goal lies outside the accepted bounds
    #[error("Goal of {value} ml is out of range ({min}-{max} ml)")]
    GoalOutOfRange { value: u32, min: u32, max: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_out_of_range_display() {
        let error = HydrationError::GoalOutOfRange {
            value: 9000,
            min: 500,
            max: 5000,
        };
        assert!(error.to_string().contains("9000"));
        assert!(error.to_string().contains("500"));
        assert!(error.to_string().contains("5000"));
    }
}
