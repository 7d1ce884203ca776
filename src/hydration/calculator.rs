//! Progress calculation and reaction tiers.
//!
//! Everything in this module is a pure function of (goal, total intake):
//! no side effects, no failure conditions, safe to call any number of
//! times per render.

use serde::{Deserialize, Serialize};

/// Derived progress figures for the current session. Never stored;
/// recomputed from the session on every read.
///
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ProgressSnapshot {
    /// Millilitres still to drink, floored at zero.
    pub remaining: u32,
    /// Progress towards the goal as a percentage, capped at 100.
    pub percent: f64,
}

impl ProgressSnapshot {
    /// Returns true once the daily goal has been reached.
    ///
    pub fn is_goal_met(&self) -> bool {
        self.percent >= 100.0
    }
}

/// Specifying the mascot reaction tiers.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ReactionTier {
    Thirsty,
    Hopeful,
    Cheering,
    Celebrating,
}

impl ReactionTier {
    /// Returns the display name of the tier.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            ReactionTier::Thirsty => "Thirsty",
            ReactionTier::Hopeful => "Hopeful",
            ReactionTier::Cheering => "Cheering",
            ReactionTier::Celebrating => "Celebrating",
        }
    }
}

/// Specifying the selectable reaction threshold policies.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReactionPolicy {
    /// Thirsty at zero, Hopeful below 50%, Cheering from 50% and
    /// Celebrating once the goal is reached.
    Classic,
    /// Stricter bands: Cheering only starts at 75% and anything below
    /// 50% stays Thirsty.
    Motivation,
}

impl Default for ReactionPolicy {
    fn default() -> Self {
        ReactionPolicy::Classic
    }
}

impl ReactionPolicy {
    /// Map a progress percentage to a reaction tier under this policy.
    ///
    pub fn tier(&self, percent: f64) -> ReactionTier {
        match self {
            ReactionPolicy::Classic => {
                if percent >= 100.0 {
                    ReactionTier::Celebrating
                } else if percent >= 50.0 {
                    ReactionTier::Cheering
                } else if percent > 0.0 {
                    ReactionTier::Hopeful
                } else {
                    ReactionTier::Thirsty
                }
            }
            ReactionPolicy::Motivation => {
                if percent >= 100.0 {
                    ReactionTier::Celebrating
                } else if percent >= 75.0 {
                    ReactionTier::Cheering
                } else if percent >= 50.0 {
                    ReactionTier::Hopeful
                } else {
                    ReactionTier::Thirsty
                }
            }
        }
    }
}

/// Derive the progress snapshot for a goal and cumulative intake, both in
/// millilitres. A goal of zero means "unset" and always reads as 0%.
///
pub fn assess(goal: u32, total_intake: u32) -> ProgressSnapshot {
    let remaining = goal.saturating_sub(total_intake);
    let percent = if goal == 0 {
        0.0
    } else {
        (f64::from(total_intake) / f64::from(goal) * 100.0).min(100.0)
    };
    ProgressSnapshot { remaining, percent }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::Fake;

    #[test]
    fn test_fresh_session_is_thirsty() {
        let snapshot = assess(2500, 0);
        assert_eq!(snapshot.remaining, 2500);
        assert_eq!(snapshot.percent, 0.0);
        assert_eq!(ReactionPolicy::Classic.tier(snapshot.percent), ReactionTier::Thirsty);
    }

    #[test]
    fn test_half_way_is_cheering_under_classic() {
        // 50% exactly belongs to Cheering, not Hopeful.
        let snapshot = assess(2000, 1000);
        assert_eq!(snapshot.remaining, 1000);
        assert_eq!(snapshot.percent, 50.0);
        assert_eq!(ReactionPolicy::Classic.tier(snapshot.percent), ReactionTier::Cheering);
    }

    #[test]
    fn test_overflow_caps_at_one_hundred_percent() {
        let snapshot = assess(1200, 1500);
        assert_eq!(snapshot.remaining, 0);
        assert_eq!(snapshot.percent, 100.0);
        assert_eq!(
            ReactionPolicy::Classic.tier(snapshot.percent),
            ReactionTier::Celebrating
        );
        assert!(snapshot.is_goal_met());
    }

    #[test]
    fn test_unset_goal_reads_as_zero_percent() {
        assert_eq!(assess(0, 0).percent, 0.0);
        assert_eq!(assess(0, 3000).percent, 0.0);
        assert_eq!(assess(0, 3000).remaining, 0);
    }

    #[test]
    fn test_small_progress_is_hopeful_under_classic() {
        let snapshot = assess(2500, 250);
        assert_eq!(snapshot.percent, 10.0);
        assert_eq!(ReactionPolicy::Classic.tier(snapshot.percent), ReactionTier::Hopeful);
    }

    #[test]
    fn test_exact_goal_is_celebrating() {
        let snapshot = assess(1700, 1700);
        assert_eq!(snapshot.remaining, 0);
        assert_eq!(snapshot.percent, 100.0);
        assert_eq!(
            ReactionPolicy::Classic.tier(snapshot.percent),
            ReactionTier::Celebrating
        );
    }

    #[test]
    fn test_motivation_policy_bands() {
        assert_eq!(ReactionPolicy::Motivation.tier(0.0), ReactionTier::Thirsty);
        assert_eq!(ReactionPolicy::Motivation.tier(49.0), ReactionTier::Thirsty);
        assert_eq!(ReactionPolicy::Motivation.tier(50.0), ReactionTier::Hopeful);
        assert_eq!(ReactionPolicy::Motivation.tier(74.9), ReactionTier::Hopeful);
        assert_eq!(ReactionPolicy::Motivation.tier(75.0), ReactionTier::Cheering);
        assert_eq!(ReactionPolicy::Motivation.tier(99.9), ReactionTier::Cheering);
        assert_eq!(ReactionPolicy::Motivation.tier(100.0), ReactionTier::Celebrating);
    }

    #[test]
    fn test_policies_disagree_where_their_bands_differ() {
        // 25%: Hopeful classically, still Thirsty under motivation bands.
        assert_eq!(ReactionPolicy::Classic.tier(25.0), ReactionTier::Hopeful);
        assert_eq!(ReactionPolicy::Motivation.tier(25.0), ReactionTier::Thirsty);
        // 60%: Cheering classically, only Hopeful under motivation bands.
        assert_eq!(ReactionPolicy::Classic.tier(60.0), ReactionTier::Cheering);
        assert_eq!(ReactionPolicy::Motivation.tier(60.0), ReactionTier::Hopeful);
    }

    #[test]
    fn test_assess_is_idempotent() {
        let first = assess(2500, 1250);
        let second = assess(2500, 1250);
        assert_eq!(first, second);
    }

    #[test]
    fn test_snapshot_invariants_hold_for_sampled_inputs() {
        for _ in 0..200 {
            let goal: u32 = (0..6000).fake();
            let total: u32 = (0..12000).fake();
            let snapshot = assess(goal, total);
            assert_eq!(snapshot.remaining, goal.saturating_sub(total));
            assert!(snapshot.percent >= 0.0);
            assert!(snapshot.percent <= 100.0);
            if goal == 0 {
                assert_eq!(snapshot.percent, 0.0);
            } else if total >= goal {
                assert_eq!(snapshot.percent, 100.0);
            }
        }
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(ReactionTier::Thirsty.label(), "Thirsty");
        assert_eq!(ReactionTier::Celebrating.label(), "Celebrating");
    }
}
