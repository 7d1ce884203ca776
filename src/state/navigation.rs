//! Navigation-related state types.
//!
//! This module contains the screen identifiers and the ordered screen
//! sequences the application can run with. The sequence is picked by
//! configuration, not hardcoded: the full flow gives each step its own
//! screen while the compact flow folds intake logging, progress and the
//! mascot into a single tracker screen.

use serde::{Deserialize, Serialize};

/// Specifying the different screens.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Screen {
    Home,
    Goals,
    LogIntake,
    Progress,
    Mascot,
    Summary,
    /// Combined log/progress/mascot screen used by the compact flow.
    Tracker,
}

impl Screen {
    /// Returns the screen title shown in the block border.
    ///
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Goals => "Set Your Hydration Goal",
            Screen::LogIntake => "Log Intake",
            Screen::Progress => "Progress",
            Screen::Mascot => "Mascot",
            Screen::Summary => "Daily Summary",
            Screen::Tracker => "Tracker",
        }
    }
}

/// Specifying the selectable screen sequences.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenFlow {
    Full,
    Compact,
}

impl Default for ScreenFlow {
    fn default() -> Self {
        ScreenFlow::Full
    }
}

const FULL_SEQUENCE: [Screen; 6] = [
    Screen::Home,
    Screen::Goals,
    Screen::LogIntake,
    Screen::Progress,
    Screen::Mascot,
    Screen::Summary,
];

const COMPACT_SEQUENCE: [Screen; 4] = [
    Screen::Home,
    Screen::Goals,
    Screen::Tracker,
    Screen::Summary,
];

impl ScreenFlow {
    /// Returns the ordered screen sequence for this flow.
    ///
    pub fn screens(&self) -> &'static [Screen] {
        match self {
            ScreenFlow::Full => &FULL_SEQUENCE,
            ScreenFlow::Compact => &COMPACT_SEQUENCE,
        }
    }

    /// Returns the index of the last screen in the sequence.
    ///
    pub fn last_index(&self) -> usize {
        self.screens().len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_flow_order() {
        let screens = ScreenFlow::Full.screens();
        assert_eq!(screens.len(), 6);
        assert_eq!(screens[0], Screen::Home);
        assert_eq!(screens[1], Screen::Goals);
        assert_eq!(screens[2], Screen::LogIntake);
        assert_eq!(screens[3], Screen::Progress);
        assert_eq!(screens[4], Screen::Mascot);
        assert_eq!(screens[5], Screen::Summary);
    }

    #[test]
    fn test_compact_flow_order() {
        let screens = ScreenFlow::Compact.screens();
        assert_eq!(screens.len(), 4);
        assert_eq!(screens[0], Screen::Home);
        assert_eq!(screens[1], Screen::Goals);
        assert_eq!(screens[2], Screen::Tracker);
        assert_eq!(screens[3], Screen::Summary);
    }

    #[test]
    fn test_both_flows_start_at_home_and_end_at_summary() {
        for flow in [ScreenFlow::Full, ScreenFlow::Compact] {
            let screens = flow.screens();
            assert_eq!(screens[0], Screen::Home);
            assert_eq!(screens[flow.last_index()], Screen::Summary);
        }
    }

    #[test]
    fn test_default_flow_is_full() {
        assert_eq!(ScreenFlow::default(), ScreenFlow::Full);
    }

    #[test]
    fn test_screen_titles() {
        assert_eq!(Screen::Home.title(), "Home");
        assert_eq!(Screen::Goals.title(), "Set Your Hydration Goal");
        assert_eq!(Screen::Tracker.title(), "Tracker");
    }
}
