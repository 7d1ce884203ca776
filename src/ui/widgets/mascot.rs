//! Mascot art and animation frames.
//!
//! The mascot is a water droplet whose face follows the reaction tier. A
//! ripple line underneath is animated by cycling through [`FRAMES`] on every
//! tick.

use crate::hydration::ReactionTier;
use crate::ui::theme::Theme;
use ratatui::style::Color;

/// Ripple animation frames, advanced once per tick.
pub const FRAMES: [&str; 4] = [
    "~    ~    ~    ~    ~    ~",
    " ~    ~    ~    ~    ~    ",
    "  ~    ~    ~    ~    ~   ",
    "   ~    ~    ~    ~    ~  ",
];

const THIRSTY: &str = r#"
      .-.
     /   \
    /     \
   |  .  .  |
   |    ,   |
   |  ____  |
    \ \__/ /
     `----'
"#;

const HOPEFUL: &str = r#"
      .-.
     /   \
    /     \
   |  o  o  |
   |        |
   |  ----  |
    \      /
     `----'
"#;

const CHEERING: &str = r#"
      .-.
     /   \
    /     \
   |  ^  ^  |
   |        |
   |  \__/  |
    \      /
     `----'
"#;

const CELEBRATING: &str = r#"
  *   .-.   *
     /   \
    /     \
   |  ^  ^  | *
   |        |
 * |  \__/  |
    \      /
     `----'
"#;

/// Return the mascot art for the given reaction tier.
///
pub fn art(tier: ReactionTier) -> &'static str {
    match tier {
        ReactionTier::Thirsty => THIRSTY,
        ReactionTier::Hopeful => HOPEFUL,
        ReactionTier::Cheering => CHEERING,
        ReactionTier::Celebrating => CELEBRATING,
    }
}

/// Return the mascot line spoken for the given reaction tier.
///
pub fn message(tier: ReactionTier) -> &'static str {
    match tier {
        ReactionTier::Thirsty => "I'm parched... let's get sipping!",
        ReactionTier::Hopeful => "A good start, keep the water coming!",
        ReactionTier::Cheering => "Over halfway there, keep it up!",
        ReactionTier::Celebrating => "Goal reached, you're amazing!",
    }
}

/// Return the theme color associated with the given reaction tier.
///
pub fn tier_color(theme: &Theme, tier: ReactionTier) -> Color {
    match tier {
        ReactionTier::Thirsty => theme.warning.to_color(),
        ReactionTier::Hopeful => theme.info.to_color(),
        ReactionTier::Cheering => theme.secondary.to_color(),
        ReactionTier::Celebrating => theme.success.to_color(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tier_has_art_and_message() {
        for tier in [
            ReactionTier::Thirsty,
            ReactionTier::Hopeful,
            ReactionTier::Cheering,
            ReactionTier::Celebrating,
        ] {
            assert!(!art(tier).is_empty());
            assert!(!message(tier).is_empty());
        }
    }

    #[test]
    fn test_frames_are_equally_wide() {
        let width = FRAMES[0].len();
        for frame in FRAMES {
            assert_eq!(frame.len(), width);
        }
    }
}
