//! Hydration tips and tip selection strategies.
//!
//! The tip shown on the Home screen is re-picked on every visit. The
//! random source sits behind the `TipPicker` trait so tests can swap in
//! a deterministic strategy.

use rand::seq::SliceRandom;

/// Built-in tip list, used when the configuration does not override it.
///
const DEFAULT_TIPS: [&str; 8] = [
    "Start your day with a glass of water before anything else.",
    "Keep a filled bottle within arm's reach while you work.",
    "Drink a glass of water with every meal and snack.",
    "Feeling hungry? It might be thirst in disguise.",
    "Add a slice of lemon or cucumber if plain water bores you.",
    "Drink before you feel thirsty; thirst lags behind need.",
    "Have a glass of water before and after exercise.",
    "Swap one sugary drink a day for water.",
];

/// Returns the built-in tip list in its fixed order.
///
pub fn default_tips() -> Vec<String> {
    DEFAULT_TIPS.iter().map(|tip| tip.to_string()).collect()
}

/// Strategy for choosing the tip shown on the Home screen.
///
pub trait TipPicker: Send {
    /// Pick one tip from the list, or None when the list is empty.
    fn pick(&mut self, tips: &[String]) -> Option<String>;
}

/// Picks uniformly at random. This is the picker the application runs with.
///
#[derive(Default)]
pub struct RandomTipPicker;

impl TipPicker for RandomTipPicker {
    fn pick(&mut self, tips: &[String]) -> Option<String> {
        tips.choose(&mut rand::thread_rng()).cloned()
    }
}

/// Walks the list in order, wrapping around. Deterministic replacement for
/// `RandomTipPicker` in tests.
///
#[derive(Default)]
#[allow(dead_code)]
pub struct SequentialTipPicker {
    next: usize,
}

impl TipPicker for SequentialTipPicker {
    fn pick(&mut self, tips: &[String]) -> Option<String> {
        if tips.is_empty() {
            return None;
        }
        let tip = tips[self.next % tips.len()].clone();
        self.next = (self.next + 1) % tips.len();
        Some(tip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tips_not_empty() {
        assert!(!default_tips().is_empty());
    }

    #[test]
    fn test_random_picker_returns_member_of_list() {
        let tips = default_tips();
        let mut picker = RandomTipPicker;
        for _ in 0..20 {
            let tip = picker.pick(&tips).unwrap();
            assert!(tips.contains(&tip));
        }
    }

    #[test]
    fn test_random_picker_handles_empty_list() {
        let mut picker = RandomTipPicker;
        assert_eq!(picker.pick(&[]), None);
    }

    #[test]
    fn test_sequential_picker_walks_in_order() {
        let tips = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let mut picker = SequentialTipPicker::default();
        assert_eq!(picker.pick(&tips).as_deref(), Some("a"));
        assert_eq!(picker.pick(&tips).as_deref(), Some("b"));
        assert_eq!(picker.pick(&tips).as_deref(), Some("c"));
        assert_eq!(picker.pick(&tips).as_deref(), Some("a"));
    }
}
