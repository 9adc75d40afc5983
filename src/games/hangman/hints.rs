//! Hint tiers.
//!
//! Hints escalate in a fixed order. The n-th hint request uses `HINT_TIERS[n]`;
//! once the list runs out a hint still costs a guess but does nothing.

use super::state::GameState;

/// Shown for the first hint of every round.
pub const CATEGORY_HINT: &str = "It's a programming-related term!";

pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintTier {
    /// Tell the player what kind of word it is
    Category,
    /// Rule out half of the letters that are not in the word
    Eliminate,
    /// Reveal every vowel in the word
    Vowels,
}

pub const HINT_TIERS: [HintTier; 3] = [HintTier::Category, HintTier::Eliminate, HintTier::Vowels];

/// What a consumed hint did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintEffect {
    Category(&'static str),
    /// Letters marked as used, in alphabetical order
    Eliminated(Vec<char>),
    /// Number of newly revealed positions
    VowelsRevealed(usize),
    Exhausted,
}

impl HintTier {
    pub fn for_index(hints_used: u8) -> Option<Self> {
        HINT_TIERS.get(usize::from(hints_used)).copied()
    }

    /// Apply this tier to `state`. The caller pays the guess.
    pub fn apply(self, state: &mut GameState) -> HintEffect {
        match self {
            HintTier::Category => HintEffect::Category(CATEGORY_HINT),
            HintTier::Eliminate => {
                let candidates: Vec<char> = ('A'..='Z')
                    .filter(|&c| !state.word_contains(c) && !state.is_guessed(c))
                    .collect();
                let eliminated = candidates[..candidates.len() / 2].to_vec();
                state.eliminate(&eliminated);
                HintEffect::Eliminated(eliminated)
            }
            // Vowels are revealed but not marked as guessed.
            HintTier::Vowels => HintEffect::VowelsRevealed(state.reveal(|c| VOWELS.contains(&c))),
        }
    }
}

impl HintEffect {
    /// Notice text for the player.
    pub fn describe(&self) -> String {
        match self {
            HintEffect::Category(text) => format!("Hint: {}", text),
            HintEffect::Eliminated(letters) if letters.is_empty() => {
                "Hint: no more letters to rule out".to_string()
            }
            HintEffect::Eliminated(letters) => {
                format!("Hint: ruled out {}", letters.iter().collect::<String>())
            }
            HintEffect::VowelsRevealed(0) => "Hint: no hidden vowels left".to_string(),
            HintEffect::VowelsRevealed(n) => format!("Hint: revealed {} vowel(s)", n),
            HintEffect::Exhausted => "No hints left".to_string(),
        }
    }
}
