//! Hangman round state.
//!
//! `GameState` is the only thing that changes while playing. The presentation
//! layer reads it and forwards player intents into `reset`, `guess_letter` and
//! `use_hint`; nothing else mutates it.

use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::hints::{HintEffect, HintTier};

/// Words a round can be played with.
pub const WORDS: [&str; 4] = ["ANDROID", "KOTLIN", "COMPOSE", "DEVELOPER"];

/// Guesses available at the start of a round.
pub const MAX_GUESSES: u8 = 6;

/// Marks a position of the word that is still hidden.
pub const PLACEHOLDER: char = '_';

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

/// Result of [`GameState::guess_letter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter is in the word; `revealed` positions were newly disclosed
    Correct { letter: char, revealed: usize },
    /// The letter is not in the word and cost one guess
    Wrong { letter: char },
    /// The letter was guessed before; nothing changed
    AlreadyGuessed { letter: char },
    /// Not a letter A-Z; nothing changed
    Invalid { input: char },
    /// The round is over; nothing changed
    GameOver,
}

/// Result of [`GameState::use_hint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintOutcome {
    /// A hint was consumed, costing one guess
    Applied(HintEffect),
    /// Too few guesses left to pay for a hint; nothing changed
    Unavailable,
    /// The round is over; nothing changed
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedState")]
pub struct GameState {
    secret_word: String,
    revealed: Vec<char>,
    guessed: BTreeSet<char>,
    remaining_guesses: u8,
    hints_used: u8,
    over: bool,
}

/// Snapshot as read back from storage, before its invariants are checked.
/// `over` is always recomputed, so it is not read.
#[derive(Deserialize)]
struct SavedState {
    secret_word: String,
    revealed: Vec<char>,
    guessed: BTreeSet<char>,
    remaining_guesses: u8,
    hints_used: u8,
}

impl TryFrom<SavedState> for GameState {
    type Error = String;

    fn try_from(saved: SavedState) -> Result<Self, Self::Error> {
        let word: Vec<char> = saved.secret_word.chars().collect();
        if word.is_empty() || !word.iter().all(|c| c.is_ascii_uppercase()) {
            return Err(format!("invalid secret word '{}'", saved.secret_word));
        }
        if saved.revealed.len() != word.len() {
            return Err(format!(
                "revealed pattern has {} positions, word has {}",
                saved.revealed.len(),
                word.len()
            ));
        }
        if let Some(pos) = saved
            .revealed
            .iter()
            .zip(&word)
            .position(|(&shown, &actual)| shown != PLACEHOLDER && shown != actual)
        {
            return Err(format!("revealed pattern disagrees with word at position {}", pos));
        }
        if let Some(c) = saved.guessed.iter().find(|c| !c.is_ascii_uppercase()) {
            return Err(format!("invalid guessed letter '{}'", c));
        }
        if saved.remaining_guesses > MAX_GUESSES {
            return Err(format!(
                "remaining guesses {} exceeds {}",
                saved.remaining_guesses, MAX_GUESSES
            ));
        }

        let mut state = Self {
            secret_word: saved.secret_word,
            revealed: saved.revealed,
            guessed: saved.guessed,
            remaining_guesses: saved.remaining_guesses,
            hints_used: saved.hints_used,
            over: false,
        };
        state.refresh_over();
        Ok(state)
    }
}

impl GameState {
    /// Start a fresh round with a word drawn from `rng`.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut state = Self::fresh(WORDS[0]);
        state.reset(rng);
        state
    }

    /// Start a round with a fixed secret word.
    ///
    /// Returns `None` unless the word is non-empty and made only of ASCII
    /// letters.
    pub fn with_word(word: &str) -> Option<Self> {
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        Some(Self::fresh(&word.to_ascii_uppercase()))
    }

    fn fresh(word: &str) -> Self {
        Self {
            secret_word: word.to_string(),
            revealed: vec![PLACEHOLDER; word.chars().count()],
            guessed: BTreeSet::new(),
            remaining_guesses: MAX_GUESSES,
            hints_used: 0,
            over: false,
        }
    }

    /// Throw away the current round and start another with a random word.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        let word = WORDS[rng.random_range(0..WORDS.len())];
        *self = Self::fresh(word);
        debug!(len = word.len(), "new round");
    }

    pub fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        if self.over {
            return GuessOutcome::GameOver;
        }

        let letter = letter.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return GuessOutcome::Invalid { input: letter };
        }
        if !self.guessed.insert(letter) {
            return GuessOutcome::AlreadyGuessed { letter };
        }

        let outcome = if self.secret_word.contains(letter) {
            let revealed = self.reveal(|c| c == letter);
            GuessOutcome::Correct { letter, revealed }
        } else {
            self.remaining_guesses = self.remaining_guesses.saturating_sub(1);
            GuessOutcome::Wrong { letter }
        };

        self.refresh_over();
        debug!(?outcome, remaining = self.remaining_guesses, "guess");
        outcome
    }

    pub fn use_hint(&mut self) -> HintOutcome {
        if self.over {
            return HintOutcome::GameOver;
        }
        // The last guess can never be spent on a hint.
        if self.remaining_guesses <= 1 {
            return HintOutcome::Unavailable;
        }

        let effect = match HintTier::for_index(self.hints_used) {
            Some(tier) => tier.apply(self),
            None => HintEffect::Exhausted,
        };

        self.hints_used = self.hints_used.saturating_add(1);
        self.remaining_guesses = self.remaining_guesses.saturating_sub(1);
        self.refresh_over();
        debug!(?effect, hints_used = self.hints_used, "hint");
        HintOutcome::Applied(effect)
    }

    /// Disclose every position whose letter matches `pred`, returning how many
    /// were hidden before.
    pub(crate) fn reveal(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        for (actual, shown) in self.secret_word.chars().zip(self.revealed.iter_mut()) {
            if pred(actual) && *shown == PLACEHOLDER {
                *shown = actual;
                count += 1;
            }
        }
        count
    }

    /// Mark letters as used without revealing anything.
    pub(crate) fn eliminate(&mut self, letters: &[char]) {
        self.guessed.extend(letters.iter().copied());
    }

    pub(crate) fn word_contains(&self, letter: char) -> bool {
        self.secret_word.contains(letter)
    }

    fn refresh_over(&mut self) {
        self.over = self.remaining_guesses == 0 || self.is_fully_revealed();
    }

    fn is_fully_revealed(&self) -> bool {
        !self.revealed.contains(&PLACEHOLDER)
    }

    pub fn status(&self) -> Status {
        if !self.over {
            Status::Playing
        } else if self.is_fully_revealed() {
            Status::Won
        } else {
            Status::Lost
        }
    }

    pub fn revealed_pattern(&self) -> String {
        self.revealed.iter().collect()
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    pub fn is_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    pub fn remaining_guesses(&self) -> u8 {
        self.remaining_guesses
    }

    pub fn hints_used(&self) -> u8 {
        self.hints_used
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// The secret word, once the player has lost and it may be shown.
    pub fn secret_word(&self) -> Option<&str> {
        (self.status() == Status::Lost).then_some(self.secret_word.as_str())
    }
}
