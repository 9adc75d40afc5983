/// Hangman game module
pub mod game;
pub mod hints;
pub mod renderer;
pub mod state;

pub use game::HangmanGame;
pub use hints::{HintEffect, HintTier};
pub use renderer::HangmanRenderer;
pub use state::{GameState, GuessOutcome, HintOutcome, Status};
