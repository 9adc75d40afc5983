use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::info;

use crate::core::game::Game;
use crate::games::hangman::renderer::HangmanRenderer;
use crate::games::hangman::state::{GameState, GuessOutcome, HintOutcome, Status};

/// Letters per row in the on-screen letter grid
pub const GRID_COLUMNS: usize = 6;

/// How long a notice stays on screen
const NOTICE_TTL_MS: u32 = 2000;

const TICK_RATE: Duration = Duration::from_millis(250);

/// A short-lived message line, e.g. the text of a hint
#[derive(Debug, Clone, PartialEq, Eq)]
struct Notice {
    text: String,
    ttl_ms: u32,
}

/// Hangman controller: owns the round state and maps key presses onto it
pub struct HangmanGame<R: Rng = StdRng> {
    state: GameState,
    rng: R,
    notice: Option<Notice>,
    cursor: usize,
}

impl<R: Rng> HangmanGame<R> {
    pub fn new(mut rng: R) -> Self {
        let state = GameState::new(&mut rng);
        info!("round started");
        Self {
            state,
            rng,
            notice: None,
            cursor: 0,
        }
    }

    /// Resume from an existing round, e.g. one restored from a snapshot
    pub fn with_state(state: GameState, rng: R) -> Self {
        Self {
            state,
            rng,
            notice: None,
            cursor: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|n| n.text.as_str())
    }

    /// Letter currently under the grid cursor
    pub fn cursor_letter(&self) -> char {
        char::from(b'A' + self.cursor as u8)
    }

    pub fn new_round(&mut self) {
        self.state.reset(&mut self.rng);
        self.notice = None;
        self.cursor = 0;
        info!("round started");
    }

    pub fn guess(&mut self, letter: char) {
        // Used letters are disabled in the grid.
        if self.state.is_guessed(letter.to_ascii_uppercase()) {
            return;
        }
        if let GuessOutcome::Correct { .. } | GuessOutcome::Wrong { .. } =
            self.state.guess_letter(letter)
        {
            self.log_result();
        }
    }

    pub fn hint(&mut self) {
        match self.state.use_hint() {
            HintOutcome::Applied(effect) => {
                self.show(effect.describe());
                self.log_result();
            }
            HintOutcome::Unavailable => self.show("Hint not available".to_string()),
            HintOutcome::GameOver => {}
        }
    }

    fn show(&mut self, text: String) {
        self.notice = Some(Notice {
            text,
            ttl_ms: NOTICE_TTL_MS,
        });
    }

    fn log_result(&self) {
        match self.state.status() {
            Status::Playing => {}
            Status::Won => info!(hints = self.state.hints_used(), "round won"),
            Status::Lost => info!("round lost"),
        }
    }

    fn move_cursor(&mut self, code: KeyCode) {
        let last = 25;
        self.cursor = match code {
            KeyCode::Left => self.cursor.saturating_sub(1),
            KeyCode::Right => (self.cursor + 1).min(last),
            KeyCode::Up => self.cursor.saturating_sub(GRID_COLUMNS),
            KeyCode::Down if self.cursor + GRID_COLUMNS <= last => self.cursor + GRID_COLUMNS,
            _ => self.cursor,
        };
    }
}

impl<R: Rng> Game for HangmanGame<R> {
    fn tick_rate(&self) -> Option<Duration> {
        Some(TICK_RATE)
    }

    fn on_tick(&mut self, dt: u32) {
        if let Some(notice) = &mut self.notice {
            notice.ttl_ms = notice.ttl_ms.saturating_sub(dt);
            if notice.ttl_ms == 0 {
                self.notice = None;
            }
        }
    }

    fn handle_input(&mut self, event: KeyEvent) {
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return;
        }
        match event.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.guess(c),
            KeyCode::Char('?') => self.hint(),
            KeyCode::Char('!') => self.new_round(),
            KeyCode::Enter => self.guess(self.cursor_letter()),
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.move_cursor(event.code)
            }
            _ => {}
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        HangmanRenderer::render(frame, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn kotlin_game() -> HangmanGame {
        HangmanGame::with_state(
            GameState::with_word("KOTLIN").unwrap(),
            StdRng::seed_from_u64(1),
        )
    }

    #[test]
    fn test_typed_letters_guess() {
        let mut game = kotlin_game();
        game.handle_input(press(KeyCode::Char('k')));
        game.handle_input(press(KeyCode::Char('Z')));

        assert_eq!(game.state().revealed_pattern(), "K_____");
        assert_eq!(game.state().remaining_guesses(), 5);
        assert!(game.state().is_guessed('K'));
        assert!(game.state().is_guessed('Z'));
    }

    #[test]
    fn test_disabled_letters_are_ignored() {
        let mut game = kotlin_game();
        game.handle_input(press(KeyCode::Char('z')));
        let before = game.state().clone();
        game.handle_input(press(KeyCode::Char('z')));
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_control_chords_are_ignored() {
        let mut game = kotlin_game();
        game.handle_input(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL));
        assert!(game.state().guessed_letters().is_empty());
    }

    #[test]
    fn test_cursor_navigation_and_enter() {
        let mut game = kotlin_game();
        assert_eq!(game.cursor_letter(), 'A');

        game.handle_input(press(KeyCode::Down));
        game.handle_input(press(KeyCode::Down));
        assert_eq!(game.cursor_letter(), 'M');

        game.handle_input(press(KeyCode::Left));
        game.handle_input(press(KeyCode::Left));
        assert_eq!(game.cursor_letter(), 'K');

        game.handle_input(press(KeyCode::Enter));
        assert_eq!(game.state().revealed_pattern(), "K_____");

        // Bottom row holds only Y and Z.
        for _ in 0..10 {
            game.handle_input(press(KeyCode::Down));
            game.handle_input(press(KeyCode::Right));
        }
        assert_eq!(game.cursor_letter(), 'Z');
        game.handle_input(press(KeyCode::Up));
        assert_eq!(game.cursor_letter(), 'T');
    }

    #[test]
    fn test_hint_shows_notice_then_expires() {
        let mut game = kotlin_game();
        game.handle_input(press(KeyCode::Char('?')));
        assert_eq!(game.notice(), Some("Hint: It's a programming-related term!"));
        assert_eq!(game.state().remaining_guesses(), 5);

        game.on_tick(1500);
        assert!(game.notice().is_some());
        game.on_tick(600);
        assert_eq!(game.notice(), None);
    }

    #[test]
    fn test_hint_unavailable_notice() {
        let mut game = kotlin_game();
        for c in ['a', 'b', 'c', 'd', 'e'] {
            game.handle_input(press(KeyCode::Char(c)));
        }
        game.handle_input(press(KeyCode::Char('?')));
        assert_eq!(game.notice(), Some("Hint not available"));
        assert_eq!(game.state().hints_used(), 0);
        assert_eq!(game.state().remaining_guesses(), 1);
    }

    #[test]
    fn test_new_round_resets() {
        let mut game = kotlin_game();
        for c in ['a', 'b', 'c', 'd', 'e', 'f'] {
            game.handle_input(press(KeyCode::Char(c)));
        }
        assert_eq!(game.state().status(), Status::Lost);

        game.handle_input(press(KeyCode::Char('!')));
        assert_eq!(game.state().status(), Status::Playing);
        assert_eq!(game.state().remaining_guesses(), 6);
        assert_eq!(game.state().hints_used(), 0);
        assert_eq!(game.cursor_letter(), 'A');
    }
}
