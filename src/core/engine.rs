use crate::core::game::Game;
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Idle poll interval for games without a tick
const IDLE_POLL: Duration = Duration::from_millis(16);

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Run until the player quits, then hand the game back.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<G> {
        let mut last_tick = Instant::now();
        info!("engine started");

        loop {
            terminal
                .draw(|f| self.game.render(f))
                .context("failed to draw frame")?;

            let tick_rate = self.game.tick_rate();
            let timeout = tick_rate
                .map(|rate| rate.saturating_sub(last_tick.elapsed()))
                .unwrap_or(IDLE_POLL);

            // INPUT
            if event::poll(timeout).context("failed to poll terminal events")? {
                if let Event::Key(key) = event::read().context("failed to read terminal event")? {
                    if key.kind == KeyEventKind::Press {
                        if is_quit(&key) {
                            debug!("quit requested");
                            break;
                        }
                        self.game.handle_input(key);
                    }
                }
            }

            // TICK
            if let Some(rate) = tick_rate {
                if last_tick.elapsed() >= rate {
                    let dt = elapsed_ms(last_tick.elapsed());
                    last_tick = Instant::now();
                    self.game.on_tick(dt);
                }
            }
        }

        info!("engine stopped");
        Ok(self.game)
    }
}

/// Milliseconds in `elapsed`, saturating at `u32::MAX`
fn elapsed_ms(elapsed: Duration) -> u32 {
    u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX)
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_keys() {
        assert!(is_quit(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_quit(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn test_elapsed_ms_saturates() {
        assert_eq!(elapsed_ms(Duration::from_millis(250)), 250);
        assert_eq!(elapsed_ms(Duration::from_secs(u64::from(u32::MAX))), u32::MAX);
    }
}
