//! Core game interface for terminal games
use crossterm::event::KeyEvent;
use std::time::Duration;

/// Main game trait driven by the [`Engine`](crate::core::engine::Engine) loop.
///
/// Games own their state; the engine only forwards key presses and ticks and
/// asks for a frame.
pub trait Game {
    /// How often `on_tick` should fire, or `None` if the game does not tick
    fn tick_rate(&self) -> Option<Duration> {
        None
    }

    /// Called once per tick with the milliseconds elapsed since the last one
    fn on_tick(&mut self, _dt: u32) {}

    /// Handle a key press. Quit keys never reach the game.
    fn handle_input(&mut self, event: KeyEvent);

    /// Render the current state into the Ratatui Frame
    fn render(&self, frame: &mut ratatui::Frame);
}
