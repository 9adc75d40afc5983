//! Hangman screen rendering - no game logic here
use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::games::hangman::game::{HangmanGame, GRID_COLUMNS};
use crate::games::hangman::state::{GameState, Status, MAX_GUESSES};

pub struct HangmanRenderer;

impl HangmanRenderer {
    pub fn render<R: Rng>(frame: &mut Frame, game: &HangmanGame<R>) {
        let state = game.state();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        frame.render_widget(
            Paragraph::new(" GUESS THE WORD ")
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[0],
        );

        let body = chunks[1];
        // Side by side when there is room, stacked otherwise.
        let wide = body.width >= body.height.saturating_mul(2);
        let panes = if wide {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(body)
        } else {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(7)])
                .split(body)
        };

        Self::render_board(frame, panes[0], state, game.notice());
        Self::render_letters(frame, panes[1], state, game.cursor_letter());

        frame.render_widget(
            Paragraph::new("[A-Z] Guess  [←↑↓→ Enter] Pick  [?] Hint  [!] New game  [Esc] Quit")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center),
            chunks[2],
        );
    }

    fn render_board(frame: &mut Frame, area: Rect, state: &GameState, notice: Option<&str>) {
        let figure_color = if state.remaining_guesses() < MAX_GUESSES {
            Color::Red
        } else {
            Color::White
        };
        let mut lines: Vec<Line> = gallows(state.remaining_guesses())
            .into_iter()
            .map(|l| Line::styled(format!("{:<9}", l), Style::default().fg(figure_color)))
            .collect();

        lines.push(Line::default());
        lines.push(Line::styled(
            format!("Word: {}", spaced(&state.revealed_pattern())),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(format!(
            "Guesses Remaining: {}",
            state.remaining_guesses()
        )));
        lines.push(Line::from(format!("Hints Used: {}", state.hints_used())));
        lines.push(Line::default());

        if let Some(banner) = banner(state) {
            lines.push(Line::styled(
                banner,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }
        if let Some(text) = notice {
            lines.push(Line::styled(text.to_string(), Style::default().fg(Color::Yellow)));
        }

        frame.render_widget(
            Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            area,
        );
    }

    fn render_letters(frame: &mut Frame, area: Rect, state: &GameState, cursor: char) {
        let letters: Vec<char> = ('A'..='Z').collect();
        let lines: Vec<Line> = letters
            .chunks(GRID_COLUMNS)
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|&c| {
                        let mut style = if state.is_over() || state.is_guessed(c) {
                            Style::default().fg(Color::DarkGray)
                        } else {
                            Style::default().fg(Color::Cyan)
                        };
                        if c == cursor && !state.is_over() {
                            style = style.add_modifier(Modifier::REVERSED);
                        }
                        Span::styled(format!(" {} ", c), style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(
            Paragraph::new(lines)
                .block(Block::default().title(" LETTERS ").borders(Borders::ALL))
                .alignment(Alignment::Center),
            area,
        );
    }
}

/// ASCII gallows; one body part per guess lost.
pub fn gallows(remaining: u8) -> Vec<String> {
    let lost = MAX_GUESSES.saturating_sub(remaining);
    let part = |n: u8, c: char| if lost >= n { c } else { ' ' };
    vec![
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {}   |", part(1, 'O')),
        format!(" {}{}{}  |", part(3, '/'), part(2, '|'), part(4, '\\')),
        format!(" {} {}  |", part(5, '/'), part(6, '\\')),
        "      |".to_string(),
        "=========".to_string(),
    ]
}

fn banner(state: &GameState) -> Option<String> {
    match state.status() {
        Status::Playing => None,
        Status::Won => Some("You Won! Congratulations!".to_string()),
        Status::Lost => Some(format!(
            "You Lost! The word was {}.",
            state.secret_word().unwrap_or_default()
        )),
    }
}

fn spaced(pattern: &str) -> String {
    pattern
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}
