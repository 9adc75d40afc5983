use anyhow::Result;
use clap::Parser;
use hangterm::cli::Cli;
use hangterm::games::hangman::HangmanGame;
use hangterm::Engine;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging()?;
    info!(seed = ?cli.seed, "starting hangterm");

    let game = HangmanGame::new(cli.rng());
    let terminal = ratatui::init();

    let result = Engine::new(game).run(terminal);

    ratatui::restore();
    let game = result?;
    info!(status = ?game.state().status(), "exiting");
    Ok(())
}
