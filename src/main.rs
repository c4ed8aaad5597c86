use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::Level;

use bridgit::config::AppConfig;
use bridgit::game::{GameState, MoveResult};

/// Play Bridg-It by typing moves on stdin.
///
/// Each line is `x y` for the player on turn, `preview x y` to see the
/// orientation a link would take, `moves` to list open slots, or `quit`.
#[derive(Parser)]
#[command(name = "bridgit", about = "Bridg-It connection game")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "bridgit.toml")]
    config: PathBuf,

    /// Override the board size (odd, at least 3)
    #[arg(long)]
    size: Option<usize>,

    /// Log placements and rejections to stderr
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .init();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(size) = cli.size {
        app_config.game.board_size = size;
    }
    app_config.validate().context("invalid configuration")?;

    let mut state = app_config.game.new_game().context("starting game")?;
    play(&mut state, io::stdin().lock(), io::stdout().lock())
}

fn play(state: &mut GameState, input: impl BufRead, mut out: impl Write) -> Result<()> {
    writeln!(out, "{0}x{0} board", state.board_size())?;
    prompt(state, &mut out)?;

    for line in input.lines() {
        let line = line.context("reading stdin")?;
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => {}
            ["quit"] | ["q"] => break,
            ["moves"] => {
                let moves: Vec<String> = state.legal_moves().iter().map(|c| c.to_string()).collect();
                writeln!(out, "{}", moves.join(" "))?;
            }
            ["preview", x, y] => match parse_coord(x, y) {
                Ok((x, y)) => match state.preview(x, y) {
                    Some(orientation) => writeln!(out, "{orientation:?}")?,
                    None => writeln!(out, "not playable")?,
                },
                Err(e) => writeln!(out, "{e}")?,
            },
            [x, y] => match parse_coord(x, y) {
                Ok((x, y)) => {
                    let player = state.current_player();
                    match state.submit_move(x, y, player) {
                        Ok(MoveResult::Accepted) => writeln!(out, "accepted")?,
                        Ok(MoveResult::Rejected(reason)) => writeln!(out, "rejected: {reason}")?,
                        Ok(MoveResult::AcceptedAndWon(winner)) => {
                            writeln!(out, "{} has won!", state.player_name(winner))?;
                            return Ok(());
                        }
                        Err(e) => writeln!(out, "{e}")?,
                    }
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            _ => writeln!(out, "expected `x y`, `preview x y`, `moves` or `quit`")?,
        }
        prompt(state, &mut out)?;
    }
    Ok(())
}

fn prompt(state: &GameState, out: &mut impl Write) -> Result<()> {
    let player = state.current_player();
    write!(out, "{} ({})> ", state.player_name(player), player.name())?;
    out.flush()?;
    Ok(())
}

fn parse_coord(x: &str, y: &str) -> Result<(usize, usize)> {
    match (x.parse(), y.parse()) {
        (Ok(x), Ok(y)) => Ok((x, y)),
        _ => bail!("coordinates must be non-negative integers, got `{x} {y}`"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(size: usize, script: &str) -> String {
        let mut state = GameState::new(size, "Red", "Blue").unwrap();
        let mut out = Vec::new();
        play(&mut state, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_play_reports_winner() {
        let out = run(3, "1 1\n");
        assert!(out.contains("Red has won!"));
    }

    #[test]
    fn test_play_reports_rejections_and_bad_input() {
        let out = run(5, "0 1\nfoo bar\n9 9\n1 1\nquit\n");
        assert!(out.contains("rejected: cell is an anchor"));
        assert!(out.contains("coordinates must be non-negative integers"));
        assert!(out.contains("outside the 5x5 board"));
        assert!(out.contains("accepted"));
        assert!(out.contains("Blue (Player 2)> "));
    }

    #[test]
    fn test_play_preview_and_moves() {
        let out = run(3, "preview 1 1\npreview 0 0\nmoves\n");
        assert!(out.contains("Horizontal"));
        assert!(out.contains("not playable"));
        assert!(out.contains("(1, 1)"));
    }
}
