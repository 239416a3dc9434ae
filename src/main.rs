//! Line-mode terminal driver for the game core.
//!
//! This is the rendering collaborator: it draws the snapshot projection
//! (grid, status line, jump targets) and translates input lines into
//! `apply_move` / `jump_to` calls. No game logic lives here. Illegal moves
//! are silent no-ops in the core, so the unchanged re-render is the only
//! feedback.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use tictactoe_timeline::{Game, Position, Snapshot};
use tracing::debug;

fn render(snapshot: &Snapshot) {
    println!("\n{}", snapshot.board.display());
    println!("{}", snapshot.status_string());
    for (step, label) in snapshot.move_labels().iter().enumerate() {
        let marker = if step == snapshot.current_step { "*" } else { " " };
        println!(" {marker} {step}: {label}");
    }
}

fn prompt() -> io::Result<()> {
    print!("move <1-9> | jump <step> | quit > ");
    io::stdout().flush()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut game = Game::new();
    let stdin = io::stdin();

    render(&game.snapshot());
    prompt()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let mut words = line.split_whitespace();

        match (words.next(), words.next()) {
            (Some("move"), Some(cell)) => match cell.parse::<usize>() {
                Ok(n @ 1..=9) => {
                    // Cells are shown 1-based; positions are 0-based.
                    if let Some(pos) = Position::from_index(n - 1) {
                        game.apply_move(pos);
                    }
                }
                _ => println!("cell must be 1-9"),
            },
            (Some("jump"), Some(step)) => match step.parse::<usize>() {
                Ok(step) => game.jump_to(step),
                Err(_) => println!("step must be a number"),
            },
            (Some("board"), None) => {}
            (Some("quit"), None) | (Some("exit"), None) => break,
            (None, None) => {}
            _ => println!("unrecognized command"),
        }

        debug!(step = game.current_step(), "rendering");
        render(&game.snapshot());
        prompt()?;
    }

    Ok(())
}
