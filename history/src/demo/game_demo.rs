// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use crossterm::style::Stylize;
use miette::IntoDiagnostic;

use crate::{CommonResult, Game, GameSnapshot, UndoStack};

/// Play through four levels, pushing a checkpoint onto an [`UndoStack`] before each new
/// level, then restore the most recent checkpoint. Returns the restored game.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_game_demo(out: &mut impl Write) -> CommonResult<Game> {
    let mut game = Game::default();
    let mut checkpoints: UndoStack<GameSnapshot> = UndoStack::new();
    writeln!(out, "Playing: {game}").into_diagnostic()?;

    checkpoints.push(game.save());

    for (level, health, position) in
        [(2, 90, "Enchanted Forest"), (3, 70, "Dark Cave")]
    {
        game.play(level, health, position);
        writeln!(out, "Playing: {game}").into_diagnostic()?;
        checkpoints.push(game.save());
    }

    game.play(4, 60, "Dragon Castle");
    writeln!(out, "Playing: {game}").into_diagnostic()?;
    writeln!(out, "\n{}", "Current state".green()).into_diagnostic()?;

    match checkpoints.pop() {
        Some(checkpoint) => {
            game.restore(&checkpoint);
            writeln!(out, "\n{}", "Progress restored.".yellow()).into_diagnostic()?;
            writeln!(out, "{} {}", "Restored to".blue(), game.to_string().magenta())
                .into_diagnostic()?;
        }
        None => {
            writeln!(out, "{}", "No checkpoint to restore".yellow()).into_diagnostic()?;
        }
    }

    writeln!(
        out,
        "\n{}",
        "After restoring the last saved state.".green()
    )
    .into_diagnostic()?;

    Ok(game)
}
