// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Docs](https://docs.rs/clap/latest/clap/_derive/#overview)

use clap::Parser;
use snapshot_history::{CLIArg, CLICommand, CommonResult, TracingConfig, ok,
                       run_editor_demo, run_game_demo, run_vending_demo,
                       run_vending_interactive, try_initialize_logging_global};

fn main() -> CommonResult<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    if enable_logging {
        try_initialize_logging_global(TracingConfig::new_file(None))?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let mut stdout = std::io::stdout().lock();
    match cli_arg.command {
        CLICommand::Editor => {
            let final_state = run_editor_demo(&mut stdout)?;
            tracing::debug!(message = "Editor demo finished", final_state = ?final_state);
        }
        CLICommand::Game => {
            let game = run_game_demo(&mut stdout)?;
            tracing::debug!(message = "Game demo finished", game = %game);
        }
        CLICommand::Vending { commands } => {
            let machine = if commands.is_empty() {
                run_vending_interactive(std::io::stdin().lock(), &mut stdout)?
            } else {
                run_vending_demo(&commands, &mut stdout)?
            };
            tracing::debug!(message = "Vending demo finished", state = %machine.state());
        }
    }

    if enable_logging {
        tracing::debug!(message = "Stop logging...");
    }

    ok!()
}
