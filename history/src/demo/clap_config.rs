// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, Subcommand};

use crate::Command;

#[derive(Debug, Parser)]
#[command(bin_name = "snapshot_demo")]
#[command(about = "Undo/redo history, memento, and state machine demos")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(
        about = "Edit a document, then undo twice and redo once\nEg: `snapshot_demo editor`"
    )]
    Editor,

    #[clap(
        about = "Play a game, save checkpoints, and restore the last one\nEg: `snapshot_demo game`"
    )]
    Game,

    #[clap(
        about = "Drive a vending machine. Reads commands from stdin if none are given\nEg: `snapshot_demo vending insert select dispense`"
    )]
    Vending {
        #[arg(
            value_name = "command",
            help = "One of `insert`, `select`, or `dispense`"
        )]
        commands: Vec<Command>,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_clap_config_is_valid() { CLIArg::command().debug_assert(); }

    #[test]
    fn test_parse_vending_commands() {
        let it = CLIArg::try_parse_from(["snapshot_demo", "vending", "insert", "select"])
            .unwrap();
        match it.command {
            CLICommand::Vending { commands } => assert_eq!(
                commands,
                vec![Command::InsertMoney, Command::SelectProduct]
            ),
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(!it.global_options.enable_logging);
    }

    #[test]
    fn test_parse_global_flag_after_subcommand() {
        let it = CLIArg::try_parse_from(["snapshot_demo", "editor", "-l"]).unwrap();
        assert!(it.global_options.enable_logging);
    }

    #[test]
    fn test_parse_unknown_vending_command() {
        assert!(CLIArg::try_parse_from(["snapshot_demo", "vending", "refund"]).is_err());
    }
}
