// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;

use super::{Command, MachineState};

/// Errors reported by a [`super::VendingMachine`]. An invalid command never changes the
/// machine's state, so these are safe to display and carry on.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error, Diagnostic)]
pub enum VendingMachineError {
    #[error("Can't {command} while {state}: {reason}")]
    #[diagnostic(code(snapshot_history::vending_machine::invalid_command))]
    InvalidCommand {
        state: MachineState,
        command: Command,
        reason: &'static str,
        #[help]
        help: String,
    },
}

impl VendingMachineError {
    #[must_use]
    pub fn invalid_command(
        state: MachineState,
        command: Command,
        reason: &'static str,
    ) -> Self {
        Self::InvalidCommand {
            state,
            command,
            reason,
            help: format!("While {state}, try `{}`", state.expected_command()),
        }
    }
}
