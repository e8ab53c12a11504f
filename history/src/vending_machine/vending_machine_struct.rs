// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Command, MachineState, Transition, VendingMachineError};

/// A vending machine that holds a current [`MachineState`] and reacts to [`Command`]s.
///
/// The behavior for every (state, command) pair is in [`MachineState::on`]. This struct
/// only owns the current state, applies valid transitions, and logs what happened.
///
/// ```
/// use snapshot_history::{MachineState, VendingMachine};
///
/// let mut machine = VendingMachine::default();
/// assert!(machine.select_product().is_err());
/// assert_eq!(machine.state(), MachineState::WaitingForMoney);
///
/// machine.insert_money().unwrap();
/// machine.select_product().unwrap();
/// machine.dispense_product().unwrap();
/// assert_eq!(machine.state(), MachineState::WaitingForMoney);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct VendingMachine {
    state: MachineState,
}

impl VendingMachine {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn state(&self) -> MachineState { self.state }

    #[must_use]
    pub fn state_name(&self) -> String { self.state.to_string() }

    /// Apply `command` to the current state.
    ///
    /// # Errors
    ///
    /// Returns [`VendingMachineError::InvalidCommand`] if `command` isn't valid in the
    /// current state. The state is left unchanged in that case.
    pub fn handle(&mut self, command: Command) -> Result<Transition, VendingMachineError> {
        match self.state.on(command) {
            Ok(transition) => {
                self.state = transition.to;
                // % is Display, ? is Debug.
                tracing::info!(
                    message = transition.message,
                    from = %transition.from,
                    to = %transition.to
                );
                Ok(transition)
            }
            Err(error) => {
                tracing::warn!(
                    message = "Invalid command",
                    state = %self.state,
                    command = %command,
                    error = %error
                );
                Err(error)
            }
        }
    }

    /// # Errors
    ///
    /// See [`Self::handle`].
    pub fn insert_money(&mut self) -> Result<Transition, VendingMachineError> {
        self.handle(Command::InsertMoney)
    }

    /// # Errors
    ///
    /// See [`Self::handle`].
    pub fn select_product(&mut self) -> Result<Transition, VendingMachineError> {
        self.handle(Command::SelectProduct)
    }

    /// # Errors
    ///
    /// See [`Self::handle`].
    pub fn dispense_product(&mut self) -> Result<Transition, VendingMachineError> {
        self.handle(Command::DispenseProduct)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_full_cycle() {
        let mut machine = VendingMachine::new();
        assert_eq!(machine.state(), MachineState::WaitingForMoney);

        let it = machine.insert_money().unwrap();
        assert_eq!(it.to, MachineState::SelectingProduct);
        assert_eq!(machine.state(), MachineState::SelectingProduct);

        machine.select_product().unwrap();
        assert_eq!(machine.state(), MachineState::DispensingProduct);

        machine.dispense_product().unwrap();
        assert_eq!(machine.state(), MachineState::WaitingForMoney);
    }

    #[test]
    fn test_invalid_command_keeps_state() {
        let mut machine = VendingMachine::new();
        machine.insert_money().unwrap();

        let error = machine.dispense_product().unwrap_err();
        assert!(matches!(
            error,
            VendingMachineError::InvalidCommand {
                state: MachineState::SelectingProduct,
                command: Command::DispenseProduct,
                ..
            }
        ));
        assert_eq!(machine.state(), MachineState::SelectingProduct);
        assert_eq!(machine.state_name(), "selecting product");
    }

    #[test]
    fn test_repeated_insert_is_rejected() {
        let mut machine = VendingMachine::new();
        machine.insert_money().unwrap();
        assert!(machine.insert_money().is_err());
        assert!(machine.insert_money().is_err());
        assert_eq!(machine.state(), MachineState::SelectingProduct);
    }
}
