// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter, EnumString};

use super::VendingMachineError;

/// The named states of a [`super::VendingMachine`]. Every state handles all three
/// [`Command`]s: exactly one of them is valid and causes a transition, the other two are
/// reported as [`VendingMachineError::InvalidCommand`] and leave the state unchanged.
///
/// | state               | insert money        | select product       | dispense product   |
/// |---------------------|---------------------|----------------------|--------------------|
/// | waiting for money   | → selecting product | invalid              | invalid            |
/// | selecting product   | invalid             | → dispensing product | invalid            |
/// | dispensing product  | invalid             | invalid              | → waiting for money|
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Display, EnumIter)]
pub enum MachineState {
    #[default]
    #[strum(to_string = "waiting for money")]
    WaitingForMoney,
    #[strum(to_string = "selecting product")]
    SelectingProduct,
    #[strum(to_string = "dispensing product")]
    DispensingProduct,
}

/// The commands a user can issue to a [`super::VendingMachine`]. Parsing is case
/// insensitive and accepts the short forms `insert`, `select`, and `dispense`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Command {
    #[strum(
        to_string = "insert money",
        serialize = "insert",
        serialize = "insert-money"
    )]
    InsertMoney,
    #[strum(
        to_string = "select product",
        serialize = "select",
        serialize = "select-product"
    )]
    SelectProduct,
    #[strum(
        to_string = "dispense product",
        serialize = "dispense",
        serialize = "dispense-product"
    )]
    DispenseProduct,
}

/// The record of a valid command being applied.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Transition {
    pub from: MachineState,
    pub to: MachineState,
    pub command: Command,
    pub message: &'static str,
}

impl MachineState {
    /// The one command that is valid in this state.
    #[must_use]
    pub fn expected_command(self) -> Command {
        match self {
            MachineState::WaitingForMoney => Command::InsertMoney,
            MachineState::SelectingProduct => Command::SelectProduct,
            MachineState::DispensingProduct => Command::DispenseProduct,
        }
    }

    /// Look up what `command` does in this state. This is a pure function of the
    /// transition table, it doesn't change anything.
    ///
    /// # Errors
    ///
    /// Returns [`VendingMachineError::InvalidCommand`] if `command` is not valid in this
    /// state.
    pub fn on(self, command: Command) -> Result<Transition, VendingMachineError> {
        use Command::{DispenseProduct, InsertMoney, SelectProduct};
        use MachineState::{DispensingProduct, SelectingProduct, WaitingForMoney};

        let valid = |to: MachineState,
                     message: &'static str|
         -> Result<Transition, VendingMachineError> {
            Ok(Transition {
                from: self,
                to,
                command,
                message,
            })
        };
        let invalid = |reason: &'static str| -> Result<Transition, VendingMachineError> {
            Err(VendingMachineError::invalid_command(self, command, reason))
        };

        match (self, command) {
            (WaitingForMoney, InsertMoney) => valid(
                SelectingProduct,
                "Money inserted, you can now select a product",
            ),
            (WaitingForMoney, SelectProduct | DispenseProduct) => {
                invalid("you must insert money first")
            }
            (SelectingProduct, InsertMoney) => {
                invalid("money already inserted, please select a product")
            }
            (SelectingProduct, SelectProduct) => {
                valid(DispensingProduct, "Product selected, dispensing it now")
            }
            (SelectingProduct, DispenseProduct) => {
                invalid("please select a product before dispensing it")
            }
            (DispensingProduct, InsertMoney) => {
                invalid("please wait for the product to be dispensed")
            }
            (DispensingProduct, SelectProduct) => {
                invalid("product already selected and being dispensed")
            }
            (DispensingProduct, DispenseProduct) => valid(
                WaitingForMoney,
                "Product dispensed, waiting for money again",
            ),
        }
    }
}
