// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{BufRead, Write},
          str::FromStr};

use crossterm::style::Stylize;
use miette::IntoDiagnostic;

use crate::{Command, CommonResult, VendingMachine};

const MENU: &str = "
  1. Insert money
  2. Select product
  3. Dispense product
  4. Exit

  Choose an option: ";

/// What the user typed at the menu prompt.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuChoice {
    Run(Command),
    Exit,
    Invalid,
}

impl From<&str> for MenuChoice {
    fn from(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::Run(Command::InsertMoney),
            "2" => MenuChoice::Run(Command::SelectProduct),
            "3" => MenuChoice::Run(Command::DispenseProduct),
            "4" | "exit" | "quit" => MenuChoice::Exit,
            other => Command::from_str(other).map_or(MenuChoice::Invalid, MenuChoice::Run),
        }
    }
}

/// Feed `commands` to a fresh [`VendingMachine`] one at a time, printing each transition,
/// or the reason a command was rejected. Returns the machine in its final state.
///
/// # Errors
///
/// Returns an error if writing to `out` fails. Rejected commands are not errors here,
/// they are printed and the run carries on.
pub fn run_vending_demo(
    commands: &[Command],
    out: &mut impl Write,
) -> CommonResult<VendingMachine> {
    let mut machine = VendingMachine::new();
    print_current_state(out, &machine)?;
    for command in commands {
        run_command(out, &mut machine, *command)?;
    }
    Ok(machine)
}

/// Show a menu, read one choice per line from `input`, and apply it to a fresh
/// [`VendingMachine`]. Stops on `4`, `exit`, `quit`, or end of input.
///
/// # Errors
///
/// Returns an error if reading from `input` or writing to `out` fails.
pub fn run_vending_interactive(
    input: impl BufRead,
    out: &mut impl Write,
) -> CommonResult<VendingMachine> {
    let mut machine = VendingMachine::new();
    let mut lines = input.lines();

    loop {
        print_current_state(out, &machine)?;
        write!(out, "{MENU}").into_diagnostic()?;
        out.flush().into_diagnostic()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.into_diagnostic()?;

        match MenuChoice::from(line.as_str()) {
            MenuChoice::Run(command) => run_command(out, &mut machine, command)?,
            MenuChoice::Exit => {
                writeln!(out, "{}", "Exiting the simulator...".magenta())
                    .into_diagnostic()?;
                break;
            }
            MenuChoice::Invalid => {
                writeln!(out, "Invalid option: {}", line.trim()).into_diagnostic()?;
            }
        }
    }

    Ok(machine)
}

fn print_current_state(out: &mut impl Write, machine: &VendingMachine) -> CommonResult<()> {
    writeln!(out, "Current state: {}", machine.state_name().blue()).into_diagnostic()?;
    Ok(())
}

fn run_command(
    out: &mut impl Write,
    machine: &mut VendingMachine,
    command: Command,
) -> CommonResult<()> {
    match machine.handle(command) {
        Ok(transition) => {
            writeln!(out, "{}", transition.message.green()).into_diagnostic()?;
            writeln!(out, "State changed to: {}", transition.to.to_string().yellow())
                .into_diagnostic()?;
        }
        Err(error) => {
            let report = miette::Report::new(error);
            writeln!(out, "{}", report.to_string().red()).into_diagnostic()?;
            if let Some(help) = report.help() {
                writeln!(out, "{help}").into_diagnostic()?;
            }
        }
    }
    Ok(())
}
