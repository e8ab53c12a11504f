// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use crossterm::style::Stylize;
use miette::IntoDiagnostic;

use crate::{CommonResult, EditorSnapshot, EditorSnapshotOverrides, History, Snapshot};

/// Edit a document three times, saving a snapshot after each change, then undo twice
/// and redo once. Every step prints the editor state to `out`. Returns the state the
/// editor ends up in.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_editor_demo(out: &mut impl Write) -> CommonResult<EditorSnapshot> {
    let mut history = History::new();

    let mut editor_state = EditorSnapshot::new("console.log('hello world')", 2, false);
    history.save(editor_state.clone());
    print_state(out, "Initial state", &editor_state)?;

    editor_state = editor_state.derive_with(
        EditorSnapshotOverrides::default()
            .content("console.log('hello world!!!')\nconsole.log('new line');")
            .cursor_position(3)
            .unsaved_changes(true),
    );
    history.save(editor_state.clone());
    print_state(out, "After editing the content", &editor_state)?;

    editor_state =
        editor_state.derive_with(EditorSnapshotOverrides::default().cursor_position(5));
    history.save(editor_state.clone());
    print_state(out, "After moving the cursor", &editor_state)?;

    for (heading, step) in [
        ("After undo", Step::Undo),
        ("After undo 2", Step::Undo),
        ("After redo", Step::Redo),
    ] {
        let maybe_snapshot = match step {
            Step::Undo => history.undo(),
            Step::Redo => history.redo(),
        };
        match maybe_snapshot {
            Some(snapshot) => {
                editor_state = snapshot.clone();
                print_state(out, heading, &editor_state)?;
            }
            None => {
                writeln!(out, "{}", format!("Nothing to {step}").yellow())
                    .into_diagnostic()?;
            }
        }
    }

    Ok(editor_state)
}

#[derive(Clone, Copy, Debug, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
enum Step {
    Undo,
    Redo,
}

fn print_state(
    out: &mut impl Write,
    heading: &str,
    editor_state: &EditorSnapshot,
) -> CommonResult<()> {
    writeln!(out, "\n{}", heading.red()).into_diagnostic()?;
    writeln!(out, "{}", "Editor state:".green()).into_diagnostic()?;
    writeln!(out, "{editor_state}").into_diagnostic()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_run_editor_demo() {
        let mut out: Vec<u8> = vec![];
        let final_state = run_editor_demo(&mut out).unwrap();

        assert_eq!(
            final_state,
            EditorSnapshot::new(
                "console.log('hello world!!!')\nconsole.log('new line');",
                3,
                true
            )
        );

        let output = String::from_utf8(out).unwrap();
        for heading in [
            "Initial state",
            "After editing the content",
            "After moving the cursor",
            "After undo",
            "After undo 2",
            "After redo",
        ] {
            assert!(output.contains(heading), "missing heading: {heading}");
        }
        assert!(output.contains("Cursor position: 5"));
        assert!(!output.contains("Nothing to"));
    }
}
