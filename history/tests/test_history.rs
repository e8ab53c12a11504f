// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use pretty_assertions::assert_eq;
use snapshot_history::{EditorSnapshot, EditorSnapshotOverrides, GameSnapshot,
                       GameSnapshotOverrides, History, Snapshot};

fn editor(content: &str, cursor_position: usize, unsaved_changes: bool) -> EditorSnapshot {
    EditorSnapshot::new(content, cursor_position, unsaved_changes)
}

#[test]
fn test_empty_history_has_nothing_to_undo_or_redo() {
    let mut history = History::<EditorSnapshot>::new();
    assert_eq!(history.undo(), None);
    assert_eq!(history.redo(), None);
}

#[test]
fn test_undo_then_redo_of_two_edits() {
    let mut history = History::new();
    history.save(editor("a", 2, false));
    history.save(editor("ab", 3, true));

    assert_eq!(history.undo(), Some(&editor("a", 2, false)));
    assert_eq!(history.redo(), Some(&editor("ab", 3, true)));
}

#[test]
fn test_applying_undo_to_live_state() {
    let mut history = History::new();
    let mut live = editor("fn", 2, false);
    history.save(live.clone());

    live = live.derive_with(
        EditorSnapshotOverrides::default()
            .content("fn main")
            .cursor_position(7)
            .unsaved_changes(true),
    );
    history.save(live.clone());

    if let Some(snapshot) = history.undo() {
        live = snapshot.clone();
    }
    assert_eq!(live, editor("fn", 2, false));

    // Nothing left to undo, so the live state is left alone.
    if let Some(snapshot) = history.undo() {
        live = snapshot.clone();
    }
    assert_eq!(live, editor("fn", 2, false));
}

#[test]
fn test_branch_loss_after_saving_on_an_undone_state() {
    let s1 = GameSnapshot::new(1, 1000, "Start");
    let s2 = s1.derive_with(GameSnapshotOverrides::default().level(2).health(90));
    let s3 = s2.derive_with(GameSnapshotOverrides::default().position("Dark Cave"));
    let s4 = s1.derive_with(GameSnapshotOverrides::default().health(0));

    let mut history = History::new();
    history.save(s1.clone());
    history.save(s2.clone());
    history.save(s3.clone());
    history.undo();
    history.undo();
    history.save(s4.clone());

    assert_eq!(history.redo(), None);
    assert_eq!(history.undo(), Some(&s1));
    assert_eq!(history.redo(), Some(&s4));
    assert!(history.iter().all(|it| it != &s2 && it != &s3));
}

/// Any value type can be tracked by implementing [`Snapshot`].
#[derive(Clone, PartialEq, Debug)]
struct Counter {
    count: i64,
    label: String,
}

#[derive(Debug, Default)]
struct CounterOverrides {
    count: Option<i64>,
    label: Option<String>,
}

impl Snapshot for Counter {
    type Overrides = CounterOverrides;

    fn derive_with(&self, overrides: Self::Overrides) -> Self {
        Self {
            count: overrides.count.unwrap_or(self.count),
            label: overrides.label.unwrap_or_else(|| self.label.clone()),
        }
    }
}

#[test]
fn test_custom_snapshot_type() {
    let first = Counter {
        count: 5,
        label: "clicks".to_string(),
    };
    let reset = first.derive_with(CounterOverrides {
        count: Some(0),
        ..Default::default()
    });
    assert_eq!(reset.count, 0);
    assert_eq!(reset.label, "clicks");

    let mut history = History::new();
    history.save(first.clone());
    history.save(reset.clone());
    assert_eq!(history.undo(), Some(&first));
    assert_eq!(history.current(), Some(&first));
    assert_eq!(history.redo(), Some(&reset));
}
