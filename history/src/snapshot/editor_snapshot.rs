// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use super::Snapshot;

/// The state of a code editor at one point in time: the text content, where the caret
/// is, and whether there are unsaved changes.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct EditorSnapshot {
    content: String,
    cursor_position: usize,
    unsaved_changes: bool,
}

impl EditorSnapshot {
    pub fn new(
        content: impl Into<String>,
        cursor_position: usize,
        unsaved_changes: bool,
    ) -> Self {
        Self {
            content: content.into(),
            cursor_position,
            unsaved_changes,
        }
    }

    #[must_use]
    pub fn content(&self) -> &str { &self.content }

    #[must_use]
    pub fn cursor_position(&self) -> usize { self.cursor_position }

    #[must_use]
    pub fn unsaved_changes(&self) -> bool { self.unsaved_changes }
}

/// Per-field overrides for [`EditorSnapshot::derive_with`]. Build it with the chained
/// setters:
///
/// ```
/// use snapshot_history::{EditorSnapshot, EditorSnapshotOverrides, Snapshot};
///
/// let state = EditorSnapshot::new("fn main() {}", 5, true);
/// let moved = state.derive_with(EditorSnapshotOverrides::default().cursor_position(0));
///
/// assert_eq!(moved.cursor_position(), 0);
/// assert_eq!(moved.content(), "fn main() {}");
/// assert!(moved.unsaved_changes());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct EditorSnapshotOverrides {
    pub content: Option<String>,
    pub cursor_position: Option<usize>,
    pub unsaved_changes: Option<bool>,
}

impl EditorSnapshotOverrides {
    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn cursor_position(mut self, cursor_position: usize) -> Self {
        self.cursor_position = Some(cursor_position);
        self
    }

    #[must_use]
    pub fn unsaved_changes(mut self, unsaved_changes: bool) -> Self {
        self.unsaved_changes = Some(unsaved_changes);
        self
    }
}

impl Snapshot for EditorSnapshot {
    type Overrides = EditorSnapshotOverrides;

    fn derive_with(&self, overrides: Self::Overrides) -> Self {
        let EditorSnapshotOverrides {
            content,
            cursor_position,
            unsaved_changes,
        } = overrides;

        Self {
            content: content.unwrap_or_else(|| self.content.clone()),
            cursor_position: cursor_position.unwrap_or(self.cursor_position),
            unsaved_changes: unsaved_changes.unwrap_or(self.unsaved_changes),
        }
    }
}

impl Display for EditorSnapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Content: {}", self.content)?;
        writeln!(f, "Cursor position: {}", self.cursor_position)?;
        write!(f, "Unsaved changes: {}", self.unsaved_changes)
    }
}
