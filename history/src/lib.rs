// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Snapshot history
//!
//! Undo/redo for any state that can be captured as an immutable value.
//!
//! - A [`Snapshot`] is a fully populated, immutable value. New snapshots are derived
//!   from old ones with [`Snapshot::derive_with`], which takes per-field optional
//!   overrides (so an explicit `0` or `false` is never mistaken for "not set").
//! - A [`History`] owns an ordered sequence of snapshots and a cursor into it. It
//!   exposes [`History::save`], [`History::undo`], and [`History::redo`]. Saving after
//!   an undo truncates the undone-away future, just like the undo stack in a text
//!   editor.
//! - [`UndoStack`] is a plain LIFO of checkpoints for callers that only ever need to
//!   restore the last saved state.
//! - [`VendingMachine`] is a small deterministic state machine that is used by the demo
//!   binary alongside the history.
//!
//! ```
//! use snapshot_history::{EditorSnapshot, EditorSnapshotOverrides, History, Snapshot};
//!
//! let mut history = History::new();
//! let first = EditorSnapshot::new("a", 2, false);
//! history.save(first.clone());
//!
//! let second = first.derive_with(
//!     EditorSnapshotOverrides::default()
//!         .content("ab")
//!         .cursor_position(3)
//!         .unsaved_changes(true),
//! );
//! history.save(second.clone());
//!
//! assert_eq!(history.undo(), Some(&first));
//! assert_eq!(history.redo(), Some(&second));
//! assert_eq!(history.redo(), None);
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod common;
pub mod demo;
pub mod history;
pub mod log;
pub mod snapshot;
pub mod vending_machine;

// Re-export.
pub use common::*;
pub use demo::*;
pub use history::*;
pub use log::*;
pub use snapshot::*;
pub use vending_machine::*;
