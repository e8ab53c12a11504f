// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Deref;

/// The current index (cursor) in the history buffer.
///
/// This index keeps track of the version that is currently in effect. It works with
/// [`super::History`] to allow undoing and redoing.
///
/// - If it's `None`, then the history buffer is empty. This is the `-1` position: there
///   is nothing to undo or redo.
/// - If it's `Some(index)`, then `index` is always a valid position in the history
///   buffer. Redoing increments the index. Undoing decrements it.
/// - Saving after undoing truncates / removes all the "dangling" redo versions, and
///   then points the index at the newly saved version.
/// - If the current index is at the end of the history buffer, then there are no redo
///   versions.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CurIndex(pub Option<usize>);

/// This is a state machine that represents the location of the current index in the
/// history buffer.
///
/// - It encodes all the possible states that the current index can be in as it is
///   manipulated using [`Self::inc`] and [`Self::dec`].
/// - This state information can be queried using [`Self::locate`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CurIndexLoc {
    /// The history buffer is empty. There are no versions to undo or redo.
    EmptyHistory,
    /// There's exactly one version and the index points at it. It is both the start and
    /// the end, so neither undo nor redo is possible.
    Single,
    /// Index is `Some(0)` and there are newer versions. Only redo is possible.
    Start,
    /// Index is `Some(it)`, where `0 < it < len - 1`. Undo and redo are both possible.
    Middle(usize),
    /// Index is `Some(len - 1)`, where `len > 1`. Only undo is possible.
    End(usize),
}

impl CurIndexLoc {
    /// Determine the location of the current index in the history buffer.
    #[must_use]
    pub fn locate(cur_index: &CurIndex, versions_len: usize) -> CurIndexLoc {
        let Some(index) = cur_index.0 else {
            return CurIndexLoc::EmptyHistory;
        };

        if versions_len == 0 {
            // Is empty.
            return CurIndexLoc::EmptyHistory;
        }

        let last_index = versions_len - 1;
        match (index, last_index) {
            (0, 0) => CurIndexLoc::Single,
            (0, _) => CurIndexLoc::Start,
            (it, last) if it >= last => CurIndexLoc::End(last),
            (it, _) => CurIndexLoc::Middle(it),
        }
    }

    /// Increment the current index. If the current index is at the end of the history
    /// buffer, or the buffer is empty, this does nothing.
    pub fn inc(cur_index: &mut CurIndex, versions_len: usize) {
        match Self::locate(cur_index, versions_len) {
            Self::EmptyHistory | Self::Single | Self::End(_) => {
                // Either:
                // - EmptyHistory -> Nothing to increment.
                // - Already at end of history buffer -> Nothing to increment.
            }
            Self::Start => {
                cur_index.0 = Some(1);
            }
            Self::Middle(index) => {
                cur_index.0 = Some(index + 1);
            }
        }
    }

    /// Decrement the current index. If the current index is at the start of the history
    /// buffer, or the buffer is empty, this does nothing. It never goes below `Some(0)`.
    pub fn dec(cur_index: &mut CurIndex, versions_len: usize) {
        match Self::locate(cur_index, versions_len) {
            Self::EmptyHistory | Self::Single | Self::Start => {
                // Either:
                // - EmptyHistory -> Nothing to decrement.
                // - Already at start of history buffer -> Nothing to decrement.
            }
            Self::Middle(index) | Self::End(index) => {
                cur_index.0 = Some(index - 1);
            }
        }
    }

    #[must_use]
    pub fn can_undo(self) -> bool { matches!(self, Self::Middle(_) | Self::End(_)) }

    #[must_use]
    pub fn can_redo(self) -> bool { matches!(self, Self::Start | Self::Middle(_)) }
}

impl CurIndex {
    /// Point the index at the newest version, or reset it if there are no versions.
    pub fn move_to_last(&mut self, versions_len: usize) {
        self.0 = versions_len.checked_sub(1);
    }

    /// Reset the current index, since the history buffer is now empty.
    pub fn clear(&mut self) { self.0 = None; }
}

impl Deref for CurIndex {
    type Target = Option<usize>;

    fn deref(&self) -> &Self::Target { &self.0 }
}

impl From<usize> for CurIndex {
    fn from(val: usize) -> Self { CurIndex(Some(val)) }
}
