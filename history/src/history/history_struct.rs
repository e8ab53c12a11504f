// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::{VecDeque, vec_deque},
          fmt::{Debug, Formatter, Result}};

use super::{CurIndex, CurIndexLoc, HistoryConfig};
use crate::call_if_true;

const DEBUG_SNAPSHOT_HISTORY: bool = true;

/// # Undo/Redo Algorithm
///
/// The `History` struct manages undo/redo for any snapshot type `S` (usually something
/// that implements [`crate::Snapshot`]). It stores the different versions in `versions`,
/// oldest first. The `current_index` field points to the version currently in effect.
///
/// ## Saving a new state ([`History::save`])
///
/// 1. If the `current_index` is not the last index in the `versions` buffer, the history
///    from `current_index + 1` to the end of the buffer is truncated (removed). This
///    discards any "future" states that were previously undone.
/// 2. The snapshot is appended to the `versions` buffer.
/// 3. If the history is bounded (see [`HistoryConfig`]) and is now over capacity, the
///    oldest versions are evicted.
/// 4. The `current_index` points to the newly added state.
///
/// ## Undoing ([`History::undo`])
///
/// 1. If there is a previous state in the `versions` buffer (i.e., `current_index > 0`),
///    the `current_index` is decremented.
/// 2. The snapshot at the new `current_index` is returned. Otherwise [`None`] is
///    returned and nothing moves.
///
/// ## Redoing ([`History::redo`])
///
/// 1. If there is a next state in the `versions` buffer (i.e., `current_index <
///    versions.len() - 1`), the `current_index` is incremented.
/// 2. The snapshot at the new `current_index` is returned. Otherwise [`None`] is
///    returned and nothing moves.
///
/// ## Notes
///
/// - The `current_index` is [`None`] if and only if the buffer is empty.
/// - Callers only ever get shared references to the stored snapshots. To apply one to
///   live state, clone it.
/// - Saving after an undo loses the undone-away versions for good. This is a linear
///   history, not a tree.
#[derive(Clone, PartialEq)]
pub struct History<S> {
    versions: VecDeque<S>,
    current_index: CurIndex,
    config: HistoryConfig,
}

impl<S> Default for History<S> {
    fn default() -> Self { Self::with_config(HistoryConfig::unbounded()) }
}

impl<S> History<S> {
    /// Unbounded history.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_config(config: impl Into<HistoryConfig>) -> Self {
        Self {
            versions: VecDeque::new(),
            current_index: CurIndex::default(),
            config: config.into(),
        }
    }

    #[must_use]
    pub fn config(&self) -> HistoryConfig { self.config }

    #[must_use]
    pub fn len(&self) -> usize { self.versions.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.versions.is_empty() }

    /// Get the current index in the history buffer. If the buffer is empty, this will
    /// return `None`.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> { *self.current_index }

    /// The snapshot that is currently in effect.
    #[must_use]
    pub fn current(&self) -> Option<&S> {
        self.current_index().and_then(|index| self.versions.get(index))
    }

    #[must_use]
    pub fn can_undo(&self) -> bool { self.locate().can_undo() }

    #[must_use]
    pub fn can_redo(&self) -> bool { self.locate().can_redo() }

    /// Iterate over all the stored versions, oldest first.
    pub fn iter(&self) -> vec_deque::Iter<'_, S> { self.versions.iter() }

    pub fn clear(&mut self) {
        self.versions.clear();
        self.current_index.clear();
    }

    /// This function adds a snapshot to the history buffer. Call it whenever the tracked
    /// state changes. Once this is called, the current index points at `snapshot`, and
    /// [`History::undo`] can be called to go back.
    ///
    /// Any dangling redos are truncated before the new snapshot is added.
    pub fn save(&mut self, snapshot: S) {
        let truncated = self.truncate_after_current_index();
        self.versions.push_back(snapshot);
        let evicted = self.evict_over_capacity();
        self.current_index.move_to_last(self.versions.len());

        call_if_true!(DEBUG_SNAPSHOT_HISTORY, {
            tracing::debug!(message = "save", truncated, evicted, history = ?self);
        });
    }

    /// This is the underlying function that enables undo. It changes the current index to
    /// the previous index in the versions buffer and returns the snapshot there.
    ///
    /// Once called, you can use [`History::redo`] to go forward again, as long as
    /// nothing is saved in between.
    pub fn undo(&mut self) -> Option<&S> {
        match self.locate() {
            CurIndexLoc::EmptyHistory | CurIndexLoc::Single | CurIndexLoc::Start => {
                // Nothing before the current index. Nothing to undo.
                None
            }
            CurIndexLoc::Middle(_) | CurIndexLoc::End(_) => {
                CurIndexLoc::dec(&mut self.current_index, self.versions.len());

                call_if_true!(DEBUG_SNAPSHOT_HISTORY, {
                    tracing::debug!(message = "undo", history = ?self);
                });

                self.current()
            }
        }
    }

    /// This is the underlying function that enables redo. It changes the current index to
    /// the next index in the versions buffer and returns the snapshot there.
    ///
    /// You can call [`History::undo`] to go back, as long as the current index is not at
    /// the start of the versions buffer.
    pub fn redo(&mut self) -> Option<&S> {
        match self.locate() {
            CurIndexLoc::EmptyHistory | CurIndexLoc::Single | CurIndexLoc::End(_) => {
                // Nothing after the current index. Nothing to redo.
                None
            }
            CurIndexLoc::Start | CurIndexLoc::Middle(_) => {
                CurIndexLoc::inc(&mut self.current_index, self.versions.len());

                call_if_true!(DEBUG_SNAPSHOT_HISTORY, {
                    tracing::debug!(message = "redo", history = ?self);
                });

                self.current()
            }
        }
    }

    fn locate(&self) -> CurIndexLoc {
        CurIndexLoc::locate(&self.current_index, self.versions.len())
    }

    /// Delete the history from the current version index + 1 to the end. Returns the
    /// number of versions removed.
    fn truncate_after_current_index(&mut self) -> usize {
        let len_before = self.versions.len();
        match self.current_index() {
            Some(index) => self.versions.truncate(index + 1),
            None => self.versions.clear(),
        }
        len_before - self.versions.len()
    }

    /// Drop the oldest versions until the buffer fits the configured capacity. Returns
    /// the number of versions removed.
    fn evict_over_capacity(&mut self) -> usize {
        let Some(max_versions) = self.config.max_versions else {
            return 0;
        };
        let excess = self.versions.len().saturating_sub(max_versions.get());
        self.versions.drain(..excess);
        excess
    }
}

impl<'a, S> IntoIterator for &'a History<S> {
    type Item = &'a S;
    type IntoIter = vec_deque::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

mod impl_debug_format {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<S> Debug for History<S> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write! {
                f,
                "History [index: {index:?} | versions: {len} | max: {max:?}]",
                index = self.current_index(),
                len = self.versions.len(),
                max = self.config.max_versions,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{EditorSnapshot, EditorSnapshotOverrides, Snapshot};

    fn three_states() -> (EditorSnapshot, EditorSnapshot, EditorSnapshot) {
        let s1 = EditorSnapshot::new("a", 1, false);
        let s2 = s1.derive_with(
            EditorSnapshotOverrides::default()
                .content("ab")
                .cursor_position(2)
                .unsaved_changes(true),
        );
        let s3 = s2.derive_with(EditorSnapshotOverrides::default().cursor_position(0));
        (s1, s2, s3)
    }

    #[test]
    fn test_empty_history() {
        let mut history = History::<EditorSnapshot>::new();
        assert_eq!(history.config(), HistoryConfig::unbounded());
        assert_eq!(history.config().max_versions, None);
        assert!(history.is_empty());
        assert_eq!(history.current_index(), None);
        assert_eq!(history.current(), None);
        assert!(!history.can_undo());
        assert!(!history.can_redo());

        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
        assert_eq!(history.current_index(), None);
    }

    #[test]
    fn test_single_save() {
        let (s1, _, _) = three_states();
        let mut history = History::new();
        history.save(s1.clone());

        assert_eq!(history.len(), 1);
        assert_eq!(history.current_index(), Some(0));
        assert_eq!(history.current(), Some(&s1));

        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
        assert_eq!(history.current_index(), Some(0));
    }

    #[test]
    fn test_linear_walk() {
        let (s1, s2, s3) = three_states();
        let mut history = History::new();
        history.save(s1.clone());
        history.save(s2.clone());
        history.save(s3.clone());
        assert_eq!(history.current_index(), Some(2));

        assert_eq!(history.undo(), Some(&s2));
        assert_eq!(history.undo(), Some(&s1));
        assert_eq!(history.undo(), None);
        assert_eq!(history.current_index(), Some(0));

        assert_eq!(history.redo(), Some(&s2));
        assert_eq!(history.redo(), Some(&s3));
        assert_eq!(history.redo(), None);
        assert_eq!(history.current_index(), Some(2));
    }

    #[test]
    fn test_save_after_undo_truncates_future() {
        let (s1, s2, s3) = three_states();
        let s4 = EditorSnapshot::new("z", 0, true);
        let mut history = History::new();
        history.save(s1.clone());
        history.save(s2);
        history.save(s3);
        history.undo();
        history.undo();
        assert_eq!(history.current(), Some(&s1));

        history.save(s4.clone());
        assert_eq!(history.len(), 2);
        assert_eq!(history.current(), Some(&s4));
        assert!(!history.can_redo());

        assert_eq!(history.redo(), None);
        assert_eq!(history.undo(), Some(&s1));
        assert_eq!(history.redo(), Some(&s4));
        assert_eq!(history.iter().cloned().collect::<Vec<_>>(), vec![s1, s4]);
    }

    #[test]
    fn test_repeated_boundary_calls_do_not_move() {
        let (s1, s2, _) = three_states();
        let mut history = History::new();
        history.save(s1);
        history.save(s2);

        history.undo();
        for _ in 0..5 {
            assert_eq!(history.undo(), None);
            assert_eq!(history.current_index(), Some(0));
        }

        history.redo();
        for _ in 0..5 {
            assert_eq!(history.redo(), None);
            assert_eq!(history.current_index(), Some(1));
        }
    }

    #[test]
    fn test_can_undo_can_redo() {
        let (s1, s2, s3) = three_states();
        let mut history = History::new();
        history.save(s1);
        assert!(!history.can_undo());
        history.save(s2);
        history.save(s3);
        assert!(history.can_undo());
        assert!(!history.can_redo());

        history.undo();
        assert!(history.can_undo());
        assert!(history.can_redo());

        history.undo();
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn test_clear() {
        let (s1, s2, _) = three_states();
        let mut history = History::new();
        history.save(s1);
        history.save(s2.clone());
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.current_index(), None);
        assert_eq!(history.undo(), None);

        history.save(s2.clone());
        assert_eq!(history.current(), Some(&s2));
    }

    #[test]
    fn test_bounded_history_evicts_oldest() {
        let max = NonZeroUsize::new(2).unwrap();
        let mut history = History::with_config(max);
        history.save(1);
        history.save(2);
        history.save(3);

        assert_eq!(history.config(), HistoryConfig::bounded(max));
        assert_eq!(history.len(), 2);
        assert_eq!(history.current(), Some(&3));
        assert_eq!(history.undo(), Some(&2));
        assert_eq!(history.undo(), None);
        assert_eq!((&history).into_iter().copied().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_bounded_history_truncates_before_evicting() {
        let max = NonZeroUsize::new(3).unwrap();
        let mut history = History::with_config(HistoryConfig::bounded(max));
        history.save(1);
        history.save(2);
        history.save(3);
        history.undo();
        history.undo();

        // Truncation makes room, so nothing is evicted.
        history.save(4);
        assert_eq!(history.iter().copied().collect::<Vec<_>>(), vec![1, 4]);
        assert_eq!(history.current_index(), Some(1));
    }

    #[test]
    fn test_debug_format() {
        let mut history = History::new();
        history.save("a");
        history.save("b");
        assert_eq!(
            format!("{history:?}"),
            "History [index: Some(1) | versions: 2 | max: None]"
        );
    }
}
