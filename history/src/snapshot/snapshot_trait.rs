// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

/// A fully populated, immutable, point-in-time copy of some tracked state. Values of this
/// type are stored in a [`crate::History`] or an [`crate::UndoStack`].
///
/// Implementors keep their fields private and only expose read accessors. The only way
/// to "change" a snapshot is to derive a new one from it using [`Self::derive_with`].
///
/// # Overrides
///
/// [`Self::Overrides`] has one [`Option`] per field of the snapshot:
/// - `None` means "copy this field from the source snapshot".
/// - `Some(value)` means "use `value`", even when `value` is `0`, `false`, or an empty
///   string.
///
/// So [`Default::default`] for the overrides type is "change nothing", and deriving with
/// it produces a value that is equal to the source.
pub trait Snapshot: Clone + PartialEq + Debug {
    type Overrides: Default + Debug;

    /// Produce a new snapshot where every field that is set in `overrides` takes the
    /// supplied value, and every other field is copied from `self`. `self` is not
    /// modified.
    #[must_use]
    fn derive_with(&self, overrides: Self::Overrides) -> Self;
}
