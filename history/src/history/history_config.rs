// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::num::NonZeroUsize;

/// Configure a [`super::History`].
///
/// - `max_versions`: when `None` (the default) the history is unbounded and entries are
///   only ever removed by truncation on save. When `Some(n)`, saving a version that
///   makes the history longer than `n` evicts the oldest version, so the history behaves
///   like a ring buffer of the `n` most recent versions.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct HistoryConfig {
    pub max_versions: Option<NonZeroUsize>,
}

impl HistoryConfig {
    #[must_use]
    pub fn unbounded() -> Self { Self::default() }

    #[must_use]
    pub fn bounded(max_versions: NonZeroUsize) -> Self {
        Self {
            max_versions: Some(max_versions),
        }
    }
}

impl From<NonZeroUsize> for HistoryConfig {
    fn from(max_versions: NonZeroUsize) -> Self { Self::bounded(max_versions) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        assert_eq!(HistoryConfig::default(), HistoryConfig::unbounded());
        assert_eq!(HistoryConfig::unbounded().max_versions, None);
    }

    #[test]
    fn test_bounded_from_non_zero() {
        let max = NonZeroUsize::new(5).unwrap();
        let it: HistoryConfig = max.into();
        assert_eq!(it, HistoryConfig::bounded(max));
        assert_eq!(it.max_versions.map(NonZeroUsize::get), Some(5));
    }
}
