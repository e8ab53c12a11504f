// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher;
use tracing_core::LevelFilter;

use super::{DEFAULT_LOG_FILE_NAME, DisplayPreference, TracingConfig, TracingScope,
            WriterConfig, init_tracing};
use crate::ok;

/// Instead of having lots of arguments to [`try_initialize_logging_global`] and
/// [`try_initialize_logging_thread_local`], they both receive a type that implements
/// [`Into<TracingConfig>`]. Here are some examples of what is possible:
///
/// ```no_run
/// use snapshot_history::{DisplayPreference, TracingConfig, WriterConfig,
///                        try_initialize_logging_global};
///
/// let level_filter = tracing_core::LevelFilter::DEBUG;
/// let config_1: TracingConfig = level_filter.into();
///
/// let preferred_display = DisplayPreference::Stdout;
/// let config_2: TracingConfig = preferred_display.into();
///
/// let writer_config = WriterConfig::File("history.log".to_string());
/// let config_3: TracingConfig = writer_config.into();
///
/// try_initialize_logging_global(config_3).unwrap();
/// ```
mod tracing_config_options {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl From<LevelFilter> for TracingConfig {
        fn from(level_filter: LevelFilter) -> Self {
            Self {
                scope: TracingScope::Global,
                level_filter,
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<DisplayPreference> for TracingConfig {
        fn from(preferred_display: DisplayPreference) -> Self {
            Self {
                scope: TracingScope::Global,
                level_filter: LevelFilter::DEBUG,
                writer_config: WriterConfig::Display(preferred_display),
            }
        }
    }

    impl From<WriterConfig> for TracingConfig {
        fn from(writer_config: WriterConfig) -> Self {
            Self {
                scope: TracingScope::Global,
                level_filter: LevelFilter::DEBUG,
                writer_config,
            }
        }
    }
}

/// Global default subscriber, which once set, can't be unset or changed.
/// - This is great for apps.
/// - Configure this using any type that converts [`Into<TracingConfig>`]. A bare
///   [`LevelFilter`] logs to [`DEFAULT_LOG_FILE_NAME`].
///
/// Logging is **DISABLED** by **default**. If you don't call this function w/ a value
/// other than [`LevelFilter::OFF`], then logging won't be enabled, and the
/// [`tracing::info!`], [`tracing::debug!`], etc. macros are no-ops.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or a global subscriber is already
/// set.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it = TracingConfig {
        scope: TracingScope::Global,
        ..options.into()
    };

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return ok!();
    }

    init_tracing(it)?;
    ok!()
}

/// Thread local subscriber, which is thread local, and you can assign different ones
/// to different threads.
/// - This is great for tests.
/// - Drop the returned guard to restore the previous subscriber for this thread.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it = TracingConfig {
        scope: TracingScope::ThreadLocal,
        ..options.into()
    };

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(None);
    }

    init_tracing(it)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;

    #[test]
    fn test_from_level_filter() {
        let it: TracingConfig = LevelFilter::INFO.into();
        assert_eq!(it.level_filter, LevelFilter::INFO);
        assert_eq!(
            it.writer_config,
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );
    }

    #[test]
    fn test_from_display_preference() {
        let it: TracingConfig = DisplayPreference::Stderr.into();
        assert_eq!(it.writer_config, WriterConfig::Display(DisplayPreference::Stderr));
        assert_eq!(it.scope, TracingScope::Global);
    }

    #[test]
    fn test_off_is_a_no_op() {
        let guard = try_initialize_logging_thread_local(LevelFilter::OFF).unwrap();
        assert!(guard.is_none());
    }

    #[test]
    #[serial]
    fn test_thread_local_guard() {
        let guard = try_initialize_logging_thread_local(TracingConfig::new_display(
            DisplayPreference::Stderr,
        ))
        .unwrap();
        assert!(guard.is_some());
        tracing::debug!(message = "logging to stderr");
        drop(guard);
    }
}
