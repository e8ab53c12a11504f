// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Configure the tracing logging to suit your needs. You can display the logs to a:
/// 1. file,
/// 2. stdout or stderr,
/// 3. both.
///
/// This configuration also allows you to set the log level, and whether the subscriber
/// is installed for the whole process or only for the current thread.
///
/// You can use [`crate::init_tracing`] to initialize the tracing system with this
/// configuration.
///
/// Fields:
/// - `scope`: [`TracingScope`] to choose between a global or thread local subscriber.
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] - The log level to use for tracing.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TracingConfig {
    pub scope: TracingScope,
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// - `Global`: set once per process, can't be unset or changed. This is great for apps.
/// - `ThreadLocal`: set for the current thread until the returned guard is dropped. This
///   is great for tests.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TracingScope {
    #[default]
    Global,
    ThreadLocal,
}

/// - `tracing_log_file_path`: [String] is the file path to use for the log file. Eg:
///   `/tmp/snapshot_demo.log` or `log.txt`.
/// - `DisplayPreference`: [`DisplayPreference`] is the preferred display to use for
///   logging.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference /* Stdout, Stderr */),
    File(String /* tracing_log_file_path */),
    DisplayAndFile(DisplayPreference, String /* tracing_log_file_path */),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    /// Log to both the given [`DisplayPreference`] and a file.
    #[must_use]
    pub fn new_file_and_display(
        filename: Option<String>,
        preferred_display: DisplayPreference,
    ) -> Self {
        Self {
            scope: TracingScope::Global,
            writer_config: WriterConfig::DisplayAndFile(
                preferred_display,
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            scope: TracingScope::Global,
            writer_config: WriterConfig::Display(preferred_display),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_file(filename: Option<String>) -> Self {
        Self {
            scope: TracingScope::Global,
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn with_scope(mut self, scope: TracingScope) -> Self {
        self.scope = scope;
        self
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}
