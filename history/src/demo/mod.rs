// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The scenarios run by the `snapshot_demo` binary. Each one writes to any
//! [`std::io::Write`] so that it can be tested without spawning a process.

// Attach.
pub mod clap_config;
pub mod editor_demo;
pub mod game_demo;
pub mod vending_demo;

// Re-export.
pub use clap_config::*;
pub use editor_demo::*;
pub use game_demo::*;
pub use vending_demo::*;
