// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod cur_index;
pub mod history_config;
pub mod history_struct;
pub mod undo_stack;

// Re-export.
pub use cur_index::*;
pub use history_config::*;
pub use history_struct::*;
pub use undo_stack::*;
