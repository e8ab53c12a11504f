// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod machine_state;
pub mod vending_machine_error;
pub mod vending_machine_struct;

// Re-export.
pub use machine_state::*;
pub use vending_machine_error::*;
pub use vending_machine_struct::*;
