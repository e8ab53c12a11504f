// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod editor_snapshot;
pub mod game_snapshot;
pub mod snapshot_trait;

// Re-export.
pub use editor_snapshot::*;
pub use game_snapshot::*;
pub use snapshot_trait::*;
