// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use super::Snapshot;

pub const DEFAULT_LEVEL: u32 = 1;
pub const DEFAULT_HEALTH: u32 = 1000;
pub const DEFAULT_POSITION: &str = "Start";

/// A saved game checkpoint (a memento of a [`Game`]).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GameSnapshot {
    level: u32,
    health: u32,
    position: String,
}

impl GameSnapshot {
    pub fn new(level: u32, health: u32, position: impl Into<String>) -> Self {
        Self {
            level,
            health,
            position: position.into(),
        }
    }

    #[must_use]
    pub fn level(&self) -> u32 { self.level }

    #[must_use]
    pub fn health(&self) -> u32 { self.health }

    #[must_use]
    pub fn position(&self) -> &str { &self.position }
}

/// Per-field overrides for [`GameSnapshot::derive_with`].
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct GameSnapshotOverrides {
    pub level: Option<u32>,
    pub health: Option<u32>,
    pub position: Option<String>,
}

impl GameSnapshotOverrides {
    #[must_use]
    pub fn level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use]
    pub fn health(mut self, health: u32) -> Self {
        self.health = Some(health);
        self
    }

    #[must_use]
    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }
}

impl Snapshot for GameSnapshot {
    type Overrides = GameSnapshotOverrides;

    fn derive_with(&self, overrides: Self::Overrides) -> Self {
        Self {
            level: overrides.level.unwrap_or(self.level),
            health: overrides.health.unwrap_or(self.health),
            position: overrides
                .position
                .unwrap_or_else(|| self.position.clone()),
        }
    }
}

impl Display for GameSnapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "level: {}, health: {}, position: {}",
            self.level, self.health, self.position
        )
    }
}

/// The live game state. This is the originator: it can [`Game::save`] itself into a
/// [`GameSnapshot`] and [`Game::restore`] itself from one.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Game {
    level: u32,
    health: u32,
    position: String,
}

impl Default for Game {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            health: DEFAULT_HEALTH,
            position: DEFAULT_POSITION.to_string(),
        }
    }
}

impl Game {
    #[must_use]
    pub fn level(&self) -> u32 { self.level }

    #[must_use]
    pub fn health(&self) -> u32 { self.health }

    #[must_use]
    pub fn position(&self) -> &str { &self.position }

    /// Advance the game to a new level, health, and position.
    pub fn play(&mut self, level: u32, health: u32, position: impl Into<String>) {
        self.level = level;
        self.health = health;
        self.position = position.into();
        tracing::debug!(message = "play", game = %self);
    }

    #[must_use]
    pub fn save(&self) -> GameSnapshot {
        GameSnapshot::new(self.level, self.health, self.position.clone())
    }

    pub fn restore(&mut self, snapshot: &GameSnapshot) {
        self.level = snapshot.level();
        self.health = snapshot.health();
        self.position = snapshot.position().to_string();
        tracing::debug!(message = "restore", game = %self);
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "level: {}, health: {}, position: {}",
            self.level, self.health, self.position
        )
    }
}
