// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A plain last-in, first-out stack of checkpoints. This is what a memento caretaker
/// needs when it only ever restores the most recently saved state.
///
/// Unlike [`super::History`] there is no cursor and no redo: [`UndoStack::pop`] hands the
/// snapshot back to the caller and forgets it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UndoStack<S> {
    checkpoints: Vec<S>,
}

impl<S> Default for UndoStack<S> {
    fn default() -> Self {
        Self {
            checkpoints: Vec::new(),
        }
    }
}

impl<S> UndoStack<S> {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, snapshot: S) {
        self.checkpoints.push(snapshot);
        tracing::trace!(message = "push", len = self.checkpoints.len());
    }

    /// Remove and return the most recently pushed snapshot, or [`None`] if the stack is
    /// empty.
    pub fn pop(&mut self) -> Option<S> {
        let it = self.checkpoints.pop();
        tracing::trace!(message = "pop", len = self.checkpoints.len());
        it
    }

    #[must_use]
    pub fn peek(&self) -> Option<&S> { self.checkpoints.last() }

    #[must_use]
    pub fn len(&self) -> usize { self.checkpoints.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.checkpoints.is_empty() }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Game, GameSnapshot};

    #[test]
    fn test_pop_is_lifo() {
        let mut stack = UndoStack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.peek(), Some(&3));
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_restore_last_checkpoint() {
        let mut game = Game::default();
        let mut stack = UndoStack::new();
        stack.push(game.save());

        game.play(2, 90, "Enchanted Forest");
        stack.push(game.save());

        game.play(3, 70, "Dark Cave");
        stack.push(game.save());

        game.play(4, 60, "Dragon Castle");
        let checkpoint = stack.pop().unwrap();
        game.restore(&checkpoint);

        assert_eq!(game.save(), GameSnapshot::new(3, 70, "Dark Cave"));
        assert_eq!(stack.len(), 2);
    }
}
