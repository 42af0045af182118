//! Linear snapshot history over a [`Book`].
//!
//! ```text
//! history:  [ S0 ][ S1 ][ S2 ][ S3 ]
//!                        ▲
//!                      cursor          current == history[cursor]
//!
//! commit  → drop S3, push S2', cursor = 3
//! undo    → cursor = 1, current = S1
//! redo    → cursor = 3, current = S3
//! ```
//!
//! Snapshots are `Book` clones. Because collections are copy-on-write, a commit
//! only duplicates the collections that changed since the previous snapshot.

use tablebook_core::{DomainError, DomainResult};

use crate::book::Book;

/// A [`Book`] with commit/undo/redo.
///
/// # Invariants
/// - `history` is never empty and `cursor < history.len()`.
/// - After `new`, `commit`, `undo`, `redo` and `reset_history` return,
///   `history[cursor] == current`.
/// - Between those calls `current` may run ahead of `history[cursor]`
///   (uncommitted mutations).
#[derive(Debug, Clone)]
pub struct VersionedBook {
    current: Book,
    history: Vec<Book>,
    cursor: usize,
}

impl VersionedBook {
    pub fn new(initial: Book) -> Self {
        Self {
            history: vec![initial.clone()],
            current: initial,
            cursor: 0,
        }
    }

    pub fn current(&self) -> &Book {
        &self.current
    }

    /// Mutable access to the live book. Changes are not recorded until [`commit`](Self::commit).
    pub fn current_mut(&mut self) -> &mut Book {
        &mut self.current
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Record the live book as the newest state, discarding any redoable states.
    pub fn commit(&mut self) {
        let discarded = self.history.len() - (self.cursor + 1);
        self.history.truncate(self.cursor + 1);
        self.history.push(self.current.clone());
        self.cursor += 1;

        tracing::debug!(
            cursor = self.cursor,
            history_len = self.history.len(),
            discarded,
            "committed book state"
        );
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    /// Restore the previous state.
    pub fn undo(&mut self) -> DomainResult<()> {
        if !self.can_undo() {
            return Err(DomainError::NoUndoableState);
        }
        self.cursor -= 1;
        self.current = self.history[self.cursor].clone();

        tracing::debug!(cursor = self.cursor, history_len = self.history.len(), "undid book state");
        Ok(())
    }

    /// Restore the state undone most recently.
    pub fn redo(&mut self) -> DomainResult<()> {
        if !self.can_redo() {
            return Err(DomainError::NoRedoableState);
        }
        self.cursor += 1;
        self.current = self.history[self.cursor].clone();

        tracing::debug!(cursor = self.cursor, history_len = self.history.len(), "redid book state");
        Ok(())
    }

    /// Collapse history to a single state: the live book.
    ///
    /// When everything is committed this is `history[cursor]`. Uncommitted
    /// changes are folded in rather than dropped. Nothing is undoable or
    /// redoable afterwards; the live book is untouched.
    pub fn reset_history(&mut self) {
        self.history = vec![self.current.clone()];
        self.cursor = 0;

        tracing::debug!("collapsed book history");
    }
}

impl Default for VersionedBook {
    fn default() -> Self {
        Self::new(Book::default())
    }
}
