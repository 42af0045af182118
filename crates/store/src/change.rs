//! Change notification published after every successful dataset change.

use chrono::{DateTime, Utc};

use tablebook_events::Event;

use crate::book::Book;

/// What happened to the dataset.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Removed,
    Updated,
    /// The whole content was replaced.
    Reset,
    Undone,
    Redone,
}

/// The dataset changed.
///
/// Carries the complete read-only dataset as it stands after the change, so
/// subscribers never have to query back.
#[derive(Debug, Clone)]
pub struct BookChanged {
    pub book: Book,
    pub kind: ChangeKind,
    /// Entity kind touched by an add/remove/update; `None` for whole-book changes.
    pub entity: Option<&'static str>,
    pub occurred_at: DateTime<Utc>,
}

impl BookChanged {
    pub fn new(book: Book, kind: ChangeKind, entity: Option<&'static str>) -> Self {
        Self {
            book,
            kind,
            entity,
            occurred_at: Utc::now(),
        }
    }
}

impl Event for BookChanged {
    fn event_type(&self) -> &'static str {
        match self.kind {
            ChangeKind::Added => "book.entity.added",
            ChangeKind::Removed => "book.entity.removed",
            ChangeKind::Updated => "book.entity.updated",
            ChangeKind::Reset => "book.reset",
            ChangeKind::Undone => "book.undone",
            ChangeKind::Redone => "book.redone",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
