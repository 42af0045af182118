//! `tablebook-store`: the versioned, multi-entity dataset.
//!
//! ```text
//! command ─► Model (ModelManager)
//!              ├─ Book            six UniqueLists, all-or-nothing mutations
//!              ├─ VersionedBook   snapshot history + cursor (commit/undo/redo)
//!              └─ EventBus        BookChanged after every successful change
//! ```
//!
//! Mutations never commit implicitly: callers mutate, then call `commit()`.
//! Undo/redo always move the whole dataset, never a single collection.

pub mod book;
pub mod change;
pub mod model;
pub mod versioned;

pub use book::{Book, ReadOnlyBook};
pub use change::{BookChanged, ChangeKind};
pub use model::{Model, ModelEntity, ModelManager};
pub use versioned::VersionedBook;
