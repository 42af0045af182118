//! `tablebook-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, the identity contract every record implements, shared
//! validated value objects and the generic uniqueness-enforcing collection.

pub mod entity;
pub mod error;
pub mod unique_list;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use unique_list::UniqueList;
pub use value_object::{Name, Price, Remark, Tag, ValueObject};
