use chrono::{DateTime, Utc};

/// A domain-agnostic notification.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **versioned** (schema evolution)
/// - cheap to clone, since every subscriber receives its own copy
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "book.entity.added").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the change happened (wall-clock time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
