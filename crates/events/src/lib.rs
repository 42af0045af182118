//! Change notifications: the event contract and the pub/sub transport.
//!
//! The dataset never renders or persists anything itself. It publishes
//! messages on an [`EventBus`] and collaborators (UI refresh, persistence)
//! subscribe to them.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
