//! Publish/subscribe abstraction for change notifications.
//!
//! The bus is how the dataset tells the outside world that it changed. It makes
//! minimal assumptions:
//!
//! - **Transport-agnostic**: in-memory channels today, anything else tomorrow
//! - **Broadcast**: every subscriber gets its own copy of every message
//! - **No persistence**: a subscriber that was not listening when a message was
//!   published never sees it
//! - **Fire and forget**: publishing never waits for subscribers to react
//!
//! Messages carry the full read-only dataset, so a subscriber that misses one
//! message loses nothing: the next message describes the complete state again.

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// A subscription to a message stream.
///
/// ## Usage Pattern
///
/// ```ignore
/// let subscription = bus.subscribe();
///
/// loop {
///     match subscription.recv_timeout(Duration::from_millis(100)) {
///         Ok(change) => refresh(change),
///         Err(std::sync::mpsc::RecvTimeoutError::Timeout) => continue,
///         Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
///     }
/// }
/// ```
///
/// Subscriptions are designed for single-threaded consumption. Messages arrive
/// in publication order.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, std::sync::mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Drain every message that is already queued, oldest first.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Pub/sub contract.
///
/// ```text
/// mutation succeeds → publish(change) → subscribers
///                                        ├─ UI refresh
///                                        └─ persistence
/// ```
///
/// `publish()` can fail (e.g. a poisoned lock). The publisher decides whether
/// that matters; the dataset treats notification failure as non-fatal because
/// the mutation itself has already succeeded.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
