use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::BookingEvent;

/// In-process event bus backed by `tokio::broadcast`.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: Arc<broadcast::Sender<BookingEvent>>,
}

impl EventBus {
    /// Create a new event bus with the given channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Publish an event to all current subscribers, returning how many
    /// received it. Publishing with no subscribers is not an error.
    pub fn publish(&self, event: BookingEvent) -> usize {
        match self.sender.send(event) {
            Ok(receivers) => receivers,
            Err(broadcast::error::SendError(event)) => {
                tracing::trace!(?event, "no subscribers for booking event");
                0
            }
        }
    }

    /// Subscribe to the event stream.
    pub fn subscribe(&self) -> broadcast::Receiver<BookingEvent> {
        self.sender.subscribe()
    }

    /// Number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(1024)
    }
}
