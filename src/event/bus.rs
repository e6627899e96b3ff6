use tokio::sync::broadcast;
use tracing::debug;

use super::events::LedgerEvent;

/// Broadcast channel carrying ledger change notifications.
///
/// The recorder emits after every durable commit; presentation layers
/// subscribe and re-pull whichever views they care about. The bus does
/// not assume any particular downstream transport.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<LedgerEvent>,
}

impl EventBus {
    /// Creates a new event bus with the given channel capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Emits an event to all current subscribers
    pub fn emit(&self, event: LedgerEvent) {
        match self.sender.send(event) {
            Ok(receiver_count) => {
                debug!(receivers = receiver_count, "Ledger event emitted");
            }
            Err(broadcast::error::SendError(event)) => {
                debug!(
                    event_type = event.event_type(),
                    "Ledger event emitted with no receivers"
                );
            }
        }
    }

    /// Subscribe to ledger change notifications
    pub fn subscribe(&self) -> broadcast::Receiver<LedgerEvent> {
        self.sender.subscribe()
    }
}
