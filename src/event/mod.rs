// Change-notification infrastructure: a broadcast bus decoupling the
// write path from whatever transport presentation layers listen on.

// Public API
pub use bus::EventBus;
pub use events::LedgerEvent;

mod bus;
mod events;
