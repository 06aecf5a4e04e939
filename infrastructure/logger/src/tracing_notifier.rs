use business::domain::inventory::events::{InventoryEvent, InventoryNotifier};
use tracing::{info, warn};

/// Publishes inventory confirmations as structured `tracing` events.
///
/// Destructive confirmations (removals, clears) are emitted at warn level so
/// they stand out in the log stream.
pub struct TracingNotifier;

impl InventoryNotifier for TracingNotifier {
    fn notify(&self, event: InventoryEvent) {
        let title = event.title();
        let description = event.description();
        if event.is_destructive() {
            warn!(target: "inventory::events", title = title, "{}", description);
        } else {
            info!(target: "inventory::events", title = title, "{}", description);
        }
    }
}
