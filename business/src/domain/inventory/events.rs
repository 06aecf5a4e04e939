use crate::domain::product::value_objects::ProductId;

/// User-facing confirmation emitted after each inventory mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryEvent {
    ProductAdded { name: String },
    ProductRemoved { id: ProductId },
    InventoryCleared,
}

impl InventoryEvent {
    pub fn title(&self) -> &'static str {
        match self {
            InventoryEvent::ProductAdded { .. } => "Product Added",
            InventoryEvent::ProductRemoved { .. } => "Product Removed",
            InventoryEvent::InventoryCleared => "Inventory Cleared",
        }
    }

    pub fn description(&self) -> String {
        match self {
            InventoryEvent::ProductAdded { name } => {
                format!("{} has been added to your inventory.", name)
            }
            InventoryEvent::ProductRemoved { .. } => {
                "Product has been removed from your inventory.".to_string()
            }
            InventoryEvent::InventoryCleared => "All products have been removed.".to_string(),
        }
    }

    /// Removals and clears are shown as destructive confirmations.
    pub fn is_destructive(&self) -> bool {
        !matches!(self, InventoryEvent::ProductAdded { .. })
    }
}

/// Port through which the store announces mutations to whoever presents them.
pub trait InventoryNotifier: Send + Sync {
    fn notify(&self, event: InventoryEvent);
}
