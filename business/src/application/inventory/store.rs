use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Mutex;

use crate::domain::clock::Clock;
use crate::domain::inventory::codec::{deserialize_products, serialize_products};
use crate::domain::inventory::events::{InventoryEvent, InventoryNotifier};
use crate::domain::inventory::model::InventoryStats;
use crate::domain::inventory::repository::{INVENTORY_STORAGE_KEY, KeyValueStore};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::status::{NEAR_EXPIRY_THRESHOLD_DAYS, ProductStatus};
use crate::domain::product::value_objects::ProductId;

#[derive(Default)]
struct InventoryState {
    products: Arc<Vec<Product>>,
    loaded: bool,
}

/// Owner of the product collection.
///
/// Every mutation replaces the collection with a new snapshot and writes the
/// whole thing back to the key-value store. Storage failures are logged and
/// swallowed: the in-memory collection stays authoritative.
///
/// The persisted list is read once, before anything else touches the
/// collection. Callers may invoke [`InventoryStore::load`] eagerly; otherwise
/// the first operation loads it.
pub struct InventoryStore {
    storage: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn InventoryNotifier>,
    clock: Arc<dyn Clock>,
    logger: Arc<dyn Logger>,
    near_expiry_threshold_days: i64,
    state: Mutex<InventoryState>,
}

impl InventoryStore {
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn InventoryNotifier>,
        clock: Arc<dyn Clock>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            storage,
            notifier,
            clock,
            logger,
            near_expiry_threshold_days: NEAR_EXPIRY_THRESHOLD_DAYS,
            state: Mutex::new(InventoryState::default()),
        }
    }

    pub fn with_near_expiry_threshold(mut self, days: i64) -> Self {
        self.near_expiry_threshold_days = days;
        self
    }

    pub fn near_expiry_threshold_days(&self) -> i64 {
        self.near_expiry_threshold_days
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Reads the persisted inventory. Only the first call does any work.
    pub async fn load(&self) {
        let mut state = self.state.lock().await;
        self.ensure_loaded(&mut state).await;
    }

    pub async fn is_loaded(&self) -> bool {
        self.state.lock().await.loaded
    }

    pub async fn add(&self, props: NewProductProps) -> Result<Product, ProductError> {
        let product = Product::new(props)?;

        {
            let mut state = self.state.lock().await;
            self.ensure_loaded(&mut state).await;

            let mut next = state.products.as_ref().clone();
            next.push(product.clone());
            self.replace(&mut state, next).await;
        }

        self.logger.info(&format!(
            "Product added: {} ({})",
            product.name, product.id
        ));
        self.notifier.notify(InventoryEvent::ProductAdded {
            name: product.name.clone(),
        });
        Ok(product)
    }

    /// Removes the product with the given id. Returns whether it was present;
    /// an unknown id is not an error.
    pub async fn remove(&self, id: &ProductId) -> bool {
        let removed = {
            let mut state = self.state.lock().await;
            self.ensure_loaded(&mut state).await;

            let next: Vec<Product> = state
                .products
                .iter()
                .filter(|p| &p.id != id)
                .cloned()
                .collect();
            let removed = next.len() != state.products.len();
            self.replace(&mut state, next).await;
            removed
        };

        if removed {
            self.logger.info(&format!("Product removed: {}", id));
        } else {
            self.logger
                .debug(&format!("Remove ignored, product not in inventory: {}", id));
        }
        self.notifier
            .notify(InventoryEvent::ProductRemoved { id: id.clone() });
        removed
    }

    pub async fn clear(&self) {
        {
            let mut state = self.state.lock().await;
            self.ensure_loaded(&mut state).await;
            self.replace(&mut state, Vec::new()).await;
        }

        self.logger.info("Inventory cleared");
        self.notifier.notify(InventoryEvent::InventoryCleared);
    }

    /// Current collection, in insertion order.
    pub async fn products(&self) -> Arc<Vec<Product>> {
        let mut state = self.state.lock().await;
        self.ensure_loaded(&mut state).await;
        Arc::clone(&state.products)
    }

    /// Current collection, soonest expiry first.
    pub async fn products_by_expiry(&self) -> Vec<Product> {
        let mut products = self.products().await.as_ref().clone();
        products.sort_by_key(|p| p.exp_date);
        products
    }

    /// Products near expiry as of `today`, soonest first. These are the ones
    /// worth asking the recommendation service about.
    pub async fn near_expiry_products(&self, today: NaiveDate) -> Vec<Product> {
        let mut products: Vec<Product> = self
            .products()
            .await
            .iter()
            .filter(|p| {
                p.status(today, self.near_expiry_threshold_days) == ProductStatus::NearExpiry
            })
            .cloned()
            .collect();
        products.sort_by_key(|p| p.exp_date);
        products
    }

    pub async fn find(&self, id: &ProductId) -> Option<Product> {
        self.products().await.iter().find(|p| &p.id == id).cloned()
    }

    pub async fn stats(&self) -> InventoryStats {
        let products = self.products().await;
        InventoryStats::from_products(
            &products,
            self.clock.today(),
            self.near_expiry_threshold_days,
        )
    }

    async fn ensure_loaded(&self, state: &mut InventoryState) {
        if state.loaded {
            return;
        }

        state.products = Arc::new(self.read_persisted().await);
        state.loaded = true;
    }

    async fn read_persisted(&self) -> Vec<Product> {
        match self.storage.get(INVENTORY_STORAGE_KEY).await {
            Ok(Some(raw)) => match deserialize_products(&raw) {
                Ok(products) => {
                    self.logger.info(&format!(
                        "Loaded {} products from storage",
                        products.len()
                    ));
                    products
                }
                Err(e) => {
                    self.logger.error(&format!(
                        "Failed to load inventory from storage, starting empty: {}",
                        e
                    ));
                    Vec::new()
                }
            },
            Ok(None) => {
                self.logger
                    .debug("No persisted inventory found, starting empty");
                Vec::new()
            }
            Err(e) => {
                self.logger.error(&format!(
                    "Failed to load inventory from storage, starting empty: {}",
                    e
                ));
                Vec::new()
            }
        }
    }

    async fn replace(&self, state: &mut InventoryState, products: Vec<Product>) {
        state.products = Arc::new(products);
        self.persist(&state.products).await;
    }

    async fn persist(&self, products: &[Product]) {
        let result = match serialize_products(products) {
            Ok(raw) => self.storage.set(INVENTORY_STORAGE_KEY, &raw).await,
            Err(e) => Err(e),
        };

        if let Err(e) = result {
            self.logger
                .error(&format!("Failed to save inventory to storage: {}", e));
        }
    }
}
