//! Fakes shared by the use case tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::application::inventory::store::InventoryStore;
use crate::domain::clock::FixedClock;
use crate::domain::errors::RepositoryError;
use crate::domain::inventory::events::{InventoryEvent, InventoryNotifier};
use crate::domain::inventory::repository::KeyValueStore;
use crate::domain::logger::Logger;
use crate::domain::product::model::NewProductProps;

#[derive(Default)]
pub struct MemoryStorage {
    pub entries: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl KeyValueStore for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub events: Mutex<Vec<InventoryEvent>>,
}

impl InventoryNotifier for RecordingNotifier {
    fn notify(&self, event: InventoryEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub struct SilentLogger;

impl Logger for SilentLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn store_on(today: NaiveDate) -> Arc<InventoryStore> {
    Arc::new(InventoryStore::new(
        Arc::new(MemoryStorage::default()),
        Arc::new(RecordingNotifier::default()),
        Arc::new(FixedClock(today)),
        Arc::new(SilentLogger),
    ))
}

pub fn product_expiring(name: &str, exp_date: NaiveDate) -> NewProductProps {
    NewProductProps {
        name: name.to_string(),
        batch_id: "LOT-1".to_string(),
        quantity: 3,
        mfg_date: date(2024, 1, 1),
        exp_date,
    }
}
