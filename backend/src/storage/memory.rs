use anyhow::Result;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::storage::traits::KeyValueStorage;

/// In-memory key-value storage.
///
/// Clones share the same map, so a test can hand one clone to a store and
/// inspect or corrupt the persisted blob through another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    values: Arc<Mutex<BTreeMap<String, String>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.values
            .lock()
            .map_err(|_| anyhow::anyhow!("In-memory storage lock poisoned"))
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn put_value(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get_value(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }
}
