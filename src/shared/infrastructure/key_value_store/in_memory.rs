use crate::shared::infrastructure::key_value_store::{KeyValueStore, KeyValueStoreError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryKeyValueStore {
    inner: RwLock<HashMap<String, Vec<u8>>>,
    is_offline: AtomicBool,
    delay_set_ms: AtomicU64,
    writes: AtomicU64,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: impl Into<Vec<u8>>) -> Self {
        Self {
            inner: RwLock::new(HashMap::from([(key.to_string(), value.into())])),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub fn set_delay_set_ms(&self, ms: u64) {
        self.delay_set_ms.store(ms, Ordering::SeqCst);
    }

    /// Number of successful `set_item` calls so far.
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    fn ensure_online(&self) -> Result<(), KeyValueStoreError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(KeyValueStoreError::Offline);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<Vec<u8>>, KeyValueStoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &[u8]) -> Result<(), KeyValueStoreError> {
        self.ensure_online()?;
        let delay = self.delay_set_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        self.inner
            .write()
            .await
            .insert(key.to_string(), value.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
