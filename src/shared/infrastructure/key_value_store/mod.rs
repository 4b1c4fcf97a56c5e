use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyValueStoreError {
    #[error("storage backend offline")]
    Offline,

    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Asynchronous byte store addressed by string keys.
///
/// A missing key is `Ok(None)`, never an error.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<Vec<u8>>, KeyValueStoreError>;
    async fn set_item(&self, key: &str, value: &[u8]) -> Result<(), KeyValueStoreError>;
}

pub mod file;
pub mod in_memory;
