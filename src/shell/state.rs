use crate::modules::cart::adapters::inbound::provider::CartProvider;
use crate::shared::infrastructure::key_value_store::file::FileKeyValueStore;
use crate::shell::config::CartConfig;
use std::sync::Arc;

pub type FileCartProvider = CartProvider<FileKeyValueStore>;

pub async fn mount(config: &CartConfig) -> FileCartProvider {
    let storage = Arc::new(FileKeyValueStore::new(&config.data_dir));
    CartProvider::mount(storage).await
}
