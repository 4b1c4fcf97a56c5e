// Scoped access to a cart store.
//
// A `CartProvider` owns the store for as long as it is mounted. Consumers never hold the store
// directly; they receive `CartHandle`s that only reach it while the provider is alive. Any call
// through a handle whose provider is gone, or that never had one, fails with
// `CartError::NotAvailable` before touching storage.

use crate::modules::cart::core::line_item::NewLineItem;
use crate::modules::cart::core::state::CartState;
use crate::modules::cart::use_cases::update_cart::handler::{CartError, CartStore};
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use std::sync::{Arc, Weak};
use tokio::sync::watch;

pub struct CartProvider<TStorage>
where
    TStorage: KeyValueStore + 'static,
{
    store: Arc<CartStore<TStorage>>,
}

impl<TStorage> CartProvider<TStorage>
where
    TStorage: KeyValueStore + 'static,
{
    pub async fn mount(storage: Arc<TStorage>) -> Self {
        let store = CartStore::hydrate(storage).await;
        tracing::info!(items = store.products().len(), "cart provider mounted");
        Self {
            store: Arc::new(store),
        }
    }

    pub fn handle(&self) -> CartHandle<TStorage> {
        CartHandle {
            store: Arc::downgrade(&self.store),
        }
    }

    /// Drop the in-memory cart. The persisted copy stays in storage.
    pub fn unmount(self) {
        tracing::info!("cart provider unmounted");
    }
}

pub struct CartHandle<TStorage>
where
    TStorage: KeyValueStore + 'static,
{
    store: Weak<CartStore<TStorage>>,
}

impl<TStorage> Clone for CartHandle<TStorage>
where
    TStorage: KeyValueStore + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<TStorage> CartHandle<TStorage>
where
    TStorage: KeyValueStore + 'static,
{
    /// A handle created outside of any provider.
    pub fn detached() -> Self {
        Self { store: Weak::new() }
    }

    fn store(&self) -> Result<Arc<CartStore<TStorage>>, CartError> {
        self.store.upgrade().ok_or(CartError::NotAvailable)
    }

    pub fn is_available(&self) -> bool {
        self.store.strong_count() > 0
    }

    pub fn products(&self) -> Result<CartState, CartError> {
        Ok(self.store()?.products())
    }

    pub fn subscribe(&self) -> Result<watch::Receiver<CartState>, CartError> {
        Ok(self.store()?.subscribe())
    }

    pub async fn add_to_cart(&self, item: NewLineItem) -> Result<CartState, CartError> {
        self.store()?.add_to_cart(item).await
    }

    pub async fn increment(&self, id: &str) -> Result<CartState, CartError> {
        self.store()?.increment(id).await
    }

    pub async fn decrement(&self, id: &str) -> Result<CartState, CartError> {
        self.store()?.decrement(id).await
    }
}
