// Cart store: owns the published cart and runs every update through decide -> persist -> publish.
//
// Responsibilities
// - Hydrate once from the key-value store when created.
// - Fold accepted events into the latest committed state.
// - Write the full cart under the cart key and publish only after the write succeeded.
// - Serialize updates so concurrent callers never compute from the same stale snapshot.

use crate::modules::cart::adapters::outbound::cart_storage::{CART_STORAGE_KEY, encode_cart};
use crate::modules::cart::core::evolve::evolve;
use crate::modules::cart::core::line_item::NewLineItem;
use crate::modules::cart::core::state::CartState;
use crate::modules::cart::use_cases::hydrate_cart::handler::hydrate_cart;
use crate::modules::cart::use_cases::update_cart::command::UpdateCart;
use crate::modules::cart::use_cases::update_cart::decide::decide_update;
use crate::modules::cart::use_cases::update_cart::decision::{DecideError, Decision};
use crate::shared::infrastructure::key_value_store::{KeyValueStore, KeyValueStoreError};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, watch};

#[derive(Debug, Error)]
pub enum CartError {
    #[error("cart must be used within a CartProvider")]
    NotAvailable,

    #[error("update rejected: {0}")]
    Rejected(#[from] DecideError),

    #[error("failed to persist cart: {0}")]
    Persistence(#[from] KeyValueStoreError),

    #[error("failed to serialize cart: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub struct CartStore<TStorage>
where
    TStorage: KeyValueStore + 'static,
{
    storage: Arc<TStorage>,
    writer: Mutex<()>,
    published: watch::Sender<CartState>,
}

impl<TStorage> CartStore<TStorage>
where
    TStorage: KeyValueStore + 'static,
{
    pub async fn hydrate(storage: Arc<TStorage>) -> Self {
        let state = hydrate_cart(&*storage).await;
        let (published, _) = watch::channel(state);
        Self {
            storage,
            writer: Mutex::new(()),
            published,
        }
    }

    pub fn products(&self) -> CartState {
        self.published.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CartState> {
        self.published.subscribe()
    }

    pub async fn add_to_cart(&self, item: NewLineItem) -> Result<CartState, CartError> {
        self.handle(UpdateCart::AddToCart(item)).await
    }

    pub async fn increment(&self, id: &str) -> Result<CartState, CartError> {
        self.handle(UpdateCart::increment(id)).await
    }

    pub async fn decrement(&self, id: &str) -> Result<CartState, CartError> {
        self.handle(UpdateCart::decrement(id)).await
    }

    pub async fn handle(&self, command: UpdateCart) -> Result<CartState, CartError> {
        let _writer = self.writer.lock().await;
        let current = self.products();
        let command_name = command.name();
        let id = command.id().to_string();

        match decide_update(&current, command) {
            Decision::Accepted { events } => {
                let next = events.into_iter().fold(current, evolve);
                let blob = encode_cart(&next)?;
                if let Err(error) = self.storage.set_item(CART_STORAGE_KEY, &blob).await {
                    tracing::error!(%error, command = command_name, %id, "cart write failed");
                    return Err(error.into());
                }
                tracing::debug!(
                    command = command_name,
                    %id,
                    items = next.len(),
                    total_quantity = next.total_quantity(),
                    "cart updated"
                );
                self.published.send_replace(next.clone());
                Ok(next)
            }
            Decision::Rejected { reason } => {
                tracing::debug!(%reason, command = command_name, %id, "cart update rejected");
                Err(reason.into())
            }
        }
    }
}
