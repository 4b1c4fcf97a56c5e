use crate::modules::cart::core::line_item::LineItem;
use crate::modules::cart::core::state::{CartState, InvariantViolation};
use crate::shared::infrastructure::key_value_store::{KeyValueStore, KeyValueStoreError};
use thiserror::Error;

/// The single slot the cart occupies in the key-value store.
pub const CART_STORAGE_KEY: &str = "@GoMarketplaceCart";

#[derive(Debug, Error)]
pub enum LoadCartError {
    #[error(transparent)]
    Storage(#[from] KeyValueStoreError),

    #[error("malformed cart blob: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("corrupt cart blob: {0}")]
    Corrupt(#[from] InvariantViolation),
}

/// Serialize the full cart as a JSON array of line items.
pub fn encode_cart(state: &CartState) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(state.items())
}

pub fn decode_cart(blob: &[u8]) -> Result<CartState, LoadCartError> {
    let items: Vec<LineItem> = serde_json::from_slice(blob)?;
    Ok(CartState::try_from(items)?)
}

/// Read the persisted cart. A missing key is an empty cart.
pub async fn load_cart<S>(storage: &S) -> Result<CartState, LoadCartError>
where
    S: KeyValueStore + ?Sized,
{
    match storage.get_item(CART_STORAGE_KEY).await? {
        Some(blob) => decode_cart(&blob),
        None => Ok(CartState::new()),
    }
}
