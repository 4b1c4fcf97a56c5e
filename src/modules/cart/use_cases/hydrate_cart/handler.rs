use crate::modules::cart::adapters::outbound::cart_storage::load_cart;
use crate::modules::cart::core::state::CartState;
use crate::shared::infrastructure::key_value_store::KeyValueStore;

/// Load the persisted cart for a fresh mount.
///
/// Never fails: an unreadable or corrupt blob is logged and replaced by an empty cart. The
/// blob itself is left untouched until the next successful write.
pub async fn hydrate_cart<S>(storage: &S) -> CartState
where
    S: KeyValueStore + ?Sized,
{
    match load_cart(storage).await {
        Ok(state) => {
            tracing::debug!(items = state.len(), "cart hydrated");
            state
        }
        Err(error) => {
            tracing::warn!(%error, "could not hydrate cart, starting empty");
            CartState::new()
        }
    }
}

#[cfg(test)]
mod hydrate_cart_tests {
    use super::*;
    use crate::modules::cart::adapters::outbound::cart_storage::{CART_STORAGE_KEY, encode_cart};
    use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
    use crate::tests::fixtures::line_items::cart_of;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_hydrate_the_persisted_cart() {
        let state = cart_of(&[("A", 2)]);
        let storage = InMemoryKeyValueStore::with_item(CART_STORAGE_KEY, encode_cart(&state).unwrap());
        assert_eq!(hydrate_cart(&storage).await, state);
    }

    #[rstest]
    #[case(b"{ broken".to_vec())]
    #[case(br#"[{"id":"A","title":"t","image_url":"x","price":1,"quantity":1},{"id":"A","title":"t","image_url":"x","price":1,"quantity":1}]"#.to_vec())]
    #[tokio::test]
    async fn it_should_start_empty_when_the_blob_is_corrupt(#[case] blob: Vec<u8>) {
        let storage = InMemoryKeyValueStore::with_item(CART_STORAGE_KEY, blob.clone());
        assert!(hydrate_cart(&storage).await.is_empty());
        assert_eq!(storage.get_item(CART_STORAGE_KEY).await.unwrap(), Some(blob));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_start_empty_when_the_storage_is_offline() {
        let storage = InMemoryKeyValueStore::new();
        storage.toggle_offline();
        assert!(hydrate_cart(&storage).await.is_empty());
    }
}
