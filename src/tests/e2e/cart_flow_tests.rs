use crate::modules::cart::adapters::inbound::provider::CartProvider;
use crate::modules::cart::adapters::outbound::cart_storage::CART_STORAGE_KEY;
use crate::modules::cart::core::line_item::LineItem;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use crate::tests::fixtures::line_items::NewLineItemBuilder;
use std::sync::Arc;

#[tokio::test]
async fn shopping_session_survives_a_remount() {
    let storage = Arc::new(InMemoryKeyValueStore::new());
    let provider = CartProvider::mount(storage.clone()).await;
    let cart = provider.handle();
    let mut updates = cart.subscribe().unwrap();

    let widget = NewLineItemBuilder::new()
        .id("A")
        .title("Widget")
        .image_url("x")
        .price(9.99)
        .build();
    let gadget = NewLineItemBuilder::new()
        .id("B")
        .title("Gadget")
        .price(24.5)
        .build();

    cart.add_to_cart(widget.clone()).await.unwrap();
    let persisted = storage.get_item(CART_STORAGE_KEY).await.unwrap().unwrap();
    let persisted: Vec<LineItem> = serde_json::from_slice(&persisted).unwrap();
    assert_eq!(persisted, vec![widget.clone().into_line_item()]);

    cart.add_to_cart(widget.clone()).await.unwrap();
    cart.add_to_cart(gadget).await.unwrap();
    cart.increment("B").await.unwrap();
    cart.decrement("A").await.unwrap();
    let state = cart.decrement("B").await.unwrap();

    assert!(updates.has_changed().unwrap());
    assert_eq!(*updates.borrow_and_update(), state);

    let summary: Vec<(&str, u32)> = state
        .items()
        .iter()
        .map(|item| (item.id.as_str(), item.quantity))
        .collect();
    assert_eq!(summary, vec![("A", 1), ("B", 1)]);
    assert!((state.subtotal() - 34.49).abs() < 1e-9);

    provider.unmount();
    assert!(cart.products().is_err());

    let remounted = CartProvider::mount(storage).await;
    let cart = remounted.handle();
    assert_eq!(cart.products().unwrap(), state);

    cart.decrement("A").await.unwrap();
    let state = cart.decrement("B").await.unwrap();
    assert!(state.is_empty());
}
