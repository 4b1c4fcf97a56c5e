// Shared test fixtures for line items and carts.

use crate::modules::cart::core::line_item::{LineItem, NewLineItem};
use crate::modules::cart::core::state::CartState;
use serde::Deserialize;

pub const CART_BLOB_JSON: &str = include_str!("json/cart_blob.json");
const NEW_LINE_ITEM_JSON: &str = include_str!("json/new_line_item.json");

pub struct NewLineItemBuilder {
    inner: NewLineItem,
}

impl Default for NewLineItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NewLineItemBuilder {
    pub fn new() -> Self {
        #[derive(Deserialize)]
        struct NewLineItemDto {
            id: String,
            title: String,
            image_url: String,
            price: f64,
        }

        let dto: NewLineItemDto = serde_json::from_str(NEW_LINE_ITEM_JSON).unwrap();
        Self {
            inner: NewLineItem {
                id: dto.id,
                title: dto.title,
                image_url: dto.image_url,
                price: dto.price,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn image_url(mut self, v: impl Into<String>) -> Self {
        self.inner.image_url = v.into();
        self
    }

    pub fn price(mut self, v: f64) -> Self {
        self.inner.price = v;
        self
    }

    pub fn build(self) -> NewLineItem {
        self.inner
    }
}

pub fn make_line_item(id: &str, quantity: u32) -> LineItem {
    let mut item = NewLineItemBuilder::new().id(id).build().into_line_item();
    item.quantity = quantity;
    item
}

pub fn cart_of(entries: &[(&str, u32)]) -> CartState {
    let items = entries
        .iter()
        .map(|(id, quantity)| make_line_item(id, *quantity))
        .collect::<Vec<_>>();
    CartState::try_from(items).unwrap()
}

#[cfg(test)]
mod new_line_item_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = NewLineItemBuilder::default().build();
        assert_eq!(built.id, "product-0001");
        assert_eq!(built.title, "Widget");
        assert_eq!(built.image_url, "https://cdn.example.com/widget.png");
        assert_eq!(built.price, 9.99);
    }

    #[rstest]
    fn setters_override_all_fields() {
        let built = NewLineItemBuilder::new()
            .id("custom")
            .title("Gadget")
            .image_url("x")
            .price(1.5)
            .build();
        assert_eq!(built.id, "custom");
        assert_eq!(built.title, "Gadget");
        assert_eq!(built.image_url, "x");
        assert_eq!(built.price, 1.5);
    }
}
