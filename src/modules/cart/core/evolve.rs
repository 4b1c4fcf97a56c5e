use crate::modules::cart::core::events::CartEvent;
use crate::modules::cart::core::line_item::LineItem;
use crate::modules::cart::core::state::CartState;

pub fn evolve(state: CartState, event: CartEvent) -> CartState {
    let mut items = state.into_items();
    match event {
        CartEvent::ItemAdded(item) => {
            if !items.iter().any(|existing| existing.id == item.id) {
                items.push(item);
            }
        }
        CartEvent::QuantityIncremented { id } => {
            for item in items.iter_mut().filter(|item| item.id == id) {
                item.quantity = item.quantity.saturating_add(1);
            }
        }
        CartEvent::QuantityDecremented { id } => {
            for item in items.iter_mut().filter(|item| item.id == id) {
                item.quantity = item.quantity.saturating_sub(1);
            }
            items.retain(|item: &LineItem| item.quantity > 0);
        }
    }
    CartState::from_items_unchecked(items)
}
