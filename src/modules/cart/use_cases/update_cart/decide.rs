// Pure decision function for cart updates.
//
// Rules
// - Adding an id already in the cart is an increment, never a second entry.
// - New items need a non-empty id and a finite, non-negative price.
// - Incrementing or decrementing an id that is not in the cart is rejected.
// - A quantity never wraps or silently stops growing: incrementing past `u32::MAX` is rejected.

use crate::modules::cart::core::events::CartEvent;
use crate::modules::cart::core::line_item::NewLineItem;
use crate::modules::cart::core::state::CartState;
use crate::modules::cart::use_cases::update_cart::command::UpdateCart;
use crate::modules::cart::use_cases::update_cart::decision::{DecideError, Decision};

pub fn decide_update(state: &CartState, command: UpdateCart) -> Decision {
    match command {
        UpdateCart::AddToCart(item) => {
            if state.contains(&item.id) {
                return increment(state, item.id);
            }
            if let Err(reason) = validate(&item) {
                return Decision::Rejected { reason };
            }
            Decision::Accepted {
                events: vec![CartEvent::ItemAdded(item.into_line_item())],
            }
        }
        UpdateCart::Increment { id } if state.contains(&id) => increment(state, id),
        UpdateCart::Decrement { id } if state.contains(&id) => Decision::Accepted {
            events: vec![CartEvent::QuantityDecremented { id }],
        },
        UpdateCart::Increment { id } | UpdateCart::Decrement { id } => Decision::Rejected {
            reason: DecideError::NotInCart { id },
        },
    }
}

fn increment(state: &CartState, id: String) -> Decision {
    match state.get(&id) {
        Some(item) if item.quantity == u32::MAX => Decision::Rejected {
            reason: DecideError::QuantityLimit { id },
        },
        _ => Decision::Accepted {
            events: vec![CartEvent::QuantityIncremented { id }],
        },
    }
}

fn validate(item: &NewLineItem) -> Result<(), DecideError> {
    if item.id.trim().is_empty() {
        return Err(DecideError::InvalidItem("id must not be empty".into()));
    }
    if !item.price.is_finite() || item.price < 0.0 {
        return Err(DecideError::InvalidItem(format!(
            "price must be a non-negative number, got {}",
            item.price
        )));
    }
    Ok(())
}
