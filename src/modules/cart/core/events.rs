use crate::modules::cart::core::line_item::LineItem;

/// Changes to the cart decided by the update use case and applied by `evolve`.
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    ItemAdded(LineItem),
    QuantityIncremented { id: String },
    QuantityDecremented { id: String },
}
