use crate::modules::cart::core::events::CartEvent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("invalid line item: {0}")]
    InvalidItem(String),

    #[error("line item {id} is not in the cart")]
    NotInCart { id: String },

    #[error("line item {id} is already at the maximum quantity")]
    QuantityLimit { id: String },
}

#[derive(Debug, PartialEq)]
pub enum Decision {
    Accepted { events: Vec<CartEvent> },
    Rejected { reason: DecideError },
}
