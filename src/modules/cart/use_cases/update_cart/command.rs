use crate::modules::cart::core::line_item::NewLineItem;

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateCart {
    AddToCart(NewLineItem),
    Increment { id: String },
    Decrement { id: String },
}

impl UpdateCart {
    pub fn increment(id: impl Into<String>) -> Self {
        Self::Increment { id: id.into() }
    }

    pub fn decrement(id: impl Into<String>) -> Self {
        Self::Decrement { id: id.into() }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AddToCart(_) => "add_to_cart",
            Self::Increment { .. } => "increment",
            Self::Decrement { .. } => "decrement",
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::AddToCart(item) => item.id.as_str(),
            Self::Increment { id } | Self::Decrement { id } => id.as_str(),
        }
    }
}
