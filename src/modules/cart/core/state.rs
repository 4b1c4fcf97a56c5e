use crate::modules::cart::core::line_item::LineItem;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("duplicate line item id: {0}")]
    DuplicateId(String),

    #[error("line item {0} has zero quantity")]
    ZeroQuantity(String),
}

/// Ordered cart contents. Insertion order is kept, ids are unique and every quantity is at
/// least one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    items: Vec<LineItem>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum()
    }

    // Only evolve may build states that skip validation.
    pub(crate) fn from_items_unchecked(items: Vec<LineItem>) -> Self {
        Self { items }
    }
}

impl TryFrom<Vec<LineItem>> for CartState {
    type Error = InvariantViolation;

    fn try_from(items: Vec<LineItem>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.quantity == 0 {
                return Err(InvariantViolation::ZeroQuantity(item.id.clone()));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(InvariantViolation::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }
}
