//! Cart type.

use crate::cart::{LineItem, NewItem};
use crate::error::CartError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// An ordered sequence of line items keyed by product ID.
///
/// Every item has a quantity of at least 1 and no two items share an ID.
/// Serializes as a bare JSON array; deserializing checks both invariants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the cart.
    ///
    /// If the product is already present its quantity goes up by one and
    /// its other fields are replaced by `item`. Otherwise it is appended with
    /// a quantity of one. Returns the resulting quantity.
    pub fn add_item(&mut self, item: NewItem) -> u32 {
        if let Some(existing) = self.find_mut(&item.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            existing.overwrite(item);
            return existing.quantity;
        }

        self.items.push(LineItem::from_new(item));
        1
    }

    /// Increase an item's quantity by one.
    ///
    /// Returns `false` if the product is not in the cart.
    pub fn increment(&mut self, id: &ProductId) -> bool {
        match self.find_mut(id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Decrease an item's quantity by one, never below 1.
    ///
    /// Returns `true` only if the stored quantity changed.
    pub fn decrement(&mut self, id: &ProductId) -> bool {
        match self.find_mut(id) {
            Some(item) if item.quantity > 1 => {
                item.quantity -= 1;
                true
            }
            _ => false,
        }
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get an item by product ID.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all items.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    fn find_mut(&mut self, id: &ProductId) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|i| &i.id == id)
    }
}

impl TryFrom<Vec<LineItem>> for Cart {
    type Error = CartError;

    fn try_from(items: Vec<LineItem>) -> Result<Self, Self::Error> {
        for (index, item) in items.iter().enumerate() {
            if item.quantity == 0 {
                return Err(CartError::InvalidSnapshot(format!(
                    "item {} has quantity 0",
                    item.id
                )));
            }
            if items[..index].iter().any(|prev| prev.id == item.id) {
                return Err(CartError::InvalidSnapshot(format!(
                    "duplicate item {}",
                    item.id
                )));
            }
        }
        Ok(Self { items })
    }
}

impl From<Cart> for Vec<LineItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}
