//! Line item types.

use crate::ids::ProductId;
use serde::{Deserialize, Deserializer, Serialize};

/// A product in the cart.
///
/// Field order matches the persisted snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product identifier, unique within a cart.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Display image reference.
    pub image_url: String,
    /// Unit price. JSON has no non-finite numbers, so NaN and infinities
    /// are stored as `null` and come back as NaN.
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
    /// Units in the cart. Always at least 1.
    pub quantity: u32,
}

impl LineItem {
    /// Build a line item with a quantity of one.
    pub fn from_new(item: NewItem) -> Self {
        let NewItem {
            id,
            title,
            image_url,
            price,
        } = item;
        Self {
            id,
            title,
            image_url,
            price,
            quantity: 1,
        }
    }

    /// Replace display fields with `item`, keeping the quantity.
    pub(crate) fn overwrite(&mut self, item: NewItem) {
        self.id = item.id;
        self.title = item.title;
        self.image_url = item.image_url;
        self.price = item.price;
    }
}

/// Input for adding a product: a line item without a quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewItem {
    /// Product identifier.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Display image reference.
    pub image_url: String,
    /// Unit price.
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
}

impl NewItem {
    /// Create the input for [`Cart::add_item`](crate::Cart::add_item).
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        image_url: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image_url: image_url.into(),
            price,
        }
    }
}

fn deserialize_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_new_starts_at_one() {
        let item = LineItem::from_new(NewItem::new("a", "Shoe", "https://img/a.png", 10.0));
        assert_eq!(item.quantity, 1);
        assert_eq!(item.title, "Shoe");
    }

    #[test]
    fn test_serialized_field_order() {
        let item = LineItem::from_new(NewItem::new("a", "Shoe", "img", 10.5));
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"id":"a","title":"Shoe","image_url":"img","price":10.5,"quantity":1}"#
        );
    }

    #[test]
    fn test_null_price_reads_as_nan() {
        let item: LineItem = serde_json::from_str(
            r#"{"id":"a","title":"Shoe","image_url":"img","price":null,"quantity":2}"#,
        )
        .unwrap();
        assert!(item.price.is_nan());
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_infinite_price_stored_as_null() {
        let item = LineItem::from_new(NewItem::new("a", "Shoe", "img", f64::INFINITY));
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""price":null"#));
    }
}
