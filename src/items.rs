//! Line items

use std::{fmt, num::NonZeroU32};

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

/// Opaque product identifier assigned by the upstream catalogue API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One product-quantity-price entry in a cart.
///
/// Quantity is a [`NonZeroU32`]: a line item with quantity zero is
/// unrepresentable, so removal is always an explicit operation on the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem<'a> {
    product: ProductId,
    name: String,
    unit_price: Money<'a, Currency>,
    quantity: NonZeroU32,
    image: String,
    stock: u32,
}

impl<'a> LineItem<'a> {
    /// Create a new line item.
    #[must_use]
    pub fn new(
        product: ProductId,
        name: impl Into<String>,
        unit_price: Money<'a, Currency>,
        quantity: NonZeroU32,
        image: impl Into<String>,
        stock: u32,
    ) -> Self {
        Self {
            product,
            name: name.into(),
            unit_price,
            quantity,
            image: image.into(),
            stock,
        }
    }

    /// The product this line refers to.
    #[must_use]
    pub fn product(&self) -> &ProductId {
        &self.product
    }

    /// Display name captured at the time the item was added.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price per unit.
    #[must_use]
    pub fn unit_price(&self) -> &Money<'a, Currency> {
        &self.unit_price
    }

    /// Units of this product in the cart.
    #[must_use]
    pub fn quantity(&self) -> NonZeroU32 {
        self.quantity
    }

    /// Replace the quantity.
    pub fn set_quantity(&mut self, quantity: NonZeroU32) {
        self.quantity = quantity;
    }

    /// Display image path or URL.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Advisory stock ceiling reported by the catalogue.
    ///
    /// The cart never enforces this bound; callers clamp against it.
    #[must_use]
    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Whether the quantity exceeds the advisory stock ceiling.
    #[must_use]
    pub fn exceeds_stock(&self) -> bool {
        self.quantity.get() > self.stock
    }
}
