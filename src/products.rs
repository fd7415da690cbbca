//! Products

use std::num::NonZeroU32;

use rusty_money::{Money, iso::Currency};

use crate::items::{LineItem, ProductId};

/// Product record as consumed from the upstream catalogue API.
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Product identifier.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: Money<'a, Currency>,

    /// Display image path or URL.
    pub image: String,

    /// Advisory stock ceiling.
    pub stock: u32,
}

impl<'a> Product<'a> {
    /// Build a cart line item for this product.
    #[must_use]
    pub fn to_line_item(&self, quantity: NonZeroU32) -> LineItem<'a> {
        LineItem::new(
            self.id.clone(),
            self.name.clone(),
            self.price,
            quantity,
            self.image.clone(),
            self.stock,
        )
    }
}
