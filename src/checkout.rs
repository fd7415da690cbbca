//! Checkout drafts

use serde::Serialize;
use thiserror::Error;

use crate::{cart::Cart, items::ProductId};

/// Errors related to building a checkout draft.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// The cart has no items to check out.
    #[error("cannot build an order from an empty cart")]
    EmptyCart,
}

/// One order line: product and quantity only.
///
/// Prices are re-derived server-side and are deliberately absent here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    /// Product identifier.
    pub product_id: ProductId,

    /// Units ordered.
    pub quantity: u32,
}

/// Serializable order payload built from a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDraft {
    /// Order lines in cart order.
    pub lines: Vec<OrderLine>,
}

impl OrderDraft {
    /// Build an order draft from the cart's current entries.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if the cart has no entries.
    pub fn from_cart(cart: &Cart<'_>) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        Ok(OrderDraft {
            lines: cart
                .iter()
                .map(|item| OrderLine {
                    product_id: item.product().clone(),
                    quantity: item.quantity().get(),
                })
                .collect(),
        })
    }
}
