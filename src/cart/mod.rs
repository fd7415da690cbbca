//! Cart
//!
//! The authoritative client-side shopping cart: an ordered sequence of line
//! items unique by product id, with merge-on-add semantics and derived
//! totals. The cart is an explicit, injectable container — persistence is
//! layered on top via [`session::CartSession`].

use std::num::NonZeroU32;

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    items::{LineItem, ProductId},
    pricing::{PricingError, subtotal},
};

pub mod session;

/// Errors related to cart mutation or totals.
#[derive(Debug, Error)]
pub enum CartError {
    /// An item's currency differs from the cart currency (product, item currency, cart currency).
    #[error("Item {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),

    /// An item was not found in the cart.
    #[error("Item {0} not found")]
    ItemNotFound(ProductId),

    /// Merging quantities for a product overflowed `u32`.
    #[error("Quantity overflow for item {0}")]
    QuantityOverflow(ProductId),

    /// Wrapped pricing error from a totals calculation.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Cart
#[derive(Debug, Clone, PartialEq)]
pub struct Cart<'a> {
    items: SmallVec<[LineItem<'a>; 10]>,
    currency: &'static Currency,
}

impl<'a> Cart<'a> {
    /// Create a new empty cart priced in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            items: SmallVec::new(),
            currency,
        }
    }

    /// Create a cart from existing line items.
    ///
    /// Items are added one by one with merge semantics, so duplicate product
    /// ids collapse into a single entry.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] on currency mismatch or quantity overflow.
    pub fn with_items(
        items: impl IntoIterator<Item = LineItem<'a>>,
        currency: &'static Currency,
    ) -> Result<Self, CartError> {
        let mut cart = Cart::new(currency);

        for item in items {
            cart.add(item)?;
        }

        Ok(cart)
    }

    /// Add a line item to the cart.
    ///
    /// If the product is already present, its quantity is incremented by the
    /// incoming quantity; otherwise the item is appended. The stored display
    /// data (name, price, image, stock) of an existing entry is kept.
    ///
    /// # Errors
    ///
    /// - [`CartError::CurrencyMismatch`]: the item is priced in a different
    ///   currency than the cart.
    /// - [`CartError::QuantityOverflow`]: the merged quantity overflows `u32`.
    pub fn add(&mut self, item: LineItem<'a>) -> Result<(), CartError> {
        let item_currency = item.unit_price().currency();

        if item_currency != self.currency {
            return Err(CartError::CurrencyMismatch(
                item.product().clone(),
                item_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|existing| existing.product() == item.product())
        {
            let merged = existing
                .quantity()
                .get()
                .checked_add(item.quantity().get())
                .and_then(NonZeroU32::new)
                .ok_or_else(|| CartError::QuantityOverflow(item.product().clone()))?;

            existing.set_quantity(merged);

            return Ok(());
        }

        self.items.push(item);

        Ok(())
    }

    /// Remove the entry for a product, returning it if it was present.
    ///
    /// Removing an absent product is a no-op, not an error.
    pub fn remove(&mut self, product: &ProductId) -> Option<LineItem<'a>> {
        let position = self
            .items
            .iter()
            .position(|item| item.product() == product)?;

        Some(self.items.remove(position))
    }

    /// Set the quantity of an existing entry to an exact value.
    ///
    /// Zero is unrepresentable by the argument type; callers that want
    /// "zero removes" semantics use [`Cart::update_quantity`].
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] if the product is not in the cart.
    pub fn set_quantity(
        &mut self,
        product: &ProductId,
        quantity: NonZeroU32,
    ) -> Result<(), CartError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.product() == product)
            .ok_or_else(|| CartError::ItemNotFound(product.clone()))?;

        item.set_quantity(quantity);

        Ok(())
    }

    /// Storefront quantity update: zero removes the entry, a positive value
    /// sets it, and an absent product is ignored.
    pub fn update_quantity(&mut self, product: &ProductId, quantity: u32) {
        match NonZeroU32::new(quantity) {
            None => {
                _ = self.remove(product);
            }
            Some(quantity) => {
                _ = self.set_quantity(product, quantity);
            }
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total number of units across all entries.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity().get()))
            .sum()
    }

    /// Calculate the subtotal of the cart (sum of unit price × quantity).
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if there was a money arithmetic or overflow error.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, CartError> {
        if self.is_empty() {
            return Ok(Money::from_minor(0, self.currency));
        }

        Ok(subtotal(&self.items)?)
    }

    /// Get the entry for a product, if present.
    #[must_use]
    pub fn get(&self, product: &ProductId) -> Option<&LineItem<'a>> {
        self.items.iter().find(|item| item.product() == product)
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem<'_>> {
        self.items.iter()
    }

    /// Number of distinct entries in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
