//! Cart persistence port
//!
//! The cart itself is storage-agnostic; durability goes through the
//! [`CartStore`] trait so the same cart logic runs against an in-memory
//! stub in tests and a JSON file in the demo binaries. Snapshots carry
//! minor-unit prices plus an ISO currency code — money types are never
//! serialized directly. There is no schema versioning: a shape change
//! resets existing persisted carts.

use std::num::NonZeroU32;

use rusty_money::{Money, iso};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    cart::{Cart, CartError},
    items::{LineItem, ProductId},
};

pub mod json_file;
pub mod memory;

/// Errors raised by persistence adapters and snapshot conversion.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failure reading or writing the persisted entry.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted entry exists but could not be parsed.
    #[error("malformed persisted cart: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The persisted currency code is not a known ISO currency.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// A persisted entry carries a zero quantity, which the cart never writes.
    #[error("invalid persisted quantity for item {0}")]
    InvalidQuantity(ProductId),

    /// Rebuilding the cart from the snapshot failed.
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Persistence port for cart state.
///
/// `load` returning `Ok(None)` means nothing has been persisted yet; the
/// caller starts with an empty cart.
pub trait CartStore {
    /// Load the persisted snapshot, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the entry exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<CartSnapshot>, StoreError>;

    /// Persist a snapshot, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the entry cannot be written.
    fn save(&mut self, snapshot: &CartSnapshot) -> Result<(), StoreError>;

    /// Remove the persisted entry entirely.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the entry exists but cannot be removed.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// Serialized form of one cart entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotItem {
    /// Product identifier.
    pub product_id: ProductId,

    /// Display name captured when the item was added.
    pub name: String,

    /// Unit price in minor units of the snapshot currency.
    pub unit_price_minor: i64,

    /// Units in the cart; always positive when written by this crate.
    pub quantity: u32,

    /// Display image path or URL.
    pub image: String,

    /// Advisory stock ceiling.
    pub stock: u32,
}

/// Serialized form of a whole cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    /// ISO alpha code of the cart currency.
    pub currency: String,

    /// Entries in insertion order.
    pub items: Vec<SnapshotItem>,
}

impl CartSnapshot {
    /// Rebuild a cart from this snapshot.
    ///
    /// # Errors
    ///
    /// - [`StoreError::UnknownCurrency`]: the stored code is not ISO.
    /// - [`StoreError::InvalidQuantity`]: an entry carries quantity zero.
    /// - [`StoreError::Cart`]: the rebuilt items do not form a valid cart.
    pub fn into_cart(self) -> Result<Cart<'static>, StoreError> {
        let currency =
            iso::find(&self.currency).ok_or_else(|| StoreError::UnknownCurrency(self.currency))?;

        let mut items = Vec::with_capacity(self.items.len());

        for item in self.items {
            let quantity = NonZeroU32::new(item.quantity)
                .ok_or_else(|| StoreError::InvalidQuantity(item.product_id.clone()))?;

            items.push(LineItem::new(
                item.product_id,
                item.name,
                Money::from_minor(item.unit_price_minor, currency),
                quantity,
                item.image,
                item.stock,
            ));
        }

        Ok(Cart::with_items(items, currency)?)
    }
}

impl From<&Cart<'_>> for CartSnapshot {
    fn from(cart: &Cart<'_>) -> Self {
        CartSnapshot {
            currency: cart.currency().iso_alpha_code.to_string(),
            items: cart
                .iter()
                .map(|item| SnapshotItem {
                    product_id: item.product().clone(),
                    name: item.name().to_string(),
                    unit_price_minor: item.unit_price().to_minor_units(),
                    quantity: item.quantity().get(),
                    image: item.image().to_string(),
                    stock: item.stock(),
                })
                .collect(),
        }
    }
}
