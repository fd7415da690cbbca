//! Persisted cart session
//!
//! Binds a [`Cart`] to a [`CartStore`] and re-persists after every
//! mutation. Persistence is best-effort: a failed save leaves the
//! in-memory cart correct for the rest of the session and is reported
//! through `tracing` rather than to the caller.

use std::num::NonZeroU32;

use rusty_money::{Money, iso::Currency};

use crate::{
    cart::{Cart, CartError},
    items::{LineItem, ProductId},
    store::{CartSnapshot, CartStore},
};

/// A cart bound to a persistence adapter.
#[derive(Debug)]
pub struct CartSession<S> {
    cart: Cart<'static>,
    store: S,
}

impl<S: CartStore> CartSession<S> {
    /// Open a session, restoring the persisted cart if one exists.
    ///
    /// A missing snapshot starts an empty cart. An unreadable snapshot, or
    /// one persisted in a different currency than the session was opened
    /// with, also starts empty — with a warning, never an error.
    pub fn open(store: S, currency: &'static Currency) -> Self {
        let cart = match store.load() {
            Ok(Some(snapshot)) => match snapshot.into_cart() {
                Ok(cart) if cart.currency() == currency => cart,
                Ok(cart) => {
                    tracing::warn!(
                        persisted = cart.currency().iso_alpha_code,
                        expected = currency.iso_alpha_code,
                        "persisted cart currency mismatch; starting empty"
                    );

                    Cart::new(currency)
                }
                Err(err) => {
                    tracing::warn!(%err, "persisted cart unusable; starting empty");

                    Cart::new(currency)
                }
            },
            Ok(None) => Cart::new(currency),
            Err(err) => {
                tracing::warn!(%err, "failed to load persisted cart; starting empty");

                Cart::new(currency)
            }
        };

        Self { cart, store }
    }

    /// Add a line item, merging quantities for an existing product.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] on currency mismatch or quantity overflow.
    pub fn add(&mut self, item: LineItem<'static>) -> Result<(), CartError> {
        self.cart.add(item)?;
        self.persist();

        Ok(())
    }

    /// Remove the entry for a product, returning it if it was present.
    pub fn remove(&mut self, product: &ProductId) -> Option<LineItem<'static>> {
        let removed = self.cart.remove(product);

        if removed.is_some() {
            self.persist();
        }

        removed
    }

    /// Set the quantity of an existing entry to an exact value.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] if the product is not in the cart.
    pub fn set_quantity(
        &mut self,
        product: &ProductId,
        quantity: NonZeroU32,
    ) -> Result<(), CartError> {
        self.cart.set_quantity(product, quantity)?;
        self.persist();

        Ok(())
    }

    /// Storefront quantity update: zero removes, positive sets, absent is ignored.
    pub fn update_quantity(&mut self, product: &ProductId, quantity: u32) {
        self.cart.update_quantity(product, quantity);
        self.persist();
    }

    /// Empty the cart and remove the persisted entry (post-checkout lifecycle).
    pub fn clear(&mut self) {
        self.cart.clear();

        if let Err(err) = self.store.clear() {
            tracing::warn!(%err, "failed to clear persisted cart");
        }
    }

    /// Total number of units across all entries.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    /// Subtotal of the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if there was a money arithmetic or overflow error.
    pub fn subtotal(&self) -> Result<Money<'static, Currency>, CartError> {
        self.cart.subtotal()
    }

    /// Read access to the underlying cart.
    #[must_use]
    pub fn cart(&self) -> &Cart<'static> {
        &self.cart
    }

    /// Consume the session, returning the cart and the store.
    #[must_use]
    pub fn into_parts(self) -> (Cart<'static>, S) {
        (self.cart, self.store)
    }

    fn persist(&mut self) {
        let snapshot = CartSnapshot::from(&self.cart);

        if let Err(err) = self.store.save(&snapshot) {
            tracing::warn!(%err, "failed to persist cart; in-memory state unaffected");
        }
    }
}
