//! Prices

use rusty_money::{Money, MoneyError, iso};
use thiserror::Error;

use crate::items::LineItem;

/// Errors that can occur while calculating line or cart totals.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// No items were provided, so currency could not be determined.
    #[error("no items provided; cannot determine currency")]
    NoItems,

    /// A minor-unit amount overflowed `i64` during multiplication or addition.
    #[error("amount overflow computing a total")]
    AmountOverflow,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates the total price of a single line item (unit price × quantity).
///
/// # Errors
///
/// - [`PricingError::AmountOverflow`]: The minor-unit amount overflowed `i64`.
pub fn line_total<'a>(item: &LineItem<'a>) -> Result<Money<'a, iso::Currency>, PricingError> {
    let amount = item
        .unit_price()
        .to_minor_units()
        .checked_mul(i64::from(item.quantity().get()))
        .ok_or(PricingError::AmountOverflow)?;

    Ok(Money::from_minor(amount, item.unit_price().currency()))
}

/// Calculates the total price of a list of line items.
///
/// # Errors
///
/// - [`PricingError::NoItems`]: No items were provided, so currency could not be determined.
/// - [`PricingError::AmountOverflow`]: A minor-unit amount overflowed `i64`.
/// - [`PricingError::Money`]: Wrapped money arithmetic or currency mismatch error.
pub fn subtotal<'a>(items: &[LineItem<'a>]) -> Result<Money<'a, iso::Currency>, PricingError> {
    let first = items.first().ok_or(PricingError::NoItems)?;

    let total = items.iter().try_fold(
        Money::from_minor(0, first.unit_price().currency()),
        |acc, item| acc.add(line_total(item)?).map_err(PricingError::from),
    )?;

    Ok(total)
}
