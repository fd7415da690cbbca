//! Cart summary rendering

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::{Cart, CartError},
    pricing::line_total,
};

/// Errors that can occur when rendering a cart summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Error calculating a line or cart total.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// Render the cart as a table followed by an items/subtotal footer.
///
/// # Errors
///
/// Returns a [`SummaryError`] if a total cannot be calculated or the
/// output cannot be written.
pub fn write_summary(mut out: impl io::Write, cart: &Cart<'_>) -> Result<(), SummaryError> {
    let mut builder = Builder::default();

    builder.push_record(["", "Item", "Qty", "Unit Price", "Line Total"]);

    for (idx, item) in cart.iter().enumerate() {
        let total = line_total(item).map_err(CartError::from)?;

        builder.push_record([
            format!("#{:<3}", idx + 1),
            item.name().to_string(),
            item.quantity().to_string(),
            format!("{}", item.unit_price()),
            format!("{total}"),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..5), Alignment::right());

    writeln!(out, "\n{table}").map_err(|_err| SummaryError::IO)?;

    write_totals(&mut out, cart)
}

fn write_totals(out: &mut impl io::Write, cart: &Cart<'_>) -> Result<(), SummaryError> {
    let items_label = " Items:";
    let subtotal_label = " \x1b[1mSubtotal:\x1b[0m";

    let items_val = format!("{}  ", cart.total_items());
    let subtotal_val = format!("\x1b[1m{}  \x1b[0m", cart.subtotal()?);

    let label_width = visible_width(items_label).max(visible_width(subtotal_label));
    let value_width = visible_width(&items_val).max(visible_width(&subtotal_val));

    write_totals_line(out, items_label, &items_val, label_width, value_width)?;
    write_totals_line(out, subtotal_label, &subtotal_val, label_width, value_width)?;

    writeln!(out).map_err(|_err| SummaryError::IO)
}

/// Writes one footer line with a right-aligned label and fixed-width value column.
fn write_totals_line(
    out: &mut impl io::Write,
    label: &str,
    value: &str,
    label_col_width: usize,
    value_col_width: usize,
) -> Result<(), SummaryError> {
    let label_pad = label_col_width.saturating_sub(visible_width(label));
    let value_pad = value_col_width.saturating_sub(visible_width(value));

    writeln!(
        out,
        "{:>label_pad$}{label}  {value_pad}{value}",
        "",
        value_pad = " ".repeat(value_pad)
    )
    .map_err(|_err| SummaryError::IO)
}

/// Returns the visible (non-ANSI) width of a string.
fn visible_width(s: &str) -> usize {
    let mut width = 0usize;
    let mut in_escape = false;

    for ch in s.chars() {
        if in_escape {
            if ch.is_ascii_alphabetic() {
                in_escape = false;
            }
        } else if ch == '\x1b' {
            in_escape = true;
        } else {
            width += 1;
        }
    }

    width
}
