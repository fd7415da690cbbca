//! Cart Demo
//!
//! Opens a persisted cart session against a JSON file store, fills it from
//! a fixture set, prints a summary table and the resulting order payload.
//!
//! Use `-f` to load a fixture set by name
//! Use `-n` to specify the number of featured products to add

use std::{io, num::NonZeroU32, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use vitrine::{
    cart::session::CartSession, checkout::OrderDraft, fixtures::Fixture, items::ProductId,
    store::json_file::JsonFileStore, summary::write_summary, utils::DemoArgs,
};

/// Cart Demo
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = DemoArgs::parse();
    let fixture = Fixture::from_set(&args.fixture)?;

    let store_dir = PathBuf::from("target").join("vitrine-demo");
    let store = JsonFileStore::in_dir(&store_dir);

    let mut session = CartSession::open(store, fixture.currency()?);

    if !session.cart().is_empty() {
        println!(
            "Restored persisted cart with {} item(s); starting fresh.",
            session.total_items()
        );
    }

    session.clear();

    let count = args.n.unwrap_or(fixture.featured().len());

    for key in fixture.featured().iter().take(count) {
        let product = fixture.product(key)?;

        session.add(product.to_line_item(NonZeroU32::MIN))?;
    }

    // Bump the first product to two units through the policy operation.
    if let Some(first) = fixture.featured().first() {
        session.update_quantity(&ProductId::new(first.clone()), 2);
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    write_summary(&mut handle, session.cart())?;

    let draft = OrderDraft::from_cart(session.cart())?;

    println!(
        "POST /orders payload:\n{}",
        serde_json::to_string_pretty(&draft)?
    );

    Ok(())
}
