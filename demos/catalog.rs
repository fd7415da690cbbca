//! Catalogue Demo
//!
//! Loads a category tree fixture, prints the flattened dropdown view in the
//! chosen locale, then walks a cascading main → sub → base selection.
//!
//! Use `-f` to load a fixture set by name
//! Use `-l` to choose the display locale (en, ur, ar)

use anyhow::Result;
use clap::Parser;
use vitrine::{
    catalog::{
        CategoryLevel, Locale, find_by_slug,
        flatten::{FlatCategory, filter_by_parent, flatten},
        index::CategoryIndex,
    },
    fixtures::Fixture,
    utils::DemoArgs,
};

/// Catalogue Demo
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = DemoArgs::parse();
    let locale: Locale = args.locale.parse()?;

    let fixture = Fixture::from_set(&args.fixture)?;
    let tree = fixture.categories();

    println!("Dropdown view ({}):", locale.as_str());

    let flat = flatten(tree, locale);

    for entry in &flat {
        println!("  {}", entry.label());
    }

    if let Some(rings) = find_by_slug(tree, "rings") {
        println!(
            "\nfind_by_slug(\"rings\") -> {} with {} base categories",
            rings.name.get(locale),
            rings.children.len()
        );
    }

    // Cascading selects: pick the first main category, then its subs, then bases.
    let index = CategoryIndex::new(tree);

    if let Some(main) = flat.first().map(FlatCategory::category) {
        println!("\nSelected main category: {}", main.name.get(locale));

        for sub in filter_by_parent(&flat, &main.id, CategoryLevel::Sub) {
            println!("  sub: {}", sub.category().name.get(locale));

            for base in index.children_of(&sub.category().id) {
                println!("    base: {}", base.name.get(locale));
            }
        }
    }

    Ok(())
}
