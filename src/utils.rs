//! Utils

use clap::Parser;

/// Arguments for the storefront demos
#[derive(Debug, Parser)]
pub struct DemoArgs {
    /// Number of featured products to add to the cart
    #[clap(short, long)]
    pub n: Option<usize>,

    /// Fixture set to use for products & catalogue
    #[clap(short, long, default_value = "jewellery")]
    pub fixture: String,

    /// Display locale (en, ur, ar)
    #[clap(short, long, default_value = "en")]
    pub locale: String,
}
