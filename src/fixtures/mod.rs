//! Fixtures

use std::{fs, num::NonZeroU32, path::PathBuf};

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{
    cart::{Cart, CartError},
    catalog::{CatalogError, Category, validate_tree},
    fixtures::{catalog::CatalogFixture, products::ProductsFixture},
    items::ProductId,
    products::Product,
};

pub mod catalog;
pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No products loaded yet
    #[error("No products loaded yet; currency unknown")]
    NoCurrency,

    /// No featured products loaded
    #[error("No featured products loaded; cannot create cart")]
    NoProducts,

    /// Not enough featured products in fixture
    #[error("Not enough products in fixture, available: {available}, requested: {requested}")]
    NotEnoughProducts {
        /// Number of featured products defined in the fixture
        available: usize,
        /// Number of products requested
        requested: usize,
    },

    /// The fixture tree violates a hierarchy invariant
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Cart creation error
    #[error("Failed to create cart: {0}")]
    Cart(#[from] CartError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Product records keyed by their fixture key
    products: FxHashMap<String, Product<'static>>,

    /// Ordered product keys for deterministic cart construction
    featured: Vec<String>,

    /// Validated category tree
    categories: Vec<Category>,

    /// Currency for the fixture set
    currency: Option<&'static Currency>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            products: FxHashMap::default(),
            featured: Vec::new(),
            categories: Vec::new(),
            currency: None,
        }
    }

    /// Load products from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if there
    /// are currency mismatches between products.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ProductsFixture = serde_norway::from_str(&contents)?;

        for (key, product_fixture) in fixture.products {
            let product = product_fixture.into_product(ProductId::new(key.clone()))?;
            let currency = product.price.currency();

            if let Some(existing_currency) = self.currency {
                if existing_currency != currency {
                    return Err(FixtureError::CurrencyMismatch(
                        existing_currency.iso_alpha_code.to_string(),
                        currency.iso_alpha_code.to_string(),
                    ));
                }
            } else {
                self.currency = Some(currency);
            }

            self.products.insert(key, product);
        }

        for key in &fixture.featured {
            if !self.products.contains_key(key) {
                return Err(FixtureError::ProductNotFound(key.clone()));
            }
        }

        self.featured.extend(fixture.featured);

        Ok(self)
    }

    /// Load and validate a category tree from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// tree violates a hierarchy invariant.
    pub fn load_catalog(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("catalog").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: CatalogFixture = serde_norway::from_str(&contents)?;

        validate_tree(&fixture.categories)?;

        self.categories = fixture.categories;

        Ok(self)
    }

    /// Load a complete fixture set (products and catalogue with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_products(name)?.load_catalog(name)?;

        Ok(fixture)
    }

    /// Get a product by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product(&self, key: &str) -> Result<&Product<'static>, FixtureError> {
        self.products
            .get(key)
            .ok_or_else(|| FixtureError::ProductNotFound(key.to_string()))
    }

    /// Create a cart holding one unit of each featured product, in order
    ///
    /// # Errors
    ///
    /// Returns an error if no products are loaded or `n` exceeds the
    /// featured list.
    pub fn cart(&self, n: Option<usize>) -> Result<Cart<'static>, FixtureError> {
        let currency = self.currency.ok_or(FixtureError::NoCurrency)?;

        if self.featured.is_empty() {
            return Err(FixtureError::NoProducts);
        }

        if let Some(n) = n
            && n > self.featured.len()
        {
            return Err(FixtureError::NotEnoughProducts {
                requested: n,
                available: self.featured.len(),
            });
        }

        let mut cart = Cart::new(currency);

        for key in self.featured.iter().take(n.unwrap_or(self.featured.len())) {
            let product = self.product(key)?;

            cart.add(product.to_line_item(NonZeroU32::MIN))?;
        }

        Ok(cart)
    }

    /// Ordered featured product keys
    #[must_use]
    pub fn featured(&self) -> &[String] {
        &self.featured
    }

    /// The validated category tree
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Get the currency
    ///
    /// # Errors
    ///
    /// Returns an error if no products have been loaded yet.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs, path::Path};

    use rusty_money::iso::USD;
    use testresult::TestResult;

    use super::*;

    fn write_fixture(base: &Path, category: &str, name: &str, contents: &str) -> TestResult {
        let dir = base.join(category);

        fs::create_dir_all(&dir)?;
        fs::write(dir.join(format!("{name}.yml")), contents)?;

        Ok(())
    }

    #[test]
    fn fixture_loads_products_and_catalog() -> TestResult {
        let fixture = Fixture::from_set("jewellery")?;

        assert_eq!(fixture.featured().len(), 6);

        let ring = fixture.product("solitaire-ring")?;

        assert_eq!(ring.name, "Solitaire Diamond Ring");
        assert_eq!(ring.price.to_minor_units(), 145_000);

        assert_eq!(fixture.categories().len(), 2);
        assert_eq!(fixture.currency()?, USD);

        Ok(())
    }

    #[test]
    fn fixture_cart_creates_cart_from_all_featured_products() -> TestResult {
        let fixture = Fixture::from_set("jewellery")?;
        let cart = fixture.cart(None)?;

        assert_eq!(cart.len(), 6);
        assert_eq!(cart.currency(), USD);

        Ok(())
    }

    #[test]
    fn fixture_cart_creates_cart_from_first_n_products() -> TestResult {
        let fixture = Fixture::from_set("jewellery")?;
        let cart = fixture.cart(Some(2))?;

        assert_eq!(cart.len(), 2);

        Ok(())
    }

    #[test]
    fn fixture_cart_rejects_request_for_too_many_products() -> TestResult {
        let fixture = Fixture::from_set("jewellery")?;
        let result = fixture.cart(Some(40));

        assert!(matches!(
            result,
            Err(FixtureError::NotEnoughProducts {
                requested: 40,
                available: 6
            })
        ));

        Ok(())
    }

    #[test]
    fn fixture_product_not_found_returns_error() {
        let fixture = Fixture::new();
        let result = fixture.product("nonexistent");

        assert!(matches!(result, Err(FixtureError::ProductNotFound(_))));
    }

    #[test]
    fn fixture_no_currency_returns_error() {
        let fixture = Fixture::new();
        let result = fixture.currency();

        assert!(matches!(result, Err(FixtureError::NoCurrency)));
    }

    #[test]
    fn fixture_cart_without_products_returns_error() {
        let fixture = Fixture::new();
        let result = fixture.cart(None);

        assert!(matches!(result, Err(FixtureError::NoCurrency)));
    }

    #[test]
    fn fixture_load_products_rejects_currency_mismatch() -> TestResult {
        let unique = format!(
            "vitrine-fixtures-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)?
                .as_nanos()
        );

        let base_path = env::temp_dir().join(unique);

        write_fixture(
            &base_path,
            "products",
            "usd_set",
            "products:\n  ring:\n    name: Ring\n    price: 1.00 USD\n",
        )?;

        write_fixture(
            &base_path,
            "products",
            "pkr_set",
            "products:\n  bangle:\n    name: Bangle\n    price: 1.00 PKR\n",
        )?;

        let mut fixture = Fixture::with_base_path(&base_path);

        fixture.load_products("usd_set")?;

        let result = fixture.load_products("pkr_set");

        assert!(matches!(result, Err(FixtureError::CurrencyMismatch(_, _))));

        Ok(())
    }

    #[test]
    fn fixture_rejects_featured_key_without_product() -> TestResult {
        let unique = format!(
            "vitrine-fixtures-featured-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)?
                .as_nanos()
        );

        let base_path = env::temp_dir().join(unique);

        write_fixture(
            &base_path,
            "products",
            "broken",
            "products:\n  ring:\n    name: Ring\n    price: 1.00 USD\nfeatured:\n  - ghost\n",
        )?;

        let mut fixture = Fixture::with_base_path(&base_path);

        let result = fixture.load_products("broken");

        assert!(matches!(result, Err(FixtureError::ProductNotFound(key)) if key == "ghost"));

        Ok(())
    }

    #[test]
    fn fixture_load_catalog_rejects_invalid_tree() -> TestResult {
        let unique = format!(
            "vitrine-fixtures-catalog-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)?
                .as_nanos()
        );

        let base_path = env::temp_dir().join(unique);

        write_fixture(
            &base_path,
            "catalog",
            "broken",
            concat!(
                "categories:\n",
                "  - id: c2\n",
                "    name: { en: Rings, ur: R, ar: R }\n",
                "    slug: rings\n",
                "    level: 2\n",
            ),
        )?;

        let mut fixture = Fixture::with_base_path(&base_path);

        let result = fixture.load_catalog("broken");

        assert!(matches!(
            result,
            Err(FixtureError::Catalog(CatalogError::RootLevel(_)))
        ));

        Ok(())
    }

    #[test]
    fn fixture_default_matches_new() {
        let fixture = Fixture::default();

        assert_eq!(fixture.base_path, PathBuf::from("./fixtures"));
        assert!(fixture.featured.is_empty());
        assert!(fixture.categories.is_empty());
    }
}
