//! Vitrine prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, session::CartSession},
    catalog::{
        CatalogError, Category, CategoryId, CategoryLevel, Locale, LocalizedName, find_by_slug,
        flatten::{DEFAULT_INDENT, FlatCategory, filter_by_parent, flatten, flatten_with},
        index::CategoryIndex,
        validate_tree,
    },
    checkout::{CheckoutError, OrderDraft, OrderLine},
    items::{LineItem, ProductId},
    pricing::{PricingError, line_total, subtotal},
    products::Product,
    store::{
        CartSnapshot, CartStore, SnapshotItem, StoreError,
        json_file::{JsonFileStore, STORE_FILE_NAME},
        memory::MemoryStore,
    },
    summary::{SummaryError, write_summary},
};
