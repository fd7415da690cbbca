//! Category catalogue
//!
//! Read-model for the storefront's 3-level category hierarchy
//! (main → sub → base). The tree is fetched as a nested snapshot from the
//! upstream API; this module never mutates category identity, it only
//! validates the snapshot at the boundary and derives selector-friendly
//! views from it.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod flatten;
pub mod index;

/// Errors related to catalogue data validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A category level outside 1..=3 appeared at the API boundary.
    #[error("invalid category level: {0} (expected 1..=3)")]
    InvalidLevel(u8),

    /// A locale tag outside the supported set.
    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    /// A top-level category that is not a main category.
    #[error("root category {0} is not a main category")]
    RootLevel(CategoryId),

    /// A child category that does not sit exactly one level below its parent.
    #[error("category {child} sits under {parent} but is not one level below it")]
    LevelMismatch {
        /// The owning category.
        parent: CategoryId,

        /// The offending child.
        child: CategoryId,
    },

    /// A child category whose back-reference does not point at its parent.
    #[error("category {child} does not reference {parent} as its parent")]
    ParentMismatch {
        /// The owning category.
        parent: CategoryId,

        /// The offending child.
        child: CategoryId,
    },
}

/// Storefront display locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (default).
    #[default]
    En,

    /// Urdu.
    Ur,

    /// Arabic.
    Ar,
}

impl Locale {
    /// Canonical locale tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ur => "ur",
            Self::Ar => "ar",
        }
    }
}

impl FromStr for Locale {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ur" => Ok(Self::Ur),
            "ar" => Ok(Self::Ar),
            other => Err(CatalogError::UnknownLocale(other.to_string())),
        }
    }
}

/// Display name in every supported locale.
///
/// Admin-created categories carry all three translations; there is no
/// fallback chain at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedName {
    /// English name.
    pub en: String,

    /// Urdu name.
    pub ur: String,

    /// Arabic name.
    pub ar: String,
}

impl LocalizedName {
    /// Create a localized name from the three translations.
    pub fn new(en: impl Into<String>, ur: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ur: ur.into(),
            ar: ar.into(),
        }
    }

    /// The name in the given locale.
    #[must_use]
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Ur => &self.ur,
            Locale::Ar => &self.ar,
        }
    }
}

/// Depth of a category in the hierarchy.
///
/// The hierarchy is closed at three levels; anything deeper is rejected at
/// the deserialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CategoryLevel {
    /// Level 1: a root category.
    Main,

    /// Level 2: a sub-category under a main category.
    Sub,

    /// Level 3: a leaf category under a sub-category.
    Base,
}

impl CategoryLevel {
    /// Numeric depth, 1..=3.
    #[must_use]
    pub const fn depth(self) -> u8 {
        match self {
            Self::Main => 1,
            Self::Sub => 2,
            Self::Base => 3,
        }
    }

    /// The level one below this one, if any.
    #[must_use]
    pub const fn child(self) -> Option<Self> {
        match self {
            Self::Main => Some(Self::Sub),
            Self::Sub => Some(Self::Base),
            Self::Base => None,
        }
    }

    /// Indentation steps for dropdown rendering (depth − 1).
    #[must_use]
    pub const fn indent_steps(self) -> usize {
        (self.depth() - 1) as usize
    }
}

impl TryFrom<u8> for CategoryLevel {
    type Error = CatalogError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Main),
            2 => Ok(Self::Sub),
            3 => Ok(Self::Base),
            other => Err(CatalogError::InvalidLevel(other)),
        }
    }
}

impl From<CategoryLevel> for u8 {
    fn from(level: CategoryLevel) -> Self {
        level.depth()
    }
}

/// Opaque category identifier assigned by the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Create a category id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One node of the fetched category tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier.
    pub id: CategoryId,

    /// Localized display names.
    pub name: LocalizedName,

    /// URL-safe lookup key.
    pub slug: String,

    /// Depth in the hierarchy.
    pub level: CategoryLevel,

    /// Back-reference to the owning category; absent for main categories.
    #[serde(default)]
    pub parent: Option<CategoryId>,

    /// Child categories, present when the node was fetched as part of a tree.
    #[serde(default)]
    pub children: Vec<Category>,
}

/// Depth-first search for the first category with a matching slug.
///
/// Traversal is parent-before-child, top-to-bottom, so duplicate slugs
/// resolve to the shallowest, earliest match. Returns the node itself,
/// children included.
#[must_use]
pub fn find_by_slug<'a>(roots: &'a [Category], slug: &str) -> Option<&'a Category> {
    for category in roots {
        if category.slug == slug {
            return Some(category);
        }

        if let Some(found) = find_by_slug(&category.children, slug) {
            return Some(found);
        }
    }

    None
}

/// Validate a fetched tree against the hierarchy invariants.
///
/// Every root must be a main category, every child must sit exactly one
/// level below its parent, and every child's back-reference must point at
/// the node that owns it.
///
/// # Errors
///
/// Returns the first [`CatalogError`] found in depth-first order.
pub fn validate_tree(roots: &[Category]) -> Result<(), CatalogError> {
    for root in roots {
        if root.level != CategoryLevel::Main {
            return Err(CatalogError::RootLevel(root.id.clone()));
        }

        validate_children(root)?;
    }

    Ok(())
}

fn validate_children(node: &Category) -> Result<(), CatalogError> {
    for child in &node.children {
        if Some(child.level) != node.level.child() {
            return Err(CatalogError::LevelMismatch {
                parent: node.id.clone(),
                child: child.id.clone(),
            });
        }

        if child.parent.as_ref() != Some(&node.id) {
            return Err(CatalogError::ParentMismatch {
                parent: node.id.clone(),
                child: child.id.clone(),
            });
        }

        validate_children(child)?;
    }

    Ok(())
}
