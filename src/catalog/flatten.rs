//! Tree flattening for selector widgets
//!
//! The tree arrives nested (cheap for rendering nested navigation) but
//! selector widgets want a flat, filterable list. The flat view is
//! re-derived from the tree on demand rather than kept as a second
//! synchronized structure.

use crate::catalog::{Category, CategoryId, CategoryLevel, Locale};

/// Default indentation unit for dropdown labels.
pub const DEFAULT_INDENT: &str = "  ";

/// One flattened tree entry, labelled for linear UI consumption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatCategory<'a> {
    category: &'a Category,
    label: String,
}

impl<'a> FlatCategory<'a> {
    /// Display label: the localized name prefixed by one indent unit per
    /// level below the root.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The underlying category node.
    #[must_use]
    pub fn category(&self) -> &'a Category {
        self.category
    }

    /// Depth of the entry.
    #[must_use]
    pub fn level(&self) -> CategoryLevel {
        self.category.level
    }

    /// Lookup slug of the entry.
    #[must_use]
    pub fn slug(&self) -> &'a str {
        &self.category.slug
    }

    /// Back-reference to the owning category, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&'a CategoryId> {
        self.category.parent.as_ref()
    }
}

/// Flatten a tree depth-first with the default indent and full depth.
#[must_use]
pub fn flatten<'a>(roots: &'a [Category], locale: Locale) -> Vec<FlatCategory<'a>> {
    flatten_with(roots, locale, CategoryLevel::Base, DEFAULT_INDENT)
}

/// Flatten a tree depth-first, stopping at `max_level`.
///
/// Nodes deeper than `max_level` are excluded rather than rejected: a
/// conformant backend never produces them, so deeper data is an ignorable
/// anomaly here.
#[must_use]
pub fn flatten_with<'a>(
    roots: &'a [Category],
    locale: Locale,
    max_level: CategoryLevel,
    indent: &str,
) -> Vec<FlatCategory<'a>> {
    let mut entries = Vec::new();

    push_entries(roots, locale, max_level, indent, &mut entries);

    entries
}

fn push_entries<'a>(
    nodes: &'a [Category],
    locale: Locale,
    max_level: CategoryLevel,
    indent: &str,
    entries: &mut Vec<FlatCategory<'a>>,
) {
    for node in nodes {
        if node.level > max_level {
            continue;
        }

        let label = format!(
            "{}{}",
            indent.repeat(node.level.indent_steps()),
            node.name.get(locale)
        );

        entries.push(FlatCategory {
            category: node,
            label,
        });

        if node.level < max_level {
            push_entries(&node.children, locale, max_level, indent, entries);
        }
    }
}

/// Cascading-select filter: entries directly under `parent` at the
/// expected child `level`.
pub fn filter_by_parent<'a, 'f>(
    entries: &'f [FlatCategory<'a>],
    parent: &CategoryId,
    level: CategoryLevel,
) -> impl Iterator<Item = &'f FlatCategory<'a>> {
    let parent = parent.clone();

    entries
        .iter()
        .filter(move |entry| entry.level() == level && entry.parent() == Some(&parent))
}
