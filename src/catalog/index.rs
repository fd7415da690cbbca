//! Catalogue lookup index
//!
//! Slug and parent lookup tables built once per fetched snapshot, for
//! pages that run many selector queries against the same tree. Lookups
//! agree with the depth-first rules of [`crate::catalog::find_by_slug`]:
//! on duplicate slugs the first node in traversal order wins.

use rustc_hash::FxHashMap;

use crate::catalog::{Category, CategoryId};

/// Lookup index over a fetched category tree.
#[derive(Debug)]
pub struct CategoryIndex<'a> {
    by_slug: FxHashMap<&'a str, &'a Category>,
    children: FxHashMap<&'a CategoryId, Vec<&'a Category>>,
}

impl<'a> CategoryIndex<'a> {
    /// Build an index over the given tree snapshot.
    #[must_use]
    pub fn new(roots: &'a [Category]) -> Self {
        let mut index = CategoryIndex {
            by_slug: FxHashMap::default(),
            children: FxHashMap::default(),
        };

        index.insert_all(roots);

        index
    }

    fn insert_all(&mut self, nodes: &'a [Category]) {
        for node in nodes {
            self.by_slug.entry(node.slug.as_str()).or_insert(node);

            if !node.children.is_empty() {
                self.children
                    .insert(&node.id, node.children.iter().collect());
            }

            self.insert_all(&node.children);
        }
    }

    /// Look up a category by slug.
    #[must_use]
    pub fn by_slug(&self, slug: &str) -> Option<&'a Category> {
        self.by_slug.get(slug).copied()
    }

    /// Direct children of a category; empty for leaves and unknown ids.
    #[must_use]
    pub fn children_of(&self, parent: &CategoryId) -> &[&'a Category] {
        self.children.get(parent).map_or(&[], Vec::as_slice)
    }

    /// Number of indexed categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_slug.len()
    }

    /// Whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_slug.is_empty()
    }
}
