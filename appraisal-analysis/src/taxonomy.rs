//! Semantic-category taxonomy.
//!
//! Categories are labeled lemma sets with union semantics: a lemma may sit
//! in several categories at once ("dramático" is both a genre and an
//! expressive quality), and a lemma in none of them falls back to the
//! taxonomy's catch-all category.

use std::collections::{BTreeMap, BTreeSet};

/// Category-name → member-lemma mapping with a fallback category.
///
/// Membership is context-free: it never depends on document, negation, or
/// extraction strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTaxonomy {
    categories: BTreeMap<String, BTreeSet<String>>,
    fallback: String,
}

impl CategoryTaxonomy {
    pub fn new(fallback: impl Into<String>) -> Self {
        CategoryTaxonomy {
            categories: BTreeMap::new(),
            fallback: fallback.into(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, members: impl IntoIterator<Item = String>) {
        self.categories
            .entry(name.into())
            .or_default()
            .extend(members);
    }

    /// All categories the lemma belongs to, in category-name order; the
    /// fallback category alone when it belongs to none. Never empty.
    pub fn categorize(&self, lemma: &str) -> Vec<&str> {
        let matched: Vec<&str> = self
            .categories
            .iter()
            .filter(|(_, members)| members.contains(lemma))
            .map(|(name, _)| name.as_str())
            .collect();
        if matched.is_empty() {
            vec![self.fallback.as_str()]
        } else {
            matched
        }
    }

    pub fn fallback_category(&self) -> &str {
        &self.fallback
    }

    /// Category names in iteration order (the fallback is not listed).
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
