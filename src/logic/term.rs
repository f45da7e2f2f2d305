//! Defines `Term`, the atomic named concept that propositions relate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A logical term: the subject or predicate of a categorical proposition.
///
/// Identity is value-based and normalization-insensitive: two terms are
/// equal iff their names match after trimming surrounding whitespace and
/// lowercasing. `Hash` follows the same normalized form, so terms behave
/// correctly in set-like collections and deduplication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    name: String,
}

impl Term {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name exactly as originally written, untouched by normalization.
    pub fn name(&self) -> &str {
        &self.name
    }

    // Normalized character stream, allocation-free. `Eq` and `Hash` both
    // consume this iterator, so the two can never drift apart.
    fn normalized(&self) -> impl Iterator<Item = char> + '_ {
        self.name.trim().chars().flat_map(char::to_lowercase)
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.normalized().eq(other.normalized())
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.normalized() {
            c.hash(state);
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.trim())
    }
}
