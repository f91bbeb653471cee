//! Case-insensitive title search.

use crate::model::Entity;

/// Current search term of a list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    term: String,
    folded: String,
}

impl SearchFilter {
    pub fn new(term: impl Into<String>) -> Self {
        let mut filter = Self::default();
        filter.set_term(term);
        filter
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Replaces the term. The term is used verbatim, not trimmed.
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.folded = self.term.to_lowercase();
    }

    /// Whether `title` contains the term, ignoring case.
    pub fn matches(&self, title: &str) -> bool {
        self.folded.is_empty() || title.to_lowercase().contains(&self.folded)
    }

    /// Records whose title matches, in collection order.
    pub fn apply<'a, T, I>(&self, records: I) -> Vec<&'a T>
    where
        T: Entity + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        records
            .into_iter()
            .filter(|record| self.matches(record.title()))
            .collect()
    }
}
