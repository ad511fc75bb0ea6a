//! Term orderings for polynomial containers.
//!
//! A polynomial keeps its terms sorted under one of these policies.
//! Merging and insertion rely on the ordering being recorded on the
//! container, so it is always named explicitly.

use std::cmp::Ordering;

use crate::term::Term;

/// An ordering policy over term exponents.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum TermOrder {
    /// Lowest exponent first.
    #[default]
    Ascending,

    /// Highest exponent first.
    Descending,
}

impl TermOrder {
    /// Compares two exponents according to this ordering.
    ///
    /// `Ordering::Less` means `a` is placed before `b`.
    #[must_use]
    pub fn compare_exponents(&self, a: i32, b: i32) -> Ordering {
        match self {
            TermOrder::Ascending => a.cmp(&b),
            TermOrder::Descending => b.cmp(&a),
        }
    }

    /// Compares two terms according to this ordering.
    #[must_use]
    pub fn compare(&self, a: &Term, b: &Term) -> Ordering {
        self.compare_exponents(a.exponent(), b.exponent())
    }

    /// Returns true if `terms` is sorted under this ordering.
    #[must_use]
    pub fn is_sorted(&self, terms: &[Term]) -> bool {
        terms
            .windows(2)
            .all(|w| self.compare(&w[0], &w[1]) != Ordering::Greater)
    }

    /// Returns a short name for the ordering.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            TermOrder::Ascending => "ascending",
            TermOrder::Descending => "descending",
        }
    }
}

impl std::fmt::Display for TermOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
