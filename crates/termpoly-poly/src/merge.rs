//! Canonical merging of sorted term sequences.
//!
//! Every path that combines terms funnels through [`fold`]: a term
//! landing on an exponent already stored is summed into that slot, and a
//! zero coefficient never survives. The two-cursor [`merge`]
//! is written once against the sink so the dynamic, fixed-capacity and
//! length-counting callers all see identical results.

use std::borrow::Cow;
use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::ordering::TermOrder;
use crate::term::Term;

/// Destination for canonically merged terms.
pub trait TermSink {
    /// Returns the most recently emitted term.
    fn last_term(&self) -> Option<Term>;

    /// Replaces the most recently emitted term.
    fn replace_last_term(&mut self, term: Term);

    /// Removes the most recently emitted term.
    fn pop_term(&mut self);

    /// Emits a new term.
    fn push_term(&mut self, term: Term);

    /// Folds `term` into the sequence.
    ///
    /// The last emitted term is the fold target when its exponent
    /// matches; see [`fold`] for the rule applied.
    fn absorb(&mut self, term: Term) {
        let existing = self
            .last_term()
            .filter(|last| last.exponent() == term.exponent());

        match fold(existing.as_ref(), term) {
            Fold::Replace(t) => self.replace_last_term(t),
            Fold::Remove => self.pop_term(),
            Fold::Insert(t) => self.push_term(t),
            Fold::Skip => {}
        }
    }
}

/// What to do with the slot for an exponent after folding a term into it.
#[derive(Clone, Copy, Debug)]
pub enum Fold {
    /// Overwrite the existing slot with this term.
    Replace(Term),
    /// The existing slot cancelled to zero; remove it.
    Remove,
    /// Open a new slot holding this term.
    Insert(Term),
    /// Leave the sequence untouched.
    Skip,
}

/// The canonicalization rule for a single term.
///
/// `existing` is the stored term with the same exponent as `term`, if
/// there is one. The coefficients are summed into it and the slot is
/// removed when the sum is exactly zero. Without an existing slot the
/// term is stored unless its coefficient is zero.
///
/// Both [`TermSink::absorb`] and [`Polynomial::insert`] apply this rule.
///
/// [`Polynomial::insert`]: crate::Polynomial::insert
#[must_use]
pub fn fold(existing: Option<&Term>, term: Term) -> Fold {
    match existing {
        Some(slot) => {
            let sum = slot.coefficient() + term.coefficient();
            if sum == 0.0 {
                debug!(exponent = term.exponent(), "terms cancelled");
                Fold::Remove
            } else {
                Fold::Replace(Term::new(sum, slot.exponent()))
            }
        }
        None if term.is_zero() => {
            trace!(exponent = term.exponent(), "zero term dropped");
            Fold::Skip
        }
        None => Fold::Insert(term),
    }
}

impl TermSink for Vec<Term> {
    fn last_term(&self) -> Option<Term> {
        self.last().copied()
    }

    fn replace_last_term(&mut self, term: Term) {
        if let Some(slot) = self.last_mut() {
            *slot = term;
        }
    }

    fn pop_term(&mut self) {
        self.pop();
    }

    fn push_term(&mut self, term: Term) {
        self.push(term);
    }
}

/// Writes terms into a fixed slice by index.
///
/// Pushing beyond the slice is counted but not stored, so an undersized
/// buffer is detected by comparing [`SlotWriter::len`] with the capacity.
#[derive(Debug)]
pub struct SlotWriter<'a> {
    slots: &'a mut [Term],
    len: usize,
    last: Option<Term>,
}

impl<'a> SlotWriter<'a> {
    /// Creates a writer over `slots`, starting empty.
    pub fn new(slots: &'a mut [Term]) -> Self {
        Self {
            slots,
            len: 0,
            last: None,
        }
    }

    /// Number of terms emitted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing has been emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn store(&mut self, term: Term) {
        if let Some(slot) = self.slots.get_mut(self.len - 1) {
            *slot = term;
        }
        self.last = Some(term);
    }
}

impl TermSink for SlotWriter<'_> {
    fn last_term(&self) -> Option<Term> {
        self.last
    }

    fn replace_last_term(&mut self, term: Term) {
        self.store(term);
    }

    fn pop_term(&mut self) {
        if let Some(slot) = self.slots.get_mut(self.len - 1) {
            *slot = Term::ZERO;
        }
        self.len -= 1;
        self.last = match self.len {
            0 => None,
            n => self.slots.get(n - 1).copied(),
        };
    }

    fn push_term(&mut self, term: Term) {
        self.len += 1;
        self.store(term);
    }
}

/// Counts the terms a merge would emit without storing them.
#[derive(Clone, Copy, Debug, Default)]
pub struct LenCounter {
    len: usize,
    stack: [Option<Term>; 2],
}

impl LenCounter {
    /// Number of terms emitted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing has been emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl TermSink for LenCounter {
    fn last_term(&self) -> Option<Term> {
        self.stack[1]
    }

    fn replace_last_term(&mut self, term: Term) {
        self.stack[1] = Some(term);
    }

    fn pop_term(&mut self) {
        self.len -= 1;
        self.stack = [None, self.stack[0]];
    }

    fn push_term(&mut self, term: Term) {
        self.len += 1;
        self.stack = [self.stack[1], Some(term)];
    }
}

/// Merges two sequences sorted under `order` into `sink`.
///
/// At each step the term placed first by `order` is taken; on an
/// exponent tie both are taken. Remainders are flushed once either side
/// runs out. Runs in O(n + m).
pub fn merge<S: TermSink>(lhs: &[Term], rhs: &[Term], order: TermOrder, sink: &mut S) {
    let mut i = 0;
    let mut j = 0;

    while i < lhs.len() && j < rhs.len() {
        match order.compare(&lhs[i], &rhs[j]) {
            Ordering::Less => {
                sink.absorb(lhs[i]);
                i += 1;
            }
            Ordering::Greater => {
                sink.absorb(rhs[j]);
                j += 1;
            }
            Ordering::Equal => {
                let sum = lhs[i].coefficient() + rhs[j].coefficient();
                sink.absorb(Term::new(sum, lhs[i].exponent()));
                i += 1;
                j += 1;
            }
        }
    }

    for &t in &lhs[i..] {
        sink.absorb(t);
    }
    for &t in &rhs[j..] {
        sink.absorb(t);
    }
}

/// Returns `terms` sorted under `order`, borrowing when already sorted.
#[must_use]
pub fn sorted_view(terms: &[Term], order: TermOrder) -> Cow<'_, [Term]> {
    if order.is_sorted(terms) {
        Cow::Borrowed(terms)
    } else {
        let mut owned = terms.to_vec();
        owned.sort_by(|a, b| order.compare(a, b));
        Cow::Owned(owned)
    }
}

/// Folds an arbitrary sorted sequence into canonical form.
#[must_use]
pub fn canonicalize(terms: &[Term]) -> Vec<Term> {
    let mut out = Vec::with_capacity(terms.len());
    for &t in terms {
        out.absorb(t);
    }
    out
}
