// Copyright 2025 Cowboy AI, LLC.

//! Decision predicates over finite domains
//!
//! Subset, equality, disjointness, emptiness, and cardinality, plus the
//! n-ary disjointness generalizations. All predicates are domain-level: they
//! compare distinct value domains and ignore order and duplicate count.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::boolean;
use crate::set_ops;
use crate::value::{Domain, DomainMode};

/// The reported size of a domain.
///
/// Sequence mode counts positions exactly, duplicates included. Collection
/// mode only tracks distinctness, not multiplicity, so its count is reported
/// as opaque rather than as a concrete integer. Preserve this asymmetry; it
/// reflects what is statically knowable, not a gap to be fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Cardinality {
    /// Exact position count of a Sequence-mode domain
    Exact(usize),
    /// Some non-negative integer, known only once the collection is
    /// materialized
    Opaque,
}

impl Cardinality {
    /// The exact count, when one is statically known.
    pub fn exact(&self) -> Option<usize> {
        match self {
            Cardinality::Exact(count) => Some(*count),
            Cardinality::Opaque => None,
        }
    }

    /// Whether an exact count is available.
    pub fn is_exact(&self) -> bool {
        matches!(self, Cardinality::Exact(_))
    }
}

/// True iff every distinct value that can occur in `a` can also occur in
/// `b`. Domain inclusion, not multiset inclusion: repeats in `a` do not
/// require repeats in `b`. Reflexive; the empty domain is a subset of every
/// domain.
pub fn is_subset(a: &Domain, b: &Domain) -> bool {
    let b_values = b.value_set();
    a.elements().iter().all(|value| b_values.contains(value))
}

/// Domain equality: subset both ways. Order and duplicate count are
/// irrelevant.
pub fn are_equal(a: &Domain, b: &Domain) -> bool {
    boolean::and(is_subset(a, b), is_subset(b, a))
}

/// True iff the two value domains share no value.
pub fn is_disjoint(a: &Domain, b: &Domain) -> bool {
    is_empty(&set_ops::intersection(a, b))
}

/// True iff the domain has an empty value domain.
pub fn is_empty(a: &Domain) -> bool {
    a.is_empty()
}

/// The cardinality of a domain, exact only in Sequence mode.
pub fn cardinality(a: &Domain) -> Cardinality {
    match a.mode() {
        DomainMode::Sequence => Cardinality::Exact(a.len()),
        DomainMode::Collection => Cardinality::Opaque,
    }
}

/// Pairwise-disjointness over two or three domains. With the third domain
/// omitted this is exactly [`is_disjoint`]`(a, b)`.
pub fn is_disjoint_union(a: &Domain, b: &Domain, c: Option<&Domain>) -> bool {
    match c {
        None => is_disjoint(a, b),
        Some(c) => boolean::all_true([
            is_disjoint(a, b),
            is_disjoint(a, c),
            is_disjoint(b, c),
        ]),
    }
}

/// True iff every domain in the sequence is disjoint from every other.
///
/// Checks the head against each remaining domain, then recurses on the tail
/// (expressed as a loop with early exit). Zero or one domain is vacuously
/// disjoint.
pub fn are_all_disjoint(domains: &[Domain]) -> bool {
    let mut rest = domains;
    while let Some((head, tail)) = rest.split_first() {
        if !tail.iter().all(|other| is_disjoint(head, other)) {
            return false;
        }
        rest = tail;
    }
    true
}

/// True iff every unordered pair of distinctly named domains is disjoint.
/// A name checked against itself is excluded from the check, never counted
/// as a violation.
pub fn are_pairwise_disjoint(named: &IndexMap<String, Domain>) -> bool {
    for (index, (_, a)) in named.iter().enumerate() {
        for (_, b) in named.iter().skip(index + 1) {
            if !is_disjoint(a, b) {
                return false;
            }
        }
    }
    true
}
