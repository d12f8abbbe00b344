// Copyright 2025 Cowboy AI, LLC.

//! Core set operations over finite domains
//!
//! Union, intersection, difference, symmetric difference, and complement.
//! Every operation is total: any pair of well-formed domains, empty domains
//! included, produces a result without failure.
//!
//! Mixed-mode rule: the FIRST operand's mode determines the result's mode.
//! A Sequence-mode first operand yields an ordered, duplicate-preserving
//! result; a Collection-mode first operand yields a value-unique result with
//! the second operand coerced to its value set.

use indexmap::IndexSet;

use crate::value::{Domain, DomainMode, DomainValue};

/// Union of two domains.
///
/// Sequence mode: the concatenation of `a`'s elements followed by `b`'s, in
/// order, duplicates preserved. Collection mode: the deduplicated union of
/// both value domains.
pub fn union(a: &Domain, b: &Domain) -> Domain {
    match a.mode() {
        DomainMode::Sequence => {
            let mut elements = a.elements().to_vec();
            elements.extend(b.elements().iter().cloned());
            Domain::Sequence(elements)
        }
        DomainMode::Collection => {
            let mut unique: IndexSet<DomainValue> = a.elements().iter().cloned().collect();
            unique.extend(b.elements().iter().cloned());
            Domain::Collection(unique.into_iter().collect())
        }
    }
}

/// Intersection of two domains.
///
/// A stable filter of `a`: elements whose value does not occur in `b` are
/// dropped, the relative order of survivors is unchanged. Sequence mode
/// keeps surviving duplicates; Collection mode is the set of common values.
pub fn intersection(a: &Domain, b: &Domain) -> Domain {
    let b_values = b.value_set();
    let surviving = a
        .elements()
        .iter()
        .filter(|value| b_values.contains(*value))
        .cloned()
        .collect();
    match a.mode() {
        DomainMode::Sequence => Domain::Sequence(surviving),
        DomainMode::Collection => Domain::Collection(surviving),
    }
}

/// Difference of two domains: the elements of `a` whose value does not occur
/// in `b`. Same mode and ordering rules as [`intersection`].
pub fn difference(a: &Domain, b: &Domain) -> Domain {
    let b_values = b.value_set();
    let surviving = a
        .elements()
        .iter()
        .filter(|value| !b_values.contains(*value))
        .cloned()
        .collect();
    match a.mode() {
        DomainMode::Sequence => Domain::Sequence(surviving),
        DomainMode::Collection => Domain::Collection(surviving),
    }
}

/// Symmetric difference: `union(difference(a, b), difference(b, a))`.
pub fn symmetric_difference(a: &Domain, b: &Domain) -> Domain {
    union(&difference(a, b), &difference(b, a))
}

/// Complement of `a` relative to `universe`: `difference(universe, a)`.
pub fn complement(universe: &Domain, a: &Domain) -> Domain {
    difference(universe, a)
}
