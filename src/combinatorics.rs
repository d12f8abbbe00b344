// Copyright 2025 Cowboy AI, LLC.

//! Combinatorial operations over finite domains
//!
//! Cartesian products and power sets. Both are combinatorial in cost
//! (`n * m` and `2^n` respectively); the power set is therefore exposed as a
//! lazy producer rather than an eager materialization.

use tracing::trace;

use crate::value::{Domain, DomainMode, DomainValue};

/// Cartesian product of two domains.
///
/// Produces `Pair(a, b)` for every `a` in the first operand and every `b` in
/// the second, outer loop over the first operand, inner loop over the second
/// (the second varies fastest). The first operand's mode fixes the result's
/// mode. An empty operand absorbs: the result is empty.
pub fn cartesian_product(a: &Domain, b: &Domain) -> Domain {
    let mut pairs = Vec::with_capacity(a.len().saturating_mul(b.len()));
    for left in a.elements() {
        for right in b.elements() {
            pairs.push(DomainValue::pair(left.clone(), right.clone()));
        }
    }
    match a.mode() {
        DomainMode::Sequence => Domain::Sequence(pairs),
        DomainMode::Collection => Domain::collection(pairs),
    }
}

/// Begin lazy enumeration of every sub-collection of a domain's value
/// domain.
///
/// Duplicates in a Sequence-mode operand collapse first; enumeration then
/// covers all `2^n` subsets of the `n` distinct values, from the empty
/// domain up to the full value domain. The producer is finite and not
/// restartable mid-iteration; call `power_set` again to re-enumerate.
pub fn power_set(a: &Domain) -> PowerSet {
    let values: Vec<DomainValue> = a.value_set().into_iter().cloned().collect();
    trace!(distinct = values.len(), "enumerating power set");
    let membership = vec![false; values.len()];
    PowerSet {
        values,
        membership,
        done: false,
    }
}

/// Lazy iterator over the power set of a value domain.
///
/// Subsets are yielded in binary-counter order over a membership vector, so
/// enumeration is deterministic and needs no bit-width cap on the domain
/// size. Every yielded subset is a Collection-mode domain.
#[derive(Debug, Clone)]
pub struct PowerSet {
    values: Vec<DomainValue>,
    membership: Vec<bool>,
    done: bool,
}

impl PowerSet {
    /// Total number of subsets this producer will yield, `None` when `2^n`
    /// overflows `usize`.
    pub fn subset_count(&self) -> Option<usize> {
        1usize.checked_shl(self.values.len() as u32)
    }
}

impl Iterator for PowerSet {
    type Item = Domain;

    fn next(&mut self) -> Option<Domain> {
        if self.done {
            return None;
        }
        let subset: Vec<DomainValue> = self
            .values
            .iter()
            .zip(&self.membership)
            .filter(|(_, included)| **included)
            .map(|(value, _)| value.clone())
            .collect();

        // Advance the membership vector as a binary counter, least
        // significant position first; a carry out of the top marks the end.
        let mut carried = true;
        for included in self.membership.iter_mut() {
            if *included {
                *included = false;
            } else {
                *included = true;
                carried = false;
                break;
            }
        }
        if carried {
            self.done = true;
        }

        Some(Domain::Collection(subset))
    }
}
