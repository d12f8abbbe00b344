// Copyright 2025 Cowboy AI, LLC.

//! # Domain Algebra
//!
//! Finite-domain set algebra, decision predicates, and tagged sum-type
//! construction.
//!
//! This crate provides the building blocks for computing over named
//! collections of discrete values:
//! - **Domains**: finite value collections in Sequence (ordered,
//!   duplicate-preserving) or Collection (value-unique) mode
//! - **Set Operations**: union, intersection, difference, symmetric
//!   difference, complement
//! - **Predicates**: subset, equality, disjointness, emptiness, cardinality,
//!   and their n-ary generalizations
//! - **Combinatorics**: Cartesian products and lazy power sets
//! - **Sum Types**: tagged disjoint unions with construction-time-validated
//!   exhaustive pattern matchers, plus a transition-table state machine
//! - **Boolean Algebra**: two-valued connectives for composing predicates
//!   into validation expressions
//!
//! ## Design Principles
//!
//! 1. **Purity**: every operation is a deterministic, side-effect-free
//!    computation; inputs are never mutated
//! 2. **Reproducibility**: no arbitrary reordering or deduplication —
//!    results are byte-for-byte reproducible from the same inputs
//! 3. **Mode Discipline**: Sequence vs Collection is a property of the
//!    concrete value; mixed-mode operations resolve to the first operand's
//!    mode
//! 4. **Totality**: set operations and predicates never fail; errors exist
//!    only for malformed sum-type construction, surfaced at construction
//!    time
//! 5. **Composition**: derived connectives are built from and/or/not, and
//!    convenience sum types (Result, Option, state machines) are named
//!    specializations of one mechanism

#![warn(missing_docs)]

pub mod boolean;
pub mod combinatorics;
mod errors;
pub mod predicates;
pub mod set_ops;
mod sum_type;
mod value;

// Re-export core types
pub use errors::{DomainError, DomainResult};
pub use value::{Domain, DomainMode, DomainValue};

pub use combinatorics::{cartesian_product, power_set, PowerSet};
pub use predicates::{
    are_all_disjoint, are_equal, are_pairwise_disjoint, cardinality, is_disjoint,
    is_disjoint_union, is_empty, is_subset, Cardinality,
};
pub use set_ops::{complement, difference, intersection, symmetric_difference, union};
pub use sum_type::{
    PatternMatcher, PatternMatcherBuilder, StateMachine, StateTransition, SumType, TaggedValue,
};

pub use boolean::{all_true, and, any_true, iff, implies, nand, nor, not, or, select, xor};
