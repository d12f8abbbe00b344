// Copyright 2025 Cowboy AI, LLC.

//! Finite domain values and their dual representation
//!
//! A [`Domain`] is a finite collection of discrete values in one of two
//! representational modes:
//! - **Sequence**: an ordered list; duplicates are permitted and preserved,
//!   position matters for reproduction but not for set semantics.
//! - **Collection**: an unordered aggregate with value-based uniqueness;
//!   structurally equal values collapse to one.
//!
//! The mode is a property of the concrete value, never inferred from the
//! element type. Collection mode stores its elements deduplicated in
//! first-occurrence order, which keeps every downstream operation
//! byte-for-byte reproducible from the same inputs.

use indexmap::IndexSet;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A discrete, directly comparable element of a finite domain.
///
/// Values are compared structurally; nested domains and pairs compare by
/// their full contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "value")]
pub enum DomainValue {
    /// Text value
    Str(String),
    /// Integer value
    Int(i64),
    /// Boolean value
    Bool(bool),
    /// A nested finite domain used as a single value
    Nested(Domain),
    /// An ordered pair, as produced by Cartesian products
    Pair(Box<DomainValue>, Box<DomainValue>),
}

impl DomainValue {
    /// Build an ordered pair value.
    pub fn pair(left: impl Into<DomainValue>, right: impl Into<DomainValue>) -> Self {
        DomainValue::Pair(Box::new(left.into()), Box::new(right.into()))
    }
}

impl From<&str> for DomainValue {
    fn from(value: &str) -> Self {
        DomainValue::Str(value.to_string())
    }
}

impl From<String> for DomainValue {
    fn from(value: String) -> Self {
        DomainValue::Str(value)
    }
}

impl From<i64> for DomainValue {
    fn from(value: i64) -> Self {
        DomainValue::Int(value)
    }
}

impl From<bool> for DomainValue {
    fn from(value: bool) -> Self {
        DomainValue::Bool(value)
    }
}

impl From<Domain> for DomainValue {
    fn from(value: Domain) -> Self {
        DomainValue::Nested(value)
    }
}

/// Representational mode of a domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum DomainMode {
    /// Ordered, duplicate-preserving
    Sequence,
    /// Unordered, value-unique
    Collection,
}

/// A finite domain: one discriminated representation with two payload shapes.
///
/// Structural equality (`==`) compares the stored representation; use
/// [`crate::predicates::are_equal`] for domain equality, which ignores order
/// and duplicate count.
///
/// Invariant: `Collection` elements are distinct, in first-occurrence order.
/// The constructors maintain this; callers building the variant directly are
/// responsible for it themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "mode", content = "elements")]
pub enum Domain {
    /// Ordered list of values; duplicates permitted and preserved
    Sequence(Vec<DomainValue>),
    /// Value-unique aggregate, stored in first-occurrence order
    Collection(Vec<DomainValue>),
}

impl Domain {
    /// Build a Sequence-mode domain, preserving order and duplicates.
    pub fn sequence<I, V>(elements: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<DomainValue>,
    {
        Domain::Sequence(elements.into_iter().map(Into::into).collect())
    }

    /// Build a Collection-mode domain, collapsing structurally equal values
    /// to their first occurrence.
    pub fn collection<I, V>(elements: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<DomainValue>,
    {
        let unique: IndexSet<DomainValue> = elements.into_iter().map(Into::into).collect();
        Domain::Collection(unique.into_iter().collect())
    }

    /// The empty domain in the given mode.
    pub fn empty(mode: DomainMode) -> Self {
        match mode {
            DomainMode::Sequence => Domain::Sequence(Vec::new()),
            DomainMode::Collection => Domain::Collection(Vec::new()),
        }
    }

    /// The representational mode of this domain.
    pub fn mode(&self) -> DomainMode {
        match self {
            Domain::Sequence(_) => DomainMode::Sequence,
            Domain::Collection(_) => DomainMode::Collection,
        }
    }

    /// The flattened values of this domain, in stored order.
    pub fn elements(&self) -> &[DomainValue] {
        match self {
            Domain::Sequence(elements) | Domain::Collection(elements) => elements,
        }
    }

    /// The distinct value domain, in first-occurrence order.
    pub fn value_set(&self) -> IndexSet<&DomainValue> {
        self.elements().iter().collect()
    }

    /// Whether `value` can occur in this domain.
    pub fn contains_value(&self, value: &DomainValue) -> bool {
        self.elements().contains(value)
    }

    /// Number of stored positions (duplicates counted in Sequence mode).
    pub fn len(&self) -> usize {
        self.elements().len()
    }

    /// Whether the domain has no elements at all.
    pub fn is_empty(&self) -> bool {
        self.elements().is_empty()
    }
}
