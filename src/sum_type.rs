// Copyright 2025 Cowboy AI, LLC.

//! Tagged sum types (disjoint unions) and their pattern-matcher contract
//!
//! A [`SumType`] is a named mapping from tag to variant domain, constructed
//! once and never mutated. Realizing it produces every `(tag, value)` pair;
//! a variant mapped to an empty domain contributes no concrete value but
//! remains a valid case of the type.
//!
//! A [`PatternMatcher`] is a total mapping from each tag of a sum type to a
//! handler producing a common result type. Exhaustiveness is validated when
//! the matcher is built, never deferred to the moment a particular tag is
//! matched, and no catch-all handler can substitute for a missing case.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{DomainError, DomainResult};
use crate::predicates;
use crate::value::{Domain, DomainMode, DomainValue};

/// An immutable `(tag, value)` pair identifying which named variant of a sum
/// type a value originated from. Fully determined at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct TaggedValue {
    tag: String,
    value: DomainValue,
}

impl TaggedValue {
    /// Pair a value with the tag of the variant it belongs to.
    pub fn new(tag: impl Into<String>, value: impl Into<DomainValue>) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
        }
    }

    /// The tag of this value.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The carried value.
    pub fn value(&self) -> &DomainValue {
        &self.value
    }

    /// Consume the pair, keeping only the carried value.
    pub fn into_value(self) -> DomainValue {
        self.value
    }
}

/// A sum type (disjoint union): a named mapping from tag to variant domain.
///
/// Insertion order of the mapping is irrelevant to the type it denotes
/// (`==` compares the mappings as maps) but is preserved so that realization
/// output is reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SumType {
    variants: IndexMap<String, Domain>,
}

impl SumType {
    /// Construct a sum type from a tag → domain mapping.
    pub fn new(variants: IndexMap<String, Domain>) -> Self {
        Self { variants }
    }

    /// The `Result`-shaped sum type: a `success` variant and an `error`
    /// variant.
    pub fn result_of(success: Domain, error: Domain) -> Self {
        let mut variants = IndexMap::new();
        variants.insert("success".to_string(), success);
        variants.insert("error".to_string(), error);
        Self::new(variants)
    }

    /// The `Option`-shaped sum type: `some` carries the payload domain,
    /// `none` is uninhabited.
    pub fn option_of(some: Domain) -> Self {
        let mut variants = IndexMap::new();
        variants.insert("some".to_string(), some);
        variants.insert("none".to_string(), Domain::empty(DomainMode::Collection));
        Self::new(variants)
    }

    /// A state-machine alphabet: one variant per state, carrying that
    /// state's payload domain.
    pub fn state_machine(states: IndexMap<String, Domain>) -> Self {
        Self::new(states)
    }

    /// The tags of this sum type, in insertion order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }

    /// The variant domain for `tag`, if the tag is part of the type.
    pub fn variant(&self, tag: &str) -> Option<&Domain> {
        self.variants.get(tag)
    }

    /// Whether `tag` names a variant of this type.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.variants.contains_key(tag)
    }

    /// Number of variants, uninhabited ones included.
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// The underlying tag → domain mapping.
    pub fn variants(&self) -> &IndexMap<String, Domain> {
        &self.variants
    }

    /// Realize the disjoint union: every `TaggedValue(tag, v)` for every `v`
    /// in that tag's domain, in variant insertion order, element order
    /// within each variant. An empty variant domain contributes nothing.
    pub fn realize(&self) -> Vec<TaggedValue> {
        let mut realized = Vec::new();
        for (tag, domain) in &self.variants {
            for value in domain.elements() {
                realized.push(TaggedValue::new(tag.clone(), value.clone()));
            }
        }
        realized
    }

    /// Project the union down to the tagged values carrying `tag`. Empty
    /// when the tag is absent.
    pub fn filter_by_tag(&self, tag: &str) -> Vec<TaggedValue> {
        match self.variants.get(tag) {
            Some(domain) => domain
                .elements()
                .iter()
                .map(|value| TaggedValue::new(tag, value.clone()))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Whether the variant domains are pairwise disjoint, i.e. every
    /// realized value identifies its variant by content as well as by tag.
    pub fn has_disjoint_variants(&self) -> bool {
        predicates::are_pairwise_disjoint(&self.variants)
    }
}

type Handler<R> = Box<dyn Fn(&DomainValue) -> R>;

/// A total, exhaustive mapping from each tag of a sum type to a handler
/// producing a common result type.
///
/// Built through [`PatternMatcher::builder`]; construction fails unless the
/// handler set covers exactly the union's tags.
pub struct PatternMatcher<R> {
    handlers: IndexMap<String, Handler<R>>,
}

impl<R> PatternMatcher<R> {
    /// Start building a matcher over `union`.
    pub fn builder(union: &SumType) -> PatternMatcherBuilder<'_, R> {
        PatternMatcherBuilder {
            union,
            handlers: IndexMap::new(),
            duplicate: None,
        }
    }

    /// Dispatch a tagged value to its handler.
    ///
    /// Fails only for a value whose tag lies outside the union the matcher
    /// was built against.
    pub fn apply(&self, tagged: &TaggedValue) -> DomainResult<R> {
        match self.handlers.get(tagged.tag()) {
            Some(handler) => Ok(handler(tagged.value())),
            None => Err(DomainError::UnknownTag {
                tag: tagged.tag().to_string(),
            }),
        }
    }
}

impl<R> std::fmt::Debug for PatternMatcher<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternMatcher")
            .field("tags", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`PatternMatcher`]; exhaustiveness is validated in
/// [`build`](PatternMatcherBuilder::build).
pub struct PatternMatcherBuilder<'a, R> {
    union: &'a SumType,
    handlers: IndexMap<String, Handler<R>>,
    duplicate: Option<String>,
}

impl<'a, R> PatternMatcherBuilder<'a, R> {
    /// Register the handler for `tag`.
    pub fn on(
        mut self,
        tag: impl Into<String>,
        handler: impl Fn(&DomainValue) -> R + 'static,
    ) -> Self {
        let tag = tag.into();
        if self
            .handlers
            .insert(tag.clone(), Box::new(handler))
            .is_some()
        {
            self.duplicate.get_or_insert(tag);
        }
        self
    }

    /// Validate the handler set against the union and produce the matcher.
    ///
    /// Fails when a tag was handled twice, when a handler names a tag the
    /// union does not contain, or when a tag of the union has no handler.
    pub fn build(self) -> DomainResult<PatternMatcher<R>> {
        if let Some(tag) = self.duplicate {
            debug!(%tag, "rejecting matcher with duplicate handler");
            return Err(DomainError::DuplicateHandler { tag });
        }
        for tag in self.handlers.keys() {
            if !self.union.has_tag(tag) {
                debug!(%tag, "rejecting matcher handling a tag outside the union");
                return Err(DomainError::UnknownTag { tag: tag.clone() });
            }
        }
        for tag in self.union.tags() {
            if !self.handlers.contains_key(tag) {
                debug!(tag, "rejecting non-exhaustive matcher");
                return Err(DomainError::MissingHandler {
                    tag: tag.to_string(),
                });
            }
        }
        Ok(PatternMatcher {
            handlers: self.handlers,
        })
    }
}

/// Record of a state transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state before the transition
    pub from: String,
    /// The state after the transition
    pub to: String,
}

/// A runtime over a state-machine sum type: tracks the current state tag
/// and enforces a transition table.
///
/// Pure data with no I/O; transitions either succeed and are appended to
/// the history or fail with
/// [`DomainError::InvalidStateTransition`].
#[derive(Debug, Clone)]
pub struct StateMachine {
    states: SumType,
    transitions: IndexMap<String, Vec<String>>,
    current: String,
    history: Vec<StateTransition>,
}

impl StateMachine {
    /// Create a machine over the state alphabet `states`, starting at
    /// `initial`.
    ///
    /// Fails when `initial`, a transition source, or a transition target
    /// names a tag absent from the alphabet.
    pub fn new(
        states: SumType,
        transitions: IndexMap<String, Vec<String>>,
        initial: impl Into<String>,
    ) -> DomainResult<Self> {
        let initial = initial.into();
        if !states.has_tag(&initial) {
            return Err(DomainError::UnknownTag { tag: initial });
        }
        for (from, targets) in &transitions {
            if !states.has_tag(from) {
                return Err(DomainError::UnknownTag { tag: from.clone() });
            }
            for to in targets {
                if !states.has_tag(to) {
                    return Err(DomainError::UnknownTag { tag: to.clone() });
                }
            }
        }
        Ok(Self {
            states,
            transitions,
            current: initial,
            history: Vec::new(),
        })
    }

    /// The state alphabet this machine runs over.
    pub fn states(&self) -> &SumType {
        &self.states
    }

    /// The current state tag.
    pub fn current_state(&self) -> &str {
        &self.current
    }

    /// Whether the transition table permits moving to `target` from the
    /// current state.
    pub fn can_transition_to(&self, target: &str) -> bool {
        self.valid_transitions().iter().any(|tag| tag == target)
    }

    /// Valid target states from the current state.
    pub fn valid_transitions(&self) -> &[String] {
        self.transitions
            .get(&self.current)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Transition to a new state.
    pub fn transition_to(&mut self, target: impl Into<String>) -> DomainResult<StateTransition> {
        let target = target.into();
        if !self.states.has_tag(&target) {
            return Err(DomainError::UnknownTag { tag: target });
        }
        if !self.can_transition_to(&target) {
            return Err(DomainError::InvalidStateTransition {
                from: self.current.clone(),
                to: target,
            });
        }

        let transition = StateTransition {
            from: self.current.clone(),
            to: target.clone(),
        };
        self.current = target;
        self.history.push(transition.clone());
        Ok(transition)
    }

    /// The transition history, oldest first.
    pub fn history(&self) -> &[StateTransition] {
        &self.history
    }

    /// Check if in a specific state.
    pub fn is_in_state(&self, tag: &str) -> bool {
        self.current == tag
    }
}
