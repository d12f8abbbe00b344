//! End-to-end exercises of the sum-type layer: disjoint-union construction,
//! exhaustive matching, and the convenience specializations.

use domain_algebra::{
    are_pairwise_disjoint, Domain, DomainError, DomainMode, DomainValue, PatternMatcher,
    StateMachine, SumType, TaggedValue,
};
use indexmap::{indexmap, IndexMap};
use pretty_assertions::assert_eq;

fn request_lifecycle() -> IndexMap<String, Domain> {
    indexmap! {
        "idle".to_string() => Domain::empty(DomainMode::Collection),
        "loading".to_string() => Domain::collection(["request_id"]),
        "success".to_string() => Domain::collection(["data"]),
        "error".to_string() => Domain::collection(["error_code"]),
    }
}

#[test]
fn disjoint_union_produces_four_variants() {
    let mapping = request_lifecycle();
    let union = SumType::new(mapping.clone());

    assert_eq!(union.variant_count(), 4);
    assert_eq!(
        union.tags().collect::<Vec<_>>(),
        vec!["idle", "loading", "success", "error"]
    );
    assert!(are_pairwise_disjoint(&mapping));
    assert!(union.has_disjoint_variants());

    // idle is uninhabited but remains a case of the type.
    let realized = union.realize();
    assert_eq!(realized.len(), 3);
    assert!(realized.iter().all(|tagged| tagged.tag() != "idle"));
    assert!(union.has_tag("idle"));
}

#[test]
fn construction_order_of_the_mapping_is_irrelevant() {
    let forward = SumType::new(request_lifecycle());
    let mut reversed_mapping: IndexMap<String, Domain> = IndexMap::new();
    for (tag, domain) in request_lifecycle().into_iter().rev() {
        reversed_mapping.insert(tag, domain);
    }
    let reversed = SumType::new(reversed_mapping);
    assert_eq!(forward, reversed);
}

#[test]
fn result_shaped_union_matches_exhaustively() {
    let union = SumType::result_of(
        Domain::collection(["payload"]),
        Domain::collection(["timeout", "refused"]),
    );

    let matcher = PatternMatcher::builder(&union)
        .on("success", |value| match value {
            DomainValue::Str(payload) => payload.len(),
            _ => 0,
        })
        .on("error", |_| 0)
        .build()
        .unwrap();

    for tagged in union.realize() {
        matcher.apply(&tagged).unwrap();
    }
    assert_eq!(
        matcher
            .apply(&TaggedValue::new("success", "payload"))
            .unwrap(),
        7
    );
}

#[test]
fn strict_subset_handler_sets_fail_at_construction() {
    let union = SumType::new(request_lifecycle());

    // One handler short of the alphabet: rejected before anything is matched.
    let result = PatternMatcher::<()>::builder(&union)
        .on("idle", |_| ())
        .on("loading", |_| ())
        .on("success", |_| ())
        .build();
    assert_eq!(
        result.unwrap_err(),
        DomainError::MissingHandler {
            tag: "error".to_string()
        }
    );
}

#[test]
fn option_shaped_union_has_an_uninhabited_none() {
    let union = SumType::option_of(Domain::collection([1i64, 2]));
    assert_eq!(union.filter_by_tag("none"), vec![]);
    assert_eq!(
        union.filter_by_tag("some"),
        vec![
            TaggedValue::new("some", 1i64),
            TaggedValue::new("some", 2i64),
        ]
    );
}

#[test]
fn state_machine_runs_the_request_lifecycle() {
    let states = SumType::state_machine(request_lifecycle());
    let transitions = indexmap! {
        "idle".to_string() => vec!["loading".to_string()],
        "loading".to_string() => vec!["success".to_string(), "error".to_string()],
        "error".to_string() => vec!["loading".to_string()],
    };
    let mut machine = StateMachine::new(states, transitions, "idle").unwrap();

    machine.transition_to("loading").unwrap();
    machine.transition_to("error").unwrap();
    machine.transition_to("loading").unwrap();
    machine.transition_to("success").unwrap();

    assert!(machine.is_in_state("success"));
    assert_eq!(machine.history().len(), 4);
    assert_eq!(
        machine.transition_to("idle").unwrap_err(),
        DomainError::InvalidStateTransition {
            from: "success".to_string(),
            to: "idle".to_string()
        }
    );
}
