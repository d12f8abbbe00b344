// Copyright 2025 Cowboy AI, LLC.

//! Two-valued boolean algebra
//!
//! `and`, `or`, and `not` are the primitive connectives; every derived
//! connective is expressed through them rather than through its own truth
//! table, which keeps the algebra compositional and verifiable by
//! construction. All functions are pure and total over `{true, false}`.

/// Logical conjunction.
pub fn and(a: bool, b: bool) -> bool {
    a && b
}

/// Logical disjunction.
pub fn or(a: bool, b: bool) -> bool {
    a || b
}

/// Logical negation.
pub fn not(a: bool) -> bool {
    !a
}

/// Exclusive or: `(a ∨ b) ∧ ¬(a ∧ b)`.
pub fn xor(a: bool, b: bool) -> bool {
    and(or(a, b), not(and(a, b)))
}

/// Negated conjunction: `¬(a ∧ b)`.
pub fn nand(a: bool, b: bool) -> bool {
    not(and(a, b))
}

/// Negated disjunction: `¬(a ∨ b)`.
pub fn nor(a: bool, b: bool) -> bool {
    not(or(a, b))
}

/// Material implication: `¬a ∨ b`.
pub fn implies(a: bool, b: bool) -> bool {
    or(not(a), b)
}

/// Biconditional: `(a → b) ∧ (b → a)`.
pub fn iff(a: bool, b: bool) -> bool {
    and(implies(a, b), implies(b, a))
}

/// True iff every value in the sequence is true; short-circuits on the
/// first false. The empty sequence is vacuously true.
pub fn all_true<I>(values: I) -> bool
where
    I: IntoIterator<Item = bool>,
{
    for value in values {
        if not(value) {
            return false;
        }
    }
    true
}

/// True iff any value in the sequence is true; short-circuits on the first
/// true. The empty sequence is false.
pub fn any_true<I>(values: I) -> bool
where
    I: IntoIterator<Item = bool>,
{
    for value in values {
        if value {
            return true;
        }
    }
    false
}

/// Pure ternary selection: both branches are already-computed values, no
/// side effects are possible.
pub fn select<T>(condition: bool, when_true: T, when_false: T) -> T {
    if condition {
        when_true
    } else {
        when_false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(false, false => false)]
    #[test_case(false, true => true)]
    #[test_case(true, false => true)]
    #[test_case(true, true => false)]
    fn xor_truth_table(a: bool, b: bool) -> bool {
        xor(a, b)
    }

    #[test_case(false, false => true)]
    #[test_case(false, true => true)]
    #[test_case(true, false => true)]
    #[test_case(true, true => false)]
    fn nand_truth_table(a: bool, b: bool) -> bool {
        nand(a, b)
    }

    #[test_case(false, false => true)]
    #[test_case(false, true => false)]
    #[test_case(true, false => false)]
    #[test_case(true, true => false)]
    fn nor_truth_table(a: bool, b: bool) -> bool {
        nor(a, b)
    }

    #[test_case(false, false => true)]
    #[test_case(false, true => true)]
    #[test_case(true, false => false)]
    #[test_case(true, true => true)]
    fn implies_truth_table(a: bool, b: bool) -> bool {
        implies(a, b)
    }

    #[test_case(false, false => true)]
    #[test_case(false, true => false)]
    #[test_case(true, false => false)]
    #[test_case(true, true => true)]
    fn iff_truth_table(a: bool, b: bool) -> bool {
        iff(a, b)
    }

    #[test]
    fn vacuous_base_cases() {
        assert!(all_true(std::iter::empty()));
        assert!(!any_true(std::iter::empty()));
    }

    #[test]
    fn all_true_short_circuits() {
        let mut consumed = 0;
        let values = [true, false, true].into_iter().inspect(|_| consumed += 1);
        assert!(!all_true(values));
        assert_eq!(consumed, 2);
    }

    #[test]
    fn any_true_short_circuits() {
        let mut consumed = 0;
        let values = [false, true, false].into_iter().inspect(|_| consumed += 1);
        assert!(any_true(values));
        assert_eq!(consumed, 2);
    }

    #[test]
    fn select_is_total() {
        assert_eq!(select(true, "yes", "no"), "yes");
        assert_eq!(select(false, "yes", "no"), "no");
    }
}
