//! Property-based tests for GrowableSequence
//!
//! These tests check that growth is non-destructive:
//! - appending adds exactly one element
//! - appending never reorders or drops what was already there
//! - length and render are stable between appends

use growseq::GrowableSequence;
use proptest::prelude::*;

/// Generate short words without the render delimiter
fn word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Fruit-like lowercase words
        "[a-z]{1,10}",
        // Mixed case with digits
        "[A-Za-z0-9]{1,6}",
    ]
}

/// Generate the initial contents of a sequence
fn contents_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..12)
}

proptest! {
    #[test]
    fn append_increases_length_by_one(initial in contents_strategy(), value in word_strategy()) {
        let mut seq = GrowableSequence::from_elements(initial);
        let before = seq.len();
        seq.append(value);
        prop_assert_eq!(seq.len(), before + 1);
    }

    #[test]
    fn append_preserves_render_prefix(initial in contents_strategy(), value in word_strategy()) {
        let mut seq = GrowableSequence::from_elements(initial);
        let before = seq.render();
        seq.append(value);
        prop_assert!(seq.render().starts_with(&before));
    }

    #[test]
    fn append_keeps_prior_elements_in_place(
        initial in contents_strategy(),
        values in prop::collection::vec(word_strategy(), 1..5)
    ) {
        let mut seq = GrowableSequence::from_elements(initial.clone());
        for value in &values {
            seq.append(value.clone());
        }

        prop_assert_eq!(&seq.as_slice()[..initial.len()], initial.as_slice());
        prop_assert_eq!(&seq.as_slice()[initial.len()..], values.as_slice());
    }

    #[test]
    fn create_yields_given_length(initial in contents_strategy()) {
        let n = initial.len();
        let seq: GrowableSequence<String> = initial.into_iter().collect();
        prop_assert_eq!(seq.len(), n);
    }

    #[test]
    fn length_and_render_are_idempotent(initial in contents_strategy()) {
        let seq = GrowableSequence::from_elements(initial);
        let first = (seq.len(), seq.render());
        let second = (seq.len(), seq.render());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn rebind_style_matches_in_place(initial in contents_strategy(), value in word_strategy()) {
        let mut in_place = GrowableSequence::from_elements(initial.clone());
        in_place.append(value.clone());

        let rebound = GrowableSequence::from_elements(initial).appended(value);
        prop_assert_eq!(in_place, rebound);
    }
}

#[test]
fn test_fruit_scenario() {
    let mut fruits = GrowableSequence::from_elements(["apple", "banana", "mango"]);
    assert_eq!(fruits.len(), 3);
    assert_eq!(fruits.render(), "apple, banana, mango");

    fruits.append("orange");
    assert_eq!(fruits.len(), 4);
    assert_eq!(fruits.render(), "apple, banana, mango, orange");
}

#[test]
fn test_empty_scenario() {
    let mut seq: GrowableSequence<&str> = GrowableSequence::from_elements([]);
    assert_eq!(seq.len(), 0);

    seq.append("x");
    assert_eq!(seq.len(), 1);
}

#[test]
fn test_serializes_as_plain_array() {
    let seq = GrowableSequence::from_elements(["apple", "banana"]);
    let json = serde_json::to_string(&seq).unwrap();
    assert_eq!(json, r#"["apple","banana"]"#);
}
