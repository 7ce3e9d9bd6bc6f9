//! Differential tests: every structure against `BTreeSet<String>`.
//!
//! The standard library set is the oracle. If a structure disagrees with
//! it on any query, the structure is wrong.

use std::collections::BTreeSet;

use super::common::{assert_index_well_formed, small_options};
use lexibench::{IndexKind, MembershipIndex};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short words over a small alphabet, so prefixes and near-misses are common.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{0,6}").unwrap()
}

/// Words with multi-byte characters mixed in.
fn unicode_word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[aéz日本]{1,4}").unwrap()
}

/// A dictionary with duplicates likely.
fn dictionary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..40)
}

fn kind_strategy() -> impl Strategy<Value = IndexKind> {
    prop::sample::select(IndexKind::ALL.to_vec())
}

fn build(kind: IndexKind, words: &[String]) -> Box<dyn MembershipIndex> {
    kind.build_boxed(words.iter().cloned(), &small_options())
        .expect("build never fails with nonzero buckets")
}

// ============================================================================
// MEMBERSHIP PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every inserted word is found; size and iteration match the distinct set.
    #[test]
    fn prop_build_preserves_membership(kind in kind_strategy(), words in dictionary_strategy()) {
        let index = build(kind, &words);
        assert_index_well_formed(index.as_ref(), &words);
    }

    /// No false positives: answers agree with the oracle on arbitrary queries.
    #[test]
    fn prop_agrees_with_oracle(
        kind in kind_strategy(),
        words in dictionary_strategy(),
        queries in prop::collection::vec(word_strategy(), 0..40),
    ) {
        let index = build(kind, &words);
        let oracle: BTreeSet<&str> = words.iter().map(String::as_str).collect();
        for query in &queries {
            prop_assert_eq!(
                index.contains(query),
                oracle.contains(query.as_str()),
                "{} disagrees on {:?}",
                index.name(),
                query
            );
        }
    }

    /// Multi-byte words behave like ASCII ones.
    #[test]
    fn prop_unicode_membership(
        kind in kind_strategy(),
        words in prop::collection::vec(unicode_word_strategy(), 1..20),
        query in unicode_word_strategy(),
    ) {
        let index = build(kind, &words);
        prop_assert_eq!(index.contains(&query), words.contains(&query));
        prop_assert_eq!(index.size(), words.iter().collect::<BTreeSet<_>>().len());
    }

    /// Building twice from the same words gives the same answers.
    #[test]
    fn prop_build_is_deterministic(
        kind in kind_strategy(),
        words in dictionary_strategy(),
        queries in prop::collection::vec(word_strategy(), 1..20),
    ) {
        let a = build(kind, &words);
        let b = build(kind, &words);
        prop_assert_eq!(a.size(), b.size());
        for query in &queries {
            prop_assert_eq!(a.contains(query), b.contains(query));
        }
    }

    /// Input order never changes what a structure contains or answers.
    #[test]
    fn prop_order_independent(
        kind in kind_strategy(),
        (words, shuffled) in dictionary_strategy()
            .prop_flat_map(|words| (Just(words.clone()), Just(words).prop_shuffle())),
        queries in prop::collection::vec(word_strategy(), 1..20),
    ) {
        let original = build(kind, &words);
        let permuted = build(kind, &shuffled);

        let a: BTreeSet<String> = original.iter().map(|w| w.into_owned()).collect();
        let b: BTreeSet<String> = permuted.iter().map(|w| w.into_owned()).collect();
        prop_assert_eq!(a, b);
        prop_assert_eq!(original.size(), permuted.size());
        for query in queries.iter().chain(&words) {
            prop_assert_eq!(
                original.contains(query),
                permuted.contains(query),
                "{} disagrees on {:?}",
                kind,
                query
            );
        }
    }

    /// Lookups never change size or contents.
    #[test]
    fn prop_queries_are_pure(
        kind in kind_strategy(),
        words in dictionary_strategy(),
        queries in prop::collection::vec(word_strategy(), 1..20),
    ) {
        let index = build(kind, &words);
        let before: Vec<String> = index.iter().map(|w| w.into_owned()).collect();
        for query in &queries {
            let first = index.contains(query);
            prop_assert_eq!(first, index.contains(query));
        }
        let after: Vec<String> = index.iter().map(|w| w.into_owned()).collect();
        prop_assert_eq!(before, after);
    }

    /// Every structure holds the same distinct words as every other.
    #[test]
    fn prop_structures_agree_on_size(words in dictionary_strategy()) {
        let sizes: Vec<usize> = IndexKind::ALL.iter().map(|&k| build(k, &words).size()).collect();
        prop_assert!(sizes.windows(2).all(|p| p[0] == p[1]), "sizes differ: {:?}", sizes);
    }
}

// ============================================================================
// FIXED CASES
// ============================================================================

#[test]
fn empty_structure_finds_nothing() {
    for kind in IndexKind::ALL {
        let index = build(kind, &[]);
        assert_eq!(index.size(), 0, "{}", kind);
        assert!(index.is_empty());
        assert!(!index.contains(""));
        assert!(!index.contains("anything"));
        assert_eq!(index.iter().count(), 0);
    }
}

#[test]
fn empty_word_is_an_ordinary_member() {
    let words = vec![String::new(), "a".to_string()];
    for kind in IndexKind::ALL {
        let index = build(kind, &words);
        assert!(index.contains(""), "{}", kind);
        assert!(index.contains("a"));
        assert!(!index.contains("b"));
        assert_eq!(index.size(), 2);
    }
}

#[test]
fn fruit_scenario() {
    let words: Vec<String> = ["banana", "apple", "cherry", "apple"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    for kind in IndexKind::ALL {
        let index = build(kind, &words);
        assert_eq!(index.size(), 3, "{}", kind);
        assert!(index.contains("apple"));
        assert!(index.contains("cherry"));
        assert!(!index.contains("app"));
        assert!(!index.contains("apples"));
        assert!(!index.contains("Apple"));
    }
}
