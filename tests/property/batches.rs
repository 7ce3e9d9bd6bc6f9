//! Mixed batch properties: exact hit counts, guaranteed misses, fairness.

use std::collections::HashSet;

use super::common::{build_all, numbered_words};
use lexibench::harness::{mixed_fractions, MISS_SUFFIX};
use lexibench::{measure, mixed_batch, BatchDescriptor, Error, MembershipIndex};
use proptest::prelude::*;

fn dictionary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("[a-c]{1,4}").unwrap(), 1..30)
}

fn fraction_strategy() -> impl Strategy<Value = f64> {
    (0u32..=10).prop_map(|tenths| tenths as f64 / 10.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Batch length is exactly the requested sample count.
    #[test]
    fn prop_batch_has_requested_length(
        dictionary in dictionary_strategy(),
        samples in 0usize..30,
        fraction in fraction_strategy(),
    ) {
        let hits = (samples as f64 * fraction).round() as usize;
        prop_assume!(hits <= dictionary.len());

        let batch = mixed_batch(&dictionary, samples, fraction).unwrap();
        prop_assert_eq!(batch.len(), samples);
        prop_assert_eq!(batch.descriptor, BatchDescriptor::Mixed { fraction_yes: fraction });
    }

    /// Misses are never dictionary words and never repeat; hits always are.
    #[test]
    fn prop_misses_are_guaranteed(
        dictionary in dictionary_strategy(),
        samples in 1usize..30,
        fraction in fraction_strategy(),
    ) {
        let hits = (samples as f64 * fraction).round() as usize;
        prop_assume!(hits <= dictionary.len());

        let known: HashSet<&str> = dictionary.iter().map(String::as_str).collect();
        let batch = mixed_batch(&dictionary, samples, fraction).unwrap();
        let (misses, found) = batch.words.split_at(samples - hits);

        let distinct: HashSet<&String> = misses.iter().collect();
        prop_assert_eq!(distinct.len(), misses.len(), "repeated miss in {:?}", misses);
        for miss in misses {
            prop_assert!(!known.contains(miss.as_str()), "{:?} is a dictionary word", miss);
            prop_assert!(miss.ends_with(MISS_SUFFIX));
        }
        for hit in found {
            prop_assert!(known.contains(hit.as_str()));
        }
    }

    /// Every structure finds exactly the same number of words in a batch.
    #[test]
    fn prop_structures_find_the_same_hits(
        dictionary in dictionary_strategy(),
        samples in 1usize..30,
        fraction in fraction_strategy(),
    ) {
        let hits = (samples as f64 * fraction).round() as usize;
        prop_assume!(hits <= dictionary.len());

        let batch = mixed_batch(&dictionary, samples, fraction).unwrap();
        for index in build_all(&dictionary) {
            let found = batch.words.iter().filter(|w| index.contains(w)).count();
            prop_assert_eq!(found, hits, "{}", index.name());
        }
    }

    /// Two batches at the same fraction are identical.
    #[test]
    fn prop_batches_are_reproducible(
        dictionary in dictionary_strategy(),
        fraction in fraction_strategy(),
    ) {
        let samples = dictionary.len();
        let a = mixed_batch(&dictionary, samples, fraction).unwrap();
        let b = mixed_batch(&dictionary, samples, fraction).unwrap();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn half_and_half_over_ten_words() {
    let dictionary = numbered_words(10);
    let batch = mixed_batch(&dictionary, 10, 0.5).unwrap();

    let known: HashSet<&str> = dictionary.iter().map(String::as_str).collect();
    let (misses, hits) = batch.words.split_at(5);
    assert!(misses.iter().all(|w| !known.contains(w.as_str())));
    assert!(hits.iter().all(|w| known.contains(w.as_str())));

    for index in build_all(&dictionary) {
        let first = measure(index.as_ref(), &batch);
        let second = measure(index.as_ref(), &batch);
        assert_eq!(first.fraction_found(), Some(0.5), "{}", index.name());
        assert_eq!(second.fraction_found(), Some(0.5), "{}", index.name());
        assert_eq!((first.found, first.total), (second.found, second.total), "{}", index.name());
        assert_eq!(first.structure, index.name());
    }
}

#[test]
fn misses_from_a_tiny_dictionary_stay_short() {
    let dictionary: Vec<String> = ["apple", "banana", "cherry"].iter().map(|s| s.to_string()).collect();
    let batch = mixed_batch(&dictionary, 1000, 0.0).unwrap();

    assert_eq!(batch.len(), 1000);
    for (i, miss) in batch.words.iter().enumerate() {
        let base = &dictionary[i % dictionary.len()];
        assert!(miss.starts_with(base.as_str()));
        assert!(miss.len() <= base.len() + 400, "miss {} is {} bytes", i, miss.len());
    }
    let distinct: HashSet<&String> = batch.words.iter().collect();
    assert_eq!(distinct.len(), 1000);
}

#[test]
fn miss_grows_past_existing_suffixes() {
    let dictionary: Vec<String> = ["ant", "antz", "antzz"].iter().map(|s| s.to_string()).collect();
    let batch = mixed_batch(&dictionary, 1, 0.0).unwrap();
    assert_eq!(batch.words, vec!["antzzz".to_string()]);
}

#[test]
fn ten_fractions_from_zero() {
    let fractions: Vec<f64> = mixed_fractions().collect();
    assert_eq!(fractions.len(), 10);
    assert_eq!(fractions[0], 0.0);
    assert!((fractions[9] - 0.9).abs() < 1e-9);
}

#[test]
fn impossible_batches_fail() {
    let dictionary = numbered_words(3);
    assert!(matches!(
        mixed_batch(&dictionary, 10, 0.5),
        Err(Error::NotEnoughWords {
            requested: 5,
            available: 3
        })
    ));
    assert!(matches!(mixed_batch(&[], 4, 0.0), Err(Error::EmptyDictionary)));
    assert!(matches!(mixed_batch(&dictionary, 2, 1.5), Err(Error::InvalidFraction(_))));
}
