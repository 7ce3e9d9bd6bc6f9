//! Structure-specific invariants: ordering, node counts, bucket accounting.

use std::collections::BTreeSet;

use lexibench::{
    ChainedHashSet, CharTrie, IndexOptions, LinearList, MembershipIndex, Metric, SortedArraySet,
};
use proptest::prelude::*;

fn dictionary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("[a-e]{0,7}").unwrap(), 0..50)
}

fn collect(index: &dyn MembershipIndex) -> Vec<String> {
    index.iter().map(|w| w.into_owned()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// The sorted array iterates strictly ascending.
    #[test]
    fn prop_sorted_array_is_strictly_sorted(words in dictionary_strategy()) {
        let set = SortedArraySet::build(words).unwrap();
        prop_assert!(set.as_slice().windows(2).all(|p| p[0] < p[1]));
    }

    /// Binary search reports the index the word actually sits at.
    #[test]
    fn prop_sorted_position_matches_slice(words in dictionary_strategy(), query in "[a-e]{0,7}") {
        let set = SortedArraySet::build(words).unwrap();
        match set.position(&query) {
            Some(i) => prop_assert_eq!(&set.as_slice()[i], &query),
            None => prop_assert!(!set.as_slice().contains(&query)),
        }
    }

    /// The trie walks words in the same order as the sorted array.
    #[test]
    fn prop_trie_iterates_in_sorted_order(words in dictionary_strategy()) {
        let trie = CharTrie::build(words.clone()).unwrap();
        let sorted = SortedArraySet::build(words).unwrap();
        prop_assert_eq!(collect(&trie), sorted.as_slice().to_vec());
    }

    /// One node per distinct prefix, root included.
    #[test]
    fn prop_trie_node_count_is_distinct_prefixes(words in dictionary_strategy()) {
        let trie = CharTrie::build(words.clone()).unwrap();
        let prefixes: BTreeSet<&str> = words
            .iter()
            .flat_map(|w| (1..=w.len()).map(move |end| &w[..end]))
            .collect();
        prop_assert_eq!(trie.node_count(), prefixes.len() + 1);
    }

    /// Every prefix of a stored word is a trie prefix.
    #[test]
    fn prop_trie_prefixes(words in dictionary_strategy()) {
        let trie = CharTrie::build(words.clone()).unwrap();
        for word in &words {
            for end in 0..=word.len() {
                prop_assert!(trie.has_prefix(&word[..end]));
            }
        }
    }

    /// Each item either opens a bucket or collides in one.
    #[test]
    fn prop_hash_buckets_account_for_items(words in dictionary_strategy(), buckets in 1usize..64) {
        let set = ChainedHashSet::build_with(words, &IndexOptions { buckets }).unwrap();
        prop_assert_eq!(set.used_buckets() + set.collisions(), set.size());
        prop_assert!(set.used_buckets() <= set.bucket_count());
        prop_assert!(set.load_factor() <= 1.0);
        prop_assert!(set.longest_chain() <= set.size());
    }

    /// The linear list keeps first-occurrence order.
    #[test]
    fn prop_linear_list_keeps_input_order(words in dictionary_strategy()) {
        let list = LinearList::build(words.clone()).unwrap();
        let mut seen = BTreeSet::new();
        let expected: Vec<String> = words.into_iter().filter(|w| seen.insert(w.clone())).collect();
        prop_assert_eq!(list.as_slice().to_vec(), expected);
    }
}

#[test]
fn trie_shares_prefixes() {
    let trie = CharTrie::build(["to", "tea", "ten"]).unwrap();
    assert_eq!(trie.node_count(), 6);
    assert!(trie.has_prefix("te"));
    assert!(!trie.contains("te"));
}

#[test]
fn single_bucket_chains_everything() {
    let set = ChainedHashSet::build_with(["a", "b", "c"], &IndexOptions { buckets: 1 }).unwrap();
    assert_eq!(set.used_buckets(), 1);
    assert_eq!(set.collisions(), 2);
    assert_eq!(set.longest_chain(), 3);

    let metrics = set.diagnostics().unwrap().metrics();
    let load = metrics.iter().find(|d| d.name == "load_factor").unwrap();
    assert_eq!(load.value, Metric::Ratio(1.0));
}

#[test]
fn zero_buckets_is_rejected() {
    let err = ChainedHashSet::build_with(["a"], &IndexOptions { buckets: 0 }).unwrap_err();
    assert!(matches!(err, lexibench::Error::InvalidBucketCount));
}
