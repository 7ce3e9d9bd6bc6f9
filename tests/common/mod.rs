//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use lexibench::{IndexKind, IndexOptions, MembershipIndex};
use tempfile::TempDir;

// Re-export canonical test utilities from lexibench::testing
pub use lexibench::testing::{numbered_words, sample_dictionary, words, SAMPLE_CORPUS};

/// Options small enough that bucket collisions actually happen.
pub fn small_options() -> IndexOptions {
    IndexOptions { buckets: 16 }
}

/// Build every kind over the same words.
pub fn build_all(dictionary: &[String]) -> Vec<Box<dyn MembershipIndex>> {
    IndexKind::ALL
        .iter()
        .map(|kind| {
            kind.build_boxed(dictionary.iter().cloned(), &small_options())
                .unwrap_or_else(|e| panic!("{} failed to build: {}", kind, e))
        })
        .collect()
}

/// Assert the contract every structure shares: each dictionary word is
/// found, `size` counts distinct words, `iter` yields exactly the distinct
/// words once each.
pub fn assert_index_well_formed(index: &dyn MembershipIndex, dictionary: &[String]) {
    let expected: BTreeSet<&str> = dictionary.iter().map(String::as_str).collect();

    for word in dictionary {
        assert!(
            index.contains(word),
            "{} lost {:?}",
            index.name(),
            word
        );
    }
    assert_eq!(index.size(), expected.len(), "{} size", index.name());
    assert_eq!(index.is_empty(), expected.is_empty());

    let listed: Vec<String> = index.iter().map(|w| w.into_owned()).collect();
    assert_eq!(listed.len(), expected.len(), "{} iter yields duplicates", index.name());
    let listed: BTreeSet<&str> = listed.iter().map(String::as_str).collect();
    assert_eq!(listed, expected, "{} iter", index.name());
}

/// A temp directory holding a dictionary file and a corpus file.
pub struct Fixture {
    pub dir: TempDir,
    pub dictionary: PathBuf,
    pub corpus: PathBuf,
}

impl Fixture {
    pub fn new(dictionary: &[String], corpus: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let dictionary_path = dir.path().join("words");
        let corpus_path = dir.path().join("corpus.txt");
        fs::write(&dictionary_path, dictionary.join("\n")).expect("write dictionary");
        fs::write(&corpus_path, corpus).expect("write corpus");
        Self {
            dir,
            dictionary: dictionary_path,
            corpus: corpus_path,
        }
    }

    /// The sample dictionary and corpus shipped in `lexibench::testing`.
    pub fn sample() -> Self {
        Self::new(&sample_dictionary(), SAMPLE_CORPUS)
    }
}
