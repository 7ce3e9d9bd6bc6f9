// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the membership structures.
//!
//! Builds every structure from the same arbitrary word list and checks each
//! answer against `BTreeSet`. Arbitrary strings bring empty words, shared
//! prefixes and multi-byte characters that hand-picked tests miss.

#![no_main]

use std::collections::BTreeSet;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lexibench::{IndexKind, IndexOptions};

#[derive(Debug, Arbitrary)]
struct Input {
    words: Vec<String>,
    queries: Vec<String>,
    buckets: u8,
}

fuzz_target!(|input: Input| {
    let options = IndexOptions {
        buckets: usize::from(input.buckets) + 1,
    };
    let oracle: BTreeSet<&str> = input.words.iter().map(String::as_str).collect();

    for kind in IndexKind::ALL {
        let index = kind
            .build_boxed(input.words.iter().cloned(), &options)
            .expect("nonzero buckets always build");

        assert_eq!(index.size(), oracle.len(), "{} size", kind);
        for word in &input.words {
            assert!(index.contains(word), "{} lost {:?}", kind, word);
        }
        for query in &input.queries {
            assert_eq!(
                index.contains(query),
                oracle.contains(query.as_str()),
                "{} disagrees on {:?}",
                kind,
                query
            );
        }

        let listed: BTreeSet<String> = index.iter().map(|w| w.into_owned()).collect();
        assert_eq!(listed.len(), oracle.len(), "{} iter", kind);
    }
});
