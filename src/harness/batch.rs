// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query batch construction.
//!
//! Batches only borrow the dictionary; nothing here can touch a built index.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::types::{BatchDescriptor, QueryBatch};

/// Appended to a dictionary word until the result is not in the dictionary.
pub const MISS_SUFFIX: char = 'z';

/// Hit fractions for the mixed batches: 0.0, 0.1, ..., 0.9.
pub fn mixed_fractions() -> impl Iterator<Item = f64> {
    (0..10).map(|i| f64::from(i) / 10.0)
}

/// The whole dictionary, in file order.
pub fn dictionary_batch(dictionary: &[String]) -> QueryBatch {
    QueryBatch::new(BatchDescriptor::Dictionary, dictionary.to_vec())
}

/// Corpus tokens, in reading order.
pub fn corpus_batch(corpus: &[String]) -> QueryBatch {
    QueryBatch::new(BatchDescriptor::Corpus, corpus.to_vec())
}

/// The first `len` dictionary words (fewer if the dictionary is shorter).
pub fn head_batch(dictionary: &[String], len: usize) -> QueryBatch {
    let len = len.min(dictionary.len());
    QueryBatch::new(BatchDescriptor::ListHead { len }, dictionary[..len].to_vec())
}

/// The last `len` dictionary words (fewer if the dictionary is shorter).
pub fn tail_batch(dictionary: &[String], len: usize) -> QueryBatch {
    let len = len.min(dictionary.len());
    QueryBatch::new(
        BatchDescriptor::ListTail { len },
        dictionary[dictionary.len() - len..].to_vec(),
    )
}

/// Number of hits a mixed batch of `num_samples` needs at `fraction_yes`,
/// or the error building that batch from `dictionary_len` words would hit.
pub fn mixed_hits(dictionary_len: usize, num_samples: usize, fraction_yes: f64) -> Result<usize> {
    if !(0.0..=1.0).contains(&fraction_yes) {
        return Err(Error::InvalidFraction(fraction_yes));
    }

    let hits = ((num_samples as f64 * fraction_yes).round() as usize).min(num_samples);

    if num_samples > 0 && dictionary_len == 0 {
        return Err(Error::EmptyDictionary);
    }
    if hits > dictionary_len {
        return Err(Error::NotEnoughWords {
            requested: hits,
            available: dictionary_len,
        });
    }
    Ok(hits)
}

/// Build `num_samples` probes of which `round(num_samples * fraction_yes)`
/// are real dictionary words.
///
/// Hits are a prefix of the dictionary. Misses come first in the batch;
/// each is a dictionary word (cycling from the start) with one
/// [`MISS_SUFFIX`] per completed cycle plus one, extended further only if
/// the result is still a dictionary word or an earlier miss.
///
/// ```text
/// dictionary = [ant, bee, cat, dog], num_samples = 4, fraction_yes = 0.5
///
/// batch      = [antz, beez, ant, bee]
///               └─ misses ─┘└─ hits ─┘
/// ```
pub fn mixed_batch(
    dictionary: &[String],
    num_samples: usize,
    fraction_yes: f64,
) -> Result<QueryBatch> {
    let hits = mixed_hits(dictionary.len(), num_samples, fraction_yes)?;
    let misses = num_samples - hits;

    let known: HashSet<&str> = dictionary.iter().map(String::as_str).collect();
    let mut generated: HashSet<String> = HashSet::with_capacity(misses);
    let mut words = Vec::with_capacity(num_samples);

    for i in 0..misses {
        // The k-th pass over the dictionary starts at k + 1 suffixes
        let base = &dictionary[i % dictionary.len()];
        let suffixes = i / dictionary.len() + 1;
        let mut miss = String::with_capacity(base.len() + suffixes);
        miss.push_str(base);
        miss.extend(std::iter::repeat(MISS_SUFFIX).take(suffixes));
        while known.contains(miss.as_str()) || generated.contains(&miss) {
            miss.push(MISS_SUFFIX);
        }
        generated.insert(miss.clone());
        words.push(miss);
    }
    words.extend(dictionary[..hits].iter().cloned());

    log::trace!(
        "mixed batch p={:.1}: {} hits, {} misses",
        fraction_yes,
        hits,
        misses
    );
    Ok(QueryBatch::new(BatchDescriptor::Mixed { fraction_yes }, words))
}
