// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Workload loading: the word list and the prose corpus.
//!
//! Both files are read fully into memory once. Any read failure is fatal
//! for the run and carries the offending path.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::error::{Error, Result};
use crate::utils::{dictionary_entry, tokenize};

/// Read a word list: one word per line, blank lines skipped.
///
/// Order and duplicates are preserved; indexes collapse duplicates
/// themselves.
pub fn load_dictionary(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let start = Instant::now();
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    let words: Vec<String> = content
        .lines()
        .filter_map(dictionary_entry)
        .map(str::to_string)
        .collect();

    log::info!(
        "Loaded {} entries from {} in {:.3}s",
        words.len(),
        path.display(),
        start.elapsed().as_secs_f64()
    );
    Ok(words)
}

/// Read a prose file and tokenize it line by line, keeping word order.
pub fn load_corpus(path: impl AsRef<Path>, lowercase: bool) -> Result<Vec<String>> {
    let path = path.as_ref();
    let start = Instant::now();
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    let words: Vec<String> = content
        .lines()
        .flat_map(|line| tokenize(line, lowercase))
        .collect();

    log::info!(
        "Loaded {} words from {} in {:.3}s",
        words.len(),
        path.display(),
        start.elapsed().as_secs_f64()
    );
    Ok(words)
}
