// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

/// Owned copies of a word list.
pub fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// `count` distinct words, already in sorted order (`w00000`, `w00001`, ...).
pub fn numbered_words(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("w{:05}", i)).collect()
}

/// A small dictionary with a duplicate, a capitalized word and a
/// contraction, in unsorted order.
pub fn sample_dictionary() -> Vec<String> {
    words(&[
        "pride",
        "prejudice",
        "Elizabeth",
        "truth",
        "universally",
        "acknowledged",
        "single",
        "man",
        "fortune",
        "wife",
        "man",
        "don't",
        "a",
        "in",
        "of",
        "must",
        "be",
        "want",
        "it",
        "is",
        "that",
        "possession",
        "good",
    ])
}

/// Prose to tokenize against [`sample_dictionary`].
pub const SAMPLE_CORPUS: &str = "\
It is a truth universally acknowledged, that a single man in possession
of a good fortune, must be in want of a wife.

\"Don't,\" said Elizabeth -- quite unconvinced.
";
