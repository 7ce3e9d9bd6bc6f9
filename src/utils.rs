// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

/// Split a line of prose into word tokens.
///
/// # Algorithm
///
/// 1. Split on every character that is neither alphanumeric nor `'`
/// 2. Trim leading/trailing apostrophes (quotes, not contractions)
/// 3. Drop empty pieces
/// 4. Lowercase ASCII letters if `lowercase` is set
///
/// ```
/// use lexibench::tokenize;
///
/// assert_eq!(tokenize("\"It's a truth,\" she said.", false), vec!["It's", "a", "truth", "she", "said"]);
/// ```
pub fn tokenize(line: &str, lowercase: bool) -> Vec<String> {
    line.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|piece| piece.trim_matches('\''))
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            if lowercase {
                piece.to_ascii_lowercase()
            } else {
                piece.to_string()
            }
        })
        .collect()
}

/// Trim a dictionary line: surrounding whitespace and a stray `\r` from
/// CRLF files. Returns `None` for blank lines.
pub fn dictionary_entry(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
