// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sorted, immutable word array searched by binary search.
//!
//! Best suited to dictionaries that never change after load: one sort at
//! build time, then every lookup is O(log n) comparisons over a densely
//! packed buffer.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **BUFFER_SORTED**: `words[i] < words[i + 1]` for every adjacent pair
//! 2. **BUFFER_UNIQUE**: follows from (1); `size()` is the distinct count
//!
//! Deletion is not supported. Removing from the packed buffer would need
//! an O(n) shift or a rebuild.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::contracts::check_strictly_sorted;
use crate::error::Result;
use crate::index::{IndexOptions, MembershipIndex};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedArraySet {
    words: Vec<String>,
}

impl SortedArraySet {
    pub const NAME: &'static str = "SortedArraySet";

    /// Index of `query` in the sorted buffer, if present.
    ///
    /// Searches the half-open range `[start, end)`:
    ///
    /// ```text
    ///   words[mid] < query  →  [mid + 1, end)
    ///   words[mid] > query  →  [start, mid)
    ///   words[mid] == query →  found at mid
    /// ```
    pub fn position(&self, query: &str) -> Option<usize> {
        let mut start = 0;
        let mut end = self.words.len();

        while start < end {
            let mid = start + (end - start) / 2;
            match self.words[mid].as_str().cmp(query) {
                Ordering::Equal => return Some(mid),
                Ordering::Less => start = mid + 1,
                Ordering::Greater => end = mid,
            }
        }

        None
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn first(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }
}

impl MembershipIndex for SortedArraySet {
    fn build_with<I>(words: I, _options: &IndexOptions) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut words: Vec<String> = words.into_iter().map(Into::into).collect();
        words.sort_unstable();
        words.dedup();

        // INVARIANT: BUFFER_SORTED
        check_strictly_sorted(&words);

        log::trace!("{}: {} distinct entries", Self::NAME, words.len());
        Ok(Self { words })
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn contains(&self, query: &str) -> bool {
        self.position(query).is_some()
    }

    fn size(&self) -> usize {
        self.words.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Cow<'_, str>> + '_> {
        Box::new(self.words.iter().map(|w| Cow::Borrowed(w.as_str())))
    }
}
