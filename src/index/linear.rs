// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Unsorted word list answered by linear scan.
//!
//! The slow baseline. Lookups cost O(n) string comparisons, so a hit near
//! the start of the list is cheap and a miss always walks the whole thing.
//! The harness only feeds it small head/tail samples by default.

use std::borrow::Cow;
use std::collections::HashSet;

use crate::error::Result;
use crate::index::{IndexOptions, MembershipIndex};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinearList {
    /// First-occurrence order
    words: Vec<String>,
}

impl LinearList {
    pub const NAME: &'static str = "LinearList";

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

impl MembershipIndex for LinearList {
    fn build_with<I>(words: I, _options: &IndexOptions) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut seen = HashSet::new();
        let words = words
            .into_iter()
            .map(Into::into)
            .filter(|w: &String| seen.insert(w.clone()))
            .collect();
        Ok(Self { words })
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn contains(&self, query: &str) -> bool {
        self.words.iter().any(|w| w == query)
    }

    fn size(&self) -> usize {
        self.words.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Cow<'_, str>> + '_> {
        Box::new(self.words.iter().map(|w| Cow::Borrowed(w.as_str())))
    }
}
