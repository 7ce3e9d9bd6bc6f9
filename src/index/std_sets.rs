// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Baselines over the standard library sets.

use std::borrow::Cow;
use std::collections::{BTreeSet, HashSet};

use crate::error::Result;
use crate::index::{IndexOptions, MembershipIndex};

/// `BTreeSet<String>`: ordered, O(log n) lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BTreeWordSet(BTreeSet<String>);

impl BTreeWordSet {
    pub const NAME: &'static str = "BTreeSet";
}

impl MembershipIndex for BTreeWordSet {
    fn build_with<I>(words: I, _options: &IndexOptions) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Ok(Self(words.into_iter().map(Into::into).collect()))
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn contains(&self, query: &str) -> bool {
        self.0.contains(query)
    }

    fn size(&self) -> usize {
        self.0.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Cow<'_, str>> + '_> {
        Box::new(self.0.iter().map(|w| Cow::Borrowed(w.as_str())))
    }
}

/// `HashSet<String>`: O(1) amortized lookups, randomized iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashWordSet(HashSet<String>);

impl HashWordSet {
    pub const NAME: &'static str = "HashSet";
}

impl MembershipIndex for HashWordSet {
    fn build_with<I>(words: I, _options: &IndexOptions) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Ok(Self(words.into_iter().map(Into::into).collect()))
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn contains(&self, query: &str) -> bool {
        self.0.contains(query)
    }

    fn size(&self) -> usize {
        self.0.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Cow<'_, str>> + '_> {
        Box::new(self.0.iter().map(|w| Cow::Borrowed(w.as_str())))
    }
}
