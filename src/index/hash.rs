// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-size hash table with separate chaining.
//!
//! The bucket count is chosen up front and never grows, so the reported
//! load factor and collision count show how well that choice fits the
//! dictionary. Hashing uses SipHash with fixed keys so bucket placement,
//! and therefore every diagnostic, is reproducible across runs.

use std::borrow::Cow;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::contracts::check_buckets_consistent;
use crate::error::{Error, Result};
use crate::index::{Diagnostic, Diagnostics, IndexOptions, MembershipIndex};

/// Bucket count used when none is configured.
pub const DEFAULT_BUCKETS: usize = 100_000;

#[derive(Debug, Clone)]
pub struct ChainedHashSet {
    buckets: Vec<Vec<String>>,
    items: usize,
}

impl ChainedHashSet {
    pub const NAME: &'static str = "ChainedHashSet";

    pub fn with_buckets(buckets: usize) -> Result<Self> {
        if buckets == 0 {
            return Err(Error::InvalidBucketCount);
        }
        Ok(Self {
            buckets: vec![Vec::new(); buckets],
            items: 0,
        })
    }

    fn bucket_of(&self, word: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        word.hash(&mut hasher);
        (hasher.finish() % self.buckets.len() as u64) as usize
    }

    /// Add a word during the build phase. Returns `false` if it was already
    /// present.
    pub fn add(&mut self, word: String) -> bool {
        let slot = self.bucket_of(&word);
        let bucket = &mut self.buckets[slot];
        if bucket.iter().any(|w| *w == word) {
            return false;
        }
        bucket.push(word);
        self.items += 1;
        true
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Buckets holding at least one word.
    pub fn used_buckets(&self) -> usize {
        self.buckets.iter().filter(|b| !b.is_empty()).count()
    }

    /// Words stored in a bucket that was already occupied.
    pub fn collisions(&self) -> usize {
        self.buckets
            .iter()
            .map(|b| b.len().saturating_sub(1))
            .sum()
    }

    /// Used buckets over total buckets.
    pub fn load_factor(&self) -> f64 {
        self.used_buckets() as f64 / self.buckets.len() as f64
    }

    /// Stored words over total buckets.
    pub fn fill_ratio(&self) -> f64 {
        self.items as f64 / self.buckets.len() as f64
    }

    /// Length of the fullest chain.
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }
}

impl MembershipIndex for ChainedHashSet {
    fn build_with<I>(words: I, options: &IndexOptions) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut set = Self::with_buckets(options.buckets)?;
        for word in words {
            set.add(word.into());
        }
        check_buckets_consistent(set.items, set.used_buckets(), set.collisions());
        Ok(set)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn contains(&self, query: &str) -> bool {
        self.buckets[self.bucket_of(query)].iter().any(|w| w == query)
    }

    fn size(&self) -> usize {
        self.items
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Cow<'_, str>> + '_> {
        Box::new(
            self.buckets
                .iter()
                .flatten()
                .map(|w| Cow::Borrowed(w.as_str())),
        )
    }

    fn diagnostics(&self) -> Option<&dyn Diagnostics> {
        Some(self)
    }
}

impl Diagnostics for ChainedHashSet {
    fn metrics(&self) -> Vec<Diagnostic> {
        vec![
            Diagnostic::count("items", self.items),
            Diagnostic::count("buckets", self.bucket_count()),
            Diagnostic::count("used_buckets", self.used_buckets()),
            Diagnostic::count("collisions", self.collisions()),
            Diagnostic::count("longest_chain", self.longest_chain()),
            Diagnostic::ratio("load_factor", self.load_factor()),
            Diagnostic::ratio("fill_ratio", self.fill_ratio()),
        ]
    }
}
