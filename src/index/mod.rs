// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Membership indexes: the capability contract and its implementations.
//!
//! Every structure the harness can measure implements [`MembershipIndex`].
//! The harness only ever talks to `dyn MembershipIndex`, so adding a new
//! structure means adding a module here and a variant to [`IndexKind`].
//!
//! ```text
//! ┌──────────────────┐   build    ┌─────────────────────────────┐
//! │  words (any Iter)│──────────▶│  dyn MembershipIndex         │
//! └──────────────────┘            │  contains / size / iter     │
//!                                 │  diagnostics() ──▶ Option<  │
//!                                 │      &dyn Diagnostics>      │
//!                                 └─────────────────────────────┘
//! ```
//!
//! | Kind      | Structure          | `contains`       | `iter` order        |
//! |-----------|--------------------|------------------|---------------------|
//! | `sorted`  | [`SortedArraySet`] | O(log n)         | sorted              |
//! | `trie`    | [`CharTrie`]       | O(len(query))    | sorted              |
//! | `hash`    | [`ChainedHashSet`] | O(1) amortized   | bucket order        |
//! | `btree`   | [`BTreeWordSet`]   | O(log n)         | sorted              |
//! | `hashset` | [`HashWordSet`]    | O(1) amortized   | unspecified         |
//! | `linear`  | [`LinearList`]     | O(n)             | first occurrence    |

mod hash;
mod linear;
mod sorted;
mod std_sets;
mod trie;

use std::borrow::Cow;
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use hash::{ChainedHashSet, DEFAULT_BUCKETS};
pub use linear::LinearList;
pub use sorted::SortedArraySet;
pub use std_sets::{BTreeWordSet, HashWordSet};
pub use trie::CharTrie;

// ============================================================================
// CAPABILITY CONTRACT
// ============================================================================

/// A read-mostly set of words answering "is this word present?".
///
/// # Contract
///
/// - `build` accepts words in any order; duplicates never raise `size()`
///   above the number of distinct words.
/// - `contains` is total and pure: the same query always gets the same
///   answer, and no query changes what `size` or `iter` report.
/// - `iter` is finite and yields each distinct word once.
pub trait MembershipIndex {
    /// Build with default [`IndexOptions`].
    fn build<I>(words: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
        Self: Sized,
    {
        Self::build_with(words, &IndexOptions::default())
    }

    /// Build with explicit options. Structures ignore options that do not
    /// apply to them.
    fn build_with<I>(words: I, options: &IndexOptions) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
        Self: Sized;

    /// Display name used in reports.
    fn name(&self) -> &'static str;

    fn contains(&self, query: &str) -> bool;

    /// Number of distinct entries.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Entries in the structure's natural order.
    ///
    /// Structures that store whole words lend them out; structures that
    /// only store their pieces (the trie) rebuild each word on the fly.
    fn iter(&self) -> Box<dyn Iterator<Item = Cow<'_, str>> + '_>;

    /// Structural counters, for structures that track them.
    fn diagnostics(&self) -> Option<&dyn Diagnostics> {
        None
    }
}

/// Optional capability: structural counters worth reporting.
pub trait Diagnostics {
    fn metrics(&self) -> Vec<Diagnostic>;
}

/// One named structural counter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub name: &'static str,
    pub value: Metric,
}

impl Diagnostic {
    pub fn count(name: &'static str, value: usize) -> Self {
        Self {
            name,
            value: Metric::Count(value),
        }
    }

    pub fn ratio(name: &'static str, value: f64) -> Self {
        Self {
            name,
            value: Metric::Ratio(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Metric {
    Count(usize),
    Ratio(f64),
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Count(n) => write!(f, "{}", n),
            Metric::Ratio(r) => write!(f, "{:.4}", r),
        }
    }
}

// ============================================================================
// BUILD OPTIONS
// ============================================================================

/// Knobs for structures that have any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOptions {
    /// Bucket count for [`ChainedHashSet`].
    pub buckets: usize,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            buckets: DEFAULT_BUCKETS,
        }
    }
}

// ============================================================================
// STRUCTURE FAMILY
// ============================================================================

/// The structures the harness knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    /// Sorted array with binary search
    Sorted,
    /// Character trie
    Trie,
    /// Fixed-bucket chained hash set
    Hash,
    /// Standard library ordered set
    #[value(name = "btree")]
    Btree,
    /// Standard library hash set
    #[value(name = "hashset")]
    Hashset,
    /// Unsorted list with linear scan
    Linear,
}

impl IndexKind {
    pub const ALL: [IndexKind; 6] = [
        IndexKind::Btree,
        IndexKind::Hashset,
        IndexKind::Sorted,
        IndexKind::Trie,
        IndexKind::Hash,
        IndexKind::Linear,
    ];

    /// Display name, identical to `name()` of the built structure.
    pub fn name(self) -> &'static str {
        match self {
            IndexKind::Sorted => SortedArraySet::NAME,
            IndexKind::Trie => CharTrie::NAME,
            IndexKind::Hash => ChainedHashSet::NAME,
            IndexKind::Btree => BTreeWordSet::NAME,
            IndexKind::Hashset => HashWordSet::NAME,
            IndexKind::Linear => LinearList::NAME,
        }
    }

    /// Whether full-size batches are practical for this structure.
    pub fn is_sublinear(self) -> bool {
        !matches!(self, IndexKind::Linear)
    }

    /// Build the structure behind the common contract.
    pub fn build_boxed<I>(self, words: I, options: &IndexOptions) -> Result<Box<dyn MembershipIndex>>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Ok(match self {
            IndexKind::Sorted => Box::new(SortedArraySet::build_with(words, options)?),
            IndexKind::Trie => Box::new(CharTrie::build_with(words, options)?),
            IndexKind::Hash => Box::new(ChainedHashSet::build_with(words, options)?),
            IndexKind::Btree => Box::new(BTreeWordSet::build_with(words, options)?),
            IndexKind::Hashset => Box::new(HashWordSet::build_with(words, options)?),
            IndexKind::Linear => Box::new(LinearList::build_with(words, options)?),
        })
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
