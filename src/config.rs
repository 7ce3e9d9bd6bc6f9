// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Benchmark configuration.
//!
//! Defaults reproduce the fixed benchmark matrix: the whole dictionary,
//! ten hit/miss mixes of 10 000 probes, the corpus, and head/tail samples
//! of the list. A JSON file can override any field; the CLI overrides the
//! file.
//!
//! ```json
//! {
//!   "dictionary": "data/words",
//!   "corpus": "data/1342-0.txt",
//!   "structures": ["sorted", "trie", "hash"],
//!   "mixedSamples": 10000,
//!   "buckets": 100000
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::index::{IndexKind, IndexOptions, DEFAULT_BUCKETS};

pub const DEFAULT_DICTIONARY: &str = "words";
pub const DEFAULT_CORPUS: &str = "corpus.txt";
pub const DEFAULT_MIXED_SAMPLES: usize = 10_000;
pub const DEFAULT_HEAD_SAMPLE: usize = 1000;
pub const DEFAULT_TAIL_SAMPLE: usize = 100;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct BenchConfig {
    /// Word list, one word per line
    pub dictionary: PathBuf,
    /// Prose corpus
    pub corpus: PathBuf,
    /// Structures to build and measure
    pub structures: Vec<IndexKind>,
    /// Probes per mixed batch
    pub mixed_samples: usize,
    /// Bucket count for the chained hash set
    pub buckets: usize,
    /// Words taken from the start of the dictionary for the list-head batch
    pub head_sample: usize,
    /// Words taken from the end of the dictionary for the list-tail batch
    pub tail_sample: usize,
    /// Lowercase corpus tokens
    pub lowercase: bool,
    /// Also run full-size batches against the linear list
    pub include_linear_full: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            corpus: PathBuf::from(DEFAULT_CORPUS),
            structures: IndexKind::ALL.to_vec(),
            mixed_samples: DEFAULT_MIXED_SAMPLES,
            buckets: DEFAULT_BUCKETS,
            head_sample: DEFAULT_HEAD_SAMPLE,
            tail_sample: DEFAULT_TAIL_SAMPLE,
            lowercase: false,
            include_linear_full: false,
        }
    }
}

impl BenchConfig {
    /// Read a JSON config. Missing fields keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn index_options(&self) -> IndexOptions {
        IndexOptions {
            buckets: self.buckets,
        }
    }

    /// Whether full-size batches run against `kind`.
    pub fn runs_full_batches(&self, kind: IndexKind) -> bool {
        kind.is_sublinear() || self.include_linear_full
    }
}
