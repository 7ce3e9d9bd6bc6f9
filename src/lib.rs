// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Membership-index benchmarks over real dictionaries.
//!
//! This crate answers one question many ways: "is word W in this
//! dictionary?". Several structures implement the same
//! [`MembershipIndex`] contract, and a harness times their construction
//! and their lookups under varying hit/miss ratios.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  corpus.rs  │────▶│   harness/   │────▶│     types.rs     │
//! │ (load words,│     │ (batches,    │     │ (Measurement,    │
//! │  tokenize)  │     │  measure)    │     │  Report)         │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      index/                          │
//! │  MembershipIndex + Diagnostics                       │
//! │  SortedArraySet · CharTrie · ChainedHashSet ·        │
//! │  BTreeWordSet · HashWordSet · LinearList             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use lexibench::{MembershipIndex, SortedArraySet};
//!
//! let set = SortedArraySet::build(["apple", "banana", "cherry"]).unwrap();
//! assert!(set.contains("banana"));
//! assert!(!set.contains("banan"));
//! assert_eq!(set.size(), 3);
//! ```

// Module declarations
pub mod config;
pub mod contracts;
mod corpus;
mod error;
pub mod harness;
mod index;
mod types;
mod utils;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use config::BenchConfig;
pub use corpus::{load_corpus, load_dictionary};
pub use error::{Error, Result};
pub use harness::{measure, mixed_batch, time_build, BenchmarkHarness, Workload};
pub use index::{
    BTreeWordSet, ChainedHashSet, CharTrie, Diagnostic, Diagnostics, HashWordSet, IndexKind,
    IndexOptions, LinearList, MembershipIndex, Metric, SortedArraySet, DEFAULT_BUCKETS,
};
pub use types::{
    BatchDescriptor, BuildTiming, DiagnosticsSnapshot, Measurement, QueryBatch, Report,
};
pub use utils::tokenize;
