// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Records produced by a benchmark run.
//!
//! Everything here is plain data: the harness builds these, the reporter
//! renders them. Nothing is persisted; `Serialize` only backs `--json`.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::contracts::check_fraction;
use crate::index::Diagnostic;

/// What a query batch was built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BatchDescriptor {
    /// Every dictionary word, in file order
    Dictionary,
    /// Synthetic hits and guaranteed misses
    #[serde(rename_all = "camelCase")]
    Mixed { fraction_yes: f64 },
    /// Corpus tokens, in reading order
    Corpus,
    /// First `len` dictionary words
    ListHead { len: usize },
    /// Last `len` dictionary words
    ListTail { len: usize },
}

impl fmt::Display for BatchDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchDescriptor::Dictionary => f.write_str("dictionary"),
            BatchDescriptor::Mixed { fraction_yes } => write!(f, "mixed p={:.1}", fraction_yes),
            BatchDescriptor::Corpus => f.write_str("corpus"),
            BatchDescriptor::ListHead { len } => write!(f, "list head ({})", len),
            BatchDescriptor::ListTail { len } => write!(f, "list tail ({})", len),
        }
    }
}

/// An ordered sequence of probe words.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryBatch {
    pub descriptor: BatchDescriptor,
    pub words: Vec<String>,
}

impl QueryBatch {
    pub fn new(descriptor: BatchDescriptor, words: Vec<String>) -> Self {
        Self { descriptor, words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// One pass of the measurement loop: one structure, one batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub structure: &'static str,
    pub batch: BatchDescriptor,
    pub total: usize,
    pub found: usize,
    pub elapsed_ns: u64,
}

impl Measurement {
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_ns)
    }

    /// Share of the batch found. `None` for an empty batch.
    pub fn fraction_found(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        let fraction = self.found as f64 / self.total as f64;
        check_fraction(fraction);
        Some(fraction)
    }

    /// Mean lookup cost. `None` for an empty batch.
    pub fn ns_per_item(&self) -> Option<f64> {
        (self.total > 0).then(|| self.elapsed_ns as f64 / self.total as f64)
    }
}

/// Wall-clock cost of building one structure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildTiming {
    pub structure: &'static str,
    /// Distinct entries after the build
    pub entries: usize,
    pub elapsed_ns: u64,
}

impl BuildTiming {
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_ns)
    }
}

/// Structural counters captured from one structure after its build.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticsSnapshot {
    pub structure: &'static str,
    pub metrics: Vec<Diagnostic>,
}

/// Everything a run produced, in the order it was produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub dictionary_len: usize,
    pub corpus_len: usize,
    pub builds: Vec<BuildTiming>,
    pub measurements: Vec<Measurement>,
    pub diagnostics: Vec<DiagnosticsSnapshot>,
}

impl Report {
    /// Measurements for one structure, in run order.
    pub fn measurements_for<'a>(
        &'a self,
        structure: &'a str,
    ) -> impl Iterator<Item = &'a Measurement> + 'a {
        self.measurements
            .iter()
            .filter(move |m| m.structure == structure)
    }

    /// The measurement of one structure over one batch.
    pub fn find(&self, structure: &str, batch: BatchDescriptor) -> Option<&Measurement> {
        self.measurements
            .iter()
            .find(|m| m.structure == structure && m.batch == batch)
    }

    pub fn build_of(&self, structure: &str) -> Option<&BuildTiming> {
        self.builds.iter().find(|b| b.structure == structure)
    }

    pub fn diagnostics_of(&self, structure: &str) -> Option<&DiagnosticsSnapshot> {
        self.diagnostics.iter().find(|d| d.structure == structure)
    }
}
