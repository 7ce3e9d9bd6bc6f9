// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Benchmark harness: load, build, measure, collect.
//!
//! The run is a fixed matrix of batches × structures. Batches are built
//! once and replayed against every structure in the same order, so all
//! structures see identical work.
//!
//! ```text
//! Workload::load ─▶ time_build (each kind) ─▶ for batch in batches:
//!                                               for index in indexes:
//!                                                 measure(index, batch)
//!                                           ─▶ Report
//! ```
//!
//! | Batch              | Size                | Structures                   |
//! |--------------------|---------------------|------------------------------|
//! | dictionary         | whole word list     | all but the linear list      |
//! | mixed p=0.0..0.9   | `mixed_samples`     | all but the linear list      |
//! | corpus             | every corpus token  | all but the linear list      |
//! | list head / tail   | `head_sample`/`tail`| all                          |
//!
//! The linear list joins the full-size batches when `include_linear_full`
//! is set.

mod batch;
mod measure;

use crate::config::BenchConfig;
use crate::corpus::{load_corpus, load_dictionary};
use crate::error::Result;
use crate::index::{IndexKind, MembershipIndex};
use crate::types::{DiagnosticsSnapshot, QueryBatch, Report};

pub use batch::{
    corpus_batch, dictionary_batch, head_batch, mixed_batch, mixed_fractions, mixed_hits,
    tail_batch, MISS_SUFFIX,
};
pub use measure::{measure, time_build};

/// The word list and the corpus a run measures against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workload {
    pub dictionary: Vec<String>,
    pub corpus: Vec<String>,
}

impl Workload {
    pub fn new(dictionary: Vec<String>, corpus: Vec<String>) -> Self {
        Self { dictionary, corpus }
    }

    /// Load both files named by `config`. Either failing aborts the run.
    pub fn load(config: &BenchConfig) -> Result<Self> {
        let dictionary = load_dictionary(&config.dictionary)?;
        let corpus = load_corpus(&config.corpus, config.lowercase)?;
        Ok(Self { dictionary, corpus })
    }
}

/// A built structure and whether it runs the full-size batches.
struct Contestant {
    index: Box<dyn MembershipIndex>,
    full_batches: bool,
}

#[derive(Debug, Clone, Default)]
pub struct BenchmarkHarness {
    config: BenchConfig,
}

impl BenchmarkHarness {
    pub fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Load the workload from disk and run the full matrix.
    pub fn run(&self) -> Result<Report> {
        let workload = Workload::load(&self.config)?;
        self.run_workload(&workload)
    }

    /// Run the full matrix over an already loaded workload.
    pub fn run_workload(&self, workload: &Workload) -> Result<Report> {
        let config = &self.config;
        let options = config.index_options();

        // Fail before any build if the richest mix cannot be drawn
        if let Some(richest) = mixed_fractions().last() {
            mixed_hits(workload.dictionary.len(), config.mixed_samples, richest)?;
        }

        let mut report = Report {
            dictionary_len: workload.dictionary.len(),
            corpus_len: workload.corpus.len(),
            ..Report::default()
        };

        let mut contestants = Vec::with_capacity(config.structures.len());
        for &kind in &dedup_kinds(&config.structures) {
            let (index, timing) = time_build(kind, &workload.dictionary, &options)?;
            report.builds.push(timing);
            contestants.push(Contestant {
                index,
                full_batches: config.runs_full_batches(kind),
            });
        }

        let mut full = vec![dictionary_batch(&workload.dictionary)];
        for fraction in mixed_fractions() {
            full.push(mixed_batch(
                &workload.dictionary,
                config.mixed_samples,
                fraction,
            )?);
        }
        full.push(corpus_batch(&workload.corpus));

        for batch in &full {
            run_batch(&mut report, &contestants, batch, true);
        }

        let edges = [
            head_batch(&workload.dictionary, config.head_sample),
            tail_batch(&workload.dictionary, config.tail_sample),
        ];
        for batch in &edges {
            run_batch(&mut report, &contestants, batch, false);
        }

        for contestant in &contestants {
            if let Some(diagnostics) = contestant.index.diagnostics() {
                report.diagnostics.push(DiagnosticsSnapshot {
                    structure: contestant.index.name(),
                    metrics: diagnostics.metrics(),
                });
            }
        }

        log::info!(
            "Finished {} measurements over {} structures",
            report.measurements.len(),
            contestants.len()
        );
        Ok(report)
    }
}

fn run_batch(report: &mut Report, contestants: &[Contestant], batch: &QueryBatch, full: bool) {
    log::trace!("batch {}: {} probes", batch.descriptor, batch.len());
    for contestant in contestants {
        if full && !contestant.full_batches {
            continue;
        }
        report.measurements.push(measure(contestant.index.as_ref(), batch));
    }
}

/// Keep the first occurrence of each kind, preserving order.
fn dedup_kinds(kinds: &[IndexKind]) -> Vec<IndexKind> {
    let mut seen = Vec::with_capacity(kinds.len());
    for &kind in kinds {
        if !seen.contains(&kind) {
            seen.push(kind);
        }
    }
    seen
}
