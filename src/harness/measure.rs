// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The measurement loop and build timing.
//!
//! Both only see structures through [`MembershipIndex`], so every structure
//! is timed by exactly the same code.

use std::time::{Duration, Instant};

use crate::contracts::check_size_consistent;
use crate::error::Result;
use crate::index::{IndexKind, IndexOptions, MembershipIndex};
use crate::types::{BuildTiming, Measurement, QueryBatch};

fn nanos(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
}

/// Run `contains` over every probe in order, counting hits.
pub fn measure(index: &dyn MembershipIndex, batch: &QueryBatch) -> Measurement {
    let start = Instant::now();
    let mut found = 0usize;
    for word in &batch.words {
        if index.contains(word) {
            found += 1;
        }
    }
    let elapsed = start.elapsed();

    let measurement = Measurement {
        structure: index.name(),
        batch: batch.descriptor,
        total: batch.len(),
        found,
        elapsed_ns: nanos(elapsed),
    };

    log::debug!(
        "{}: {} found={}/{} in {:?}",
        measurement.structure,
        measurement.batch,
        found,
        measurement.total,
        elapsed
    );
    measurement
}

/// Build one structure from the dictionary, timing the build.
///
/// A build error is returned as-is: a structure that cannot be built from
/// a loaded word list ends the run.
pub fn time_build(
    kind: IndexKind,
    dictionary: &[String],
    options: &IndexOptions,
) -> Result<(Box<dyn MembershipIndex>, BuildTiming)> {
    let start = Instant::now();
    let index = kind.build_boxed(dictionary, options)?;
    let elapsed = start.elapsed();
    check_size_consistent(index.as_ref());

    let timing = BuildTiming {
        structure: index.name(),
        entries: index.size(),
        elapsed_ns: nanos(elapsed),
    };

    log::info!(
        "Built {} ({} entries) in {:.3}s",
        timing.structure,
        timing.entries,
        elapsed.as_secs_f64()
    );
    Ok((index, timing))
}
