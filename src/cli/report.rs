// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Report rendering: boxed tables for terminals, JSON for scripts.

use lexibench::{BatchDescriptor, Measurement, Report};

use super::display::{
    fraction, format_duration, ns_per_item, pad_left, pad_right, row, section_bot, section_mid,
    section_top, themed, title, BOLD, GRAY,
};

const NAME_WIDTH: usize = 18;

/// Print the full report as boxed tables.
pub fn print_report(report: &Report) {
    title("LEXIBENCH");
    println!();

    section_top("WORKLOAD");
    row(&format!(
        "  dictionary: {} words    corpus: {} tokens",
        report.dictionary_len, report.corpus_len
    ));
    section_mid("BUILD");
    row(&header(&["structure", "entries", "time"]));
    for build in &report.builds {
        row(&format!(
            "  {}{}{}",
            pad_right(build.structure, NAME_WIDTH),
            pad_left(&build.entries.to_string(), 12),
            pad_left(&format_duration(build.elapsed()), 14),
        ));
    }
    section_bot();
    println!();

    for batch in batch_order(report) {
        let rows: Vec<&Measurement> = report
            .measurements
            .iter()
            .filter(|m| m.batch == batch)
            .collect();
        section_top(&batch_label(batch, rows.first().map_or(0, |m| m.total)));
        row(&header(&["structure", "found", "ns/item", "total"]));
        for m in rows {
            row(&measurement_line(m));
        }
        section_bot();
    }

    if !report.diagnostics.is_empty() {
        println!();
        section_top("DIAGNOSTICS");
        for (i, snapshot) in report.diagnostics.iter().enumerate() {
            if i > 0 {
                row("");
            }
            row(&format!("  {}", themed(GRAY, &[BOLD], snapshot.structure)));
            for metric in &snapshot.metrics {
                row(&format!(
                    "    {}{}",
                    pad_right(metric.name, 16),
                    pad_left(&metric.value.to_string(), 14)
                ));
            }
        }
        section_bot();
    }
}

/// The report as pretty-printed JSON.
pub fn render_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

fn header(columns: &[&str]) -> String {
    let mut line = format!("  {}", pad_right(columns[0], NAME_WIDTH));
    for column in &columns[1..] {
        line.push_str(&pad_left(column, 12));
    }
    themed(GRAY, &[], &line)
}

fn measurement_line(m: &Measurement) -> String {
    format!(
        "  {}{}{}{}",
        pad_right(m.structure, NAME_WIDTH),
        pad_left(&fraction(m.fraction_found()), 12),
        pad_left(&ns_per_item(m.ns_per_item()), 12),
        pad_left(&format_duration(m.elapsed()), 12),
    )
}

fn batch_label(batch: BatchDescriptor, probes: usize) -> String {
    format!("{} · {} probes", batch.to_string().to_uppercase(), probes)
}

/// Distinct batches, in the order they were first measured.
fn batch_order(report: &Report) -> Vec<BatchDescriptor> {
    let mut order: Vec<BatchDescriptor> = Vec::new();
    for m in &report.measurements {
        if !order.contains(&m.batch) {
            order.push(m.batch);
        }
    }
    order
}
