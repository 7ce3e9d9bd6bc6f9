// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lexibench command-line interface.
//!
//! Two subcommands: `run` executes the benchmark matrix and `check` looks
//! words up in a dictionary. With no subcommand, `run` executes with its
//! defaults, which reproduces the fixed benchmark.

pub mod display;
pub mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use lexibench::{BenchConfig, IndexKind};

#[derive(Parser)]
#[command(
    name = "lexibench",
    about = "Compare lookup speed of string-membership structures",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub logging: LoggingArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build every selected structure and time lookups over the batch matrix
    Run(RunArgs),

    /// Look words up in a dictionary (sorted array, binary search)
    Check {
        /// Word list, one word per line
        #[arg(short, long, default_value = lexibench::config::DEFAULT_DICTIONARY)]
        dictionary: PathBuf,

        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,
    },
}

#[derive(Args, Default)]
pub struct RunArgs {
    /// Word list, one word per line [default: words]
    #[arg(short, long)]
    pub dictionary: Option<PathBuf>,

    /// Prose corpus to tokenize [default: corpus.txt]
    #[arg(short, long)]
    pub corpus: Option<PathBuf>,

    /// Structures to include, comma separated [default: all]
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub structures: Vec<IndexKind>,

    /// Probes per mixed hit/miss batch [default: 10000]
    #[arg(long)]
    pub samples: Option<usize>,

    /// Bucket count for the chained hash set [default: 100000]
    #[arg(long)]
    pub buckets: Option<usize>,

    /// Words in the list-head sample [default: 1000]
    #[arg(long)]
    pub head: Option<usize>,

    /// Words in the list-tail sample [default: 100]
    #[arg(long)]
    pub tail: Option<usize>,

    /// Lowercase corpus tokens before lookup
    #[arg(long)]
    pub lowercase: bool,

    /// Run full-size batches against the linear list too (slow)
    #[arg(long)]
    pub linear_full: bool,

    /// JSON config file; flags given here override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the report as JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

impl RunArgs {
    /// Layer these flags over `config`.
    pub fn apply(&self, config: &mut BenchConfig) {
        if let Some(ref path) = self.dictionary {
            config.dictionary = path.clone();
        }
        if let Some(ref path) = self.corpus {
            config.corpus = path.clone();
        }
        if !self.structures.is_empty() {
            config.structures = self.structures.clone();
        }
        if let Some(samples) = self.samples {
            config.mixed_samples = samples;
        }
        if let Some(buckets) = self.buckets {
            config.buckets = buckets;
        }
        if let Some(head) = self.head {
            config.head_sample = head;
        }
        if let Some(tail) = self.tail {
            config.tail_sample = tail;
        }
        config.lowercase |= self.lowercase;
        config.include_linear_full |= self.linear_full;
    }
}

/// Cli arguments related to logging
#[derive(Args)]
pub struct LoggingArgs {
    /// Increase log verbosity (multiple uses increase verbosity further)
    #[arg(short, long, action = clap::ArgAction::Count, group = "verbosity")]
    verbose: u8,

    /// Reduce log verbosity to show only errors (equivalent to --log error)
    #[arg(short, long, group = "verbosity")]
    quiet: bool,

    /// Set log verbosity (default is "warn")
    #[arg(
        long = "log",
        value_parser = clap::builder::PossibleValuesParser::new(["error", "warn", "info", "debug", "trace"]),
        group = "verbosity"
    )]
    log_level: Option<String>,
}

impl LoggingArgs {
    /// Sets the logging verbosity in the following order:
    ///  - `--log`
    ///  - `--quiet`
    ///  - `-v` count
    ///  - `RUST_LOG` environment variable
    ///  - `warn`
    pub fn initialize_logging(&self) {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(log::LevelFilter::Warn);
        builder.parse_default_env();

        if let Some(ref level) = self.log_level {
            builder.parse_filters(level);
        } else if self.quiet {
            builder.filter_level(log::LevelFilter::Error);
        } else if self.verbose > 0 {
            builder.filter_level(match self.verbose {
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                _ => log::LevelFilter::Trace,
            });
        }

        builder.init();
    }
}
