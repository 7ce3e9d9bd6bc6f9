// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type shared by loading, index construction and batch building.
//!
//! Queries never fail: `contains` returning `false` is an answer, not an
//! error. Everything that can fail happens before the measurement loop.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while preparing a benchmark run.
#[derive(Error, Debug)]
pub enum Error {
    /// A dictionary or corpus file could not be read.
    #[error("failed to read \"{}\": {source}", path.display())]
    Io {
        /// File that caused the failure
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A JSON configuration file could not be read or parsed.
    #[error("invalid config \"{}\": {source}", path.display())]
    Config {
        /// Config file path
        path: PathBuf,
        /// Parse error
        source: serde_json::Error,
    },

    /// A chained hash set needs at least one bucket.
    #[error("bucket count must be greater than zero")]
    InvalidBucketCount,

    /// A mixed batch needs dictionary words to draw hits and misses from.
    #[error("cannot build a query batch from an empty dictionary")]
    EmptyDictionary,

    /// A mixed batch asked for more hits than the dictionary holds.
    #[error("requested {requested} dictionary words but only {available} are available")]
    NotEnoughWords {
        /// Hits requested by the batch
        requested: usize,
        /// Words in the dictionary
        available: usize,
    },

    /// Hit fractions live in `[0, 1]`.
    #[error("hit fraction {0} is outside [0, 1]")]
    InvalidFraction(f64),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
