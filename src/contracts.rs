// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the membership indexes.
//!
//! Debug-mode assertions guarding the invariants each index relies on.
//! These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Guards                                   |
//! |----------------------------|------------------------------------------|
//! | `check_strictly_sorted`    | `SortedArraySet` buffer order and unique |
//! | `check_size_consistent`    | `size()` agrees with `iter()`            |
//! | `check_buckets_consistent` | chained hash bucket/collision accounting |
//! | `check_fraction`           | measurement ratios stay in `[0, 1]`      |

use crate::index::MembershipIndex;

// ============================================================================
// ORDER CONTRACTS
// ============================================================================

/// Check that a word buffer is strictly increasing.
///
/// Strict order implies no duplicates, which is what makes the buffer
/// length equal to the distinct entry count.
///
/// # Panics (debug builds only)
/// Panics at the first adjacent pair that is out of order or equal.
#[inline]
pub fn check_strictly_sorted(words: &[String]) {
    if cfg!(debug_assertions) {
        for (i, pair) in words.windows(2).enumerate() {
            debug_assert!(
                pair[0] < pair[1],
                "Contract violation: BUFFER_SORTED - words[{}] ('{}') >= words[{}] ('{}')",
                i,
                pair[0],
                i + 1,
                pair[1]
            );
        }
    }
}

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Check that an index's `size()` matches the number of entries `iter()`
/// yields.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_size_consistent(index: &dyn MembershipIndex) {
    debug_assert_eq!(
        index.size(),
        index.iter().count(),
        "Contract violation: {} size() disagrees with iter()",
        index.name()
    );
}

/// Check that bucket accounting adds up: every item either opened a bucket
/// or collided with one.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_buckets_consistent(items: usize, used_buckets: usize, collisions: usize) {
    debug_assert_eq!(
        used_buckets + collisions,
        items,
        "Contract violation: used_buckets ({}) + collisions ({}) != items ({})",
        used_buckets,
        collisions,
        items
    );
}

/// Check that a measured ratio is a valid fraction.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_fraction(fraction: f64) {
    debug_assert!(
        (0.0..=1.0).contains(&fraction),
        "Contract violation: fraction {} outside [0, 1]",
        fraction
    );
}
