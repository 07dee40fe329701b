// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error type for vector operations.

use rampart_alloc::AllocError;
use thiserror::Error;

/// Failures a [`Vector`](crate::Vector) operation can report.
///
/// Every failing operation returns one of these to its immediate caller;
/// nothing is retried or swallowed. Unless documented otherwise the
/// operation leaves the vector observably unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// A position was outside `[0, len]` (insertion) or `[0, len)`
    /// (access/removal).
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// The vector length at the time of the call.
        len: usize,
    },

    /// An element range was ill-formed or reached past the end.
    #[error("invalid range {start}..{end} for length {len}")]
    InvalidRange {
        /// Range start.
        start: usize,
        /// Range end (exclusive).
        end: usize,
        /// The vector length at the time of the call.
        len: usize,
    },

    /// A capacity request exceeded the representable maximum for the
    /// element type.
    #[error("requested capacity {requested} exceeds the maximum of {max} elements")]
    CapacityOverflow {
        /// The requested element count.
        requested: usize,
        /// The maximum representable element count.
        max: usize,
    },

    /// The allocator reported failure.
    #[error("AllocError: {0}")]
    Alloc(#[from] AllocError),
}
