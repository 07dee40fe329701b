// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error type for allocator failures.

use core::alloc::Layout;

use thiserror::Error;

/// An allocator could not satisfy a request.
///
/// Carries the layout that failed so callers can report or size down.
/// Allocation failures are always surfaced to the immediate caller; no
/// allocator in this workspace retries or falls back on its own.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("allocation of {size} bytes (align {align}) failed")]
pub struct AllocError {
    /// Requested size in bytes.
    pub size: usize,
    /// Requested alignment in bytes.
    pub align: usize,
}

impl AllocError {
    /// Builds the error from the layout that could not be satisfied.
    pub fn new(layout: Layout) -> Self {
        Self {
            size: layout.size(),
            align: layout.align(),
        }
    }
}
