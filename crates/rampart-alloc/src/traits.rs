// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The allocator capability trait and its propagation policy.

use core::alloc::Layout;
use core::ptr::NonNull;

use crate::error::AllocError;

/// What a container does with its allocator instance when it is
/// copy-assigned, move-assigned or swapped.
///
/// A `true` flag means the container adopts (or exchanges) the source's
/// allocator for that operation; `false` means it keeps its own and, where
/// the instances differ, falls back to element-wise work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Propagation {
    /// Adopt the source allocator on copy assignment.
    pub on_copy_assign: bool,
    /// Adopt the source allocator on move assignment.
    pub on_move_assign: bool,
    /// Exchange allocators on swap.
    pub on_swap: bool,
}

impl Propagation {
    /// Adopt the source allocator on every operation.
    pub const ADOPT: Self = Self {
        on_copy_assign: true,
        on_move_assign: true,
        on_swap: true,
    };

    /// Never adopt; the container always keeps the allocator it was
    /// built with.
    pub const REBUILD: Self = Self {
        on_copy_assign: false,
        on_move_assign: false,
        on_swap: false,
    };
}

impl Default for Propagation {
    fn default() -> Self {
        Self::ADOPT
    }
}

/// A source of raw memory blocks with value semantics.
///
/// Instances are cheap to clone and compare; two instances that compare
/// equal must be able to free each other's blocks. Containers hold their
/// allocator by value and consult [`fork`](RawAllocator::fork) and
/// [`propagation`](RawAllocator::propagation) when they are duplicated or
/// assigned over.
///
/// # Safety
///
/// Implementations must uphold the allocator contract:
///
/// - A block returned by [`allocate`](RawAllocator::allocate) is valid for
///   reads and writes of `layout.size()` bytes at `layout.align()`
///   alignment, and stays valid until passed to
///   [`deallocate`](RawAllocator::deallocate) on this instance or one
///   equal to it.
/// - `deallocate` is called with the exact layout the block was allocated
///   with; passing a mismatched layout or a foreign block is the caller's
///   contract violation, never the allocator's to detect.
/// - Cloning or moving the allocator must not invalidate live blocks.
pub unsafe trait RawAllocator: Clone + PartialEq {
    /// Hands out a block for `layout`, or reports failure.
    ///
    /// `layout.size()` must be non-zero; containers never request
    /// zero-sized blocks.
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

    /// Takes back a block previously returned by
    /// [`allocate`](RawAllocator::allocate) with the same layout.
    ///
    /// # Safety
    ///
    /// `ptr` must denote a live block allocated with `layout` by this
    /// instance or one comparing equal to it, and must not be used after
    /// this call.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);

    /// Derives the allocator a copy of the container starts with.
    ///
    /// The default shares this instance's state via `clone`; stateful
    /// allocators that want each copy to start fresh override this.
    fn fork(&self) -> Self {
        self.clone()
    }

    /// The propagation policy for this instance.
    fn propagation(&self) -> Propagation {
        Propagation::ADOPT
    }
}
