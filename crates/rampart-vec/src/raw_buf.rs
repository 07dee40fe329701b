// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw storage: a single contiguous block paired with its allocator.
//!
//! `RawBuf` allocates and frees slots and nothing more. It never reads,
//! constructs or destroys elements; which slots hold live values is the
//! vector's bookkeeping, not this module's.

use core::alloc::Layout;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use rampart_alloc::RawAllocator;

use crate::error::VectorError;

/// An exclusively owned block of `cap` element slots plus the allocator
/// that produced it.
///
/// "No block" is the dangling pointer with `cap == 0`. Zero-sized element
/// types never allocate and report capacity `usize::MAX`.
pub(crate) struct RawBuf<T, A: RawAllocator> {
    ptr: NonNull<T>,
    cap: usize,
    alloc: A,
    _owns: PhantomData<T>,
}

impl<T, A: RawAllocator> RawBuf<T, A> {
    /// Largest number of slots any buffer of this element type may hold.
    pub(crate) const fn max_capacity() -> usize {
        if size_of::<T>() == 0 {
            usize::MAX
        } else {
            (isize::MAX as usize) / size_of::<T>()
        }
    }

    fn empty_capacity() -> usize {
        if size_of::<T>() == 0 { usize::MAX } else { 0 }
    }

    /// A buffer with no block.
    pub(crate) fn dangling(alloc: A) -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: Self::empty_capacity(),
            alloc,
            _owns: PhantomData,
        }
    }

    /// Allocates a block of `cap` slots, or reports why it cannot.
    pub(crate) fn allocate(cap: usize, alloc: A) -> Result<Self, VectorError> {
        if size_of::<T>() == 0 || cap == 0 {
            return Ok(Self::dangling(alloc));
        }

        let max = Self::max_capacity();
        if cap > max {
            return Err(VectorError::CapacityOverflow {
                requested: cap,
                max,
            });
        }

        let layout = Layout::array::<T>(cap).map_err(|_| VectorError::CapacityOverflow {
            requested: cap,
            max,
        })?;
        let block = alloc.allocate(layout)?;

        Ok(Self {
            ptr: block.cast(),
            cap,
            alloc,
            _owns: PhantomData,
        })
    }

    #[inline(always)]
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline(always)]
    pub(crate) fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Exchanges blocks with `other`; both allocators stay where they are.
    pub(crate) fn swap_blocks(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.cap, &mut other.cap);
    }

    /// Gives up the block, leaving this buffer empty. The caller becomes
    /// responsible for freeing the returned block through an allocator
    /// equal to this one.
    pub(crate) fn surrender(&mut self) -> (NonNull<T>, usize) {
        let ptr = mem::replace(&mut self.ptr, NonNull::dangling());
        let cap = mem::replace(&mut self.cap, Self::empty_capacity());
        (ptr, cap)
    }

    /// Frees the current block and takes ownership of `(ptr, cap)`.
    ///
    /// # Safety
    ///
    /// The incoming block must have been allocated with `cap` slots by an
    /// allocator comparing equal to this buffer's, and must contain no
    /// live elements the caller still relies on being dropped here.
    pub(crate) unsafe fn adopt_block(&mut self, ptr: NonNull<T>, cap: usize) {
        self.release();
        self.ptr = ptr;
        self.cap = cap;
    }

    /// Frees the block, if any, and resets to the empty state.
    pub(crate) fn release(&mut self) {
        if size_of::<T>() != 0 && self.cap != 0 {
            let layout = match Layout::array::<T>(self.cap) {
                Ok(layout) => layout,
                Err(_) => return,
            };
            // SAFETY: ptr/layout are exactly what allocate produced on
            // this allocator (or an equal one, per adopt_block).
            unsafe { self.alloc.deallocate(self.ptr.cast(), layout) };
        }
        self.ptr = NonNull::dangling();
        self.cap = Self::empty_capacity();
    }
}

impl<T, A: RawAllocator> Drop for RawBuf<T, A> {
    fn drop(&mut self) {
        self.release();
    }
}

// SAFETY: RawBuf owns its block exclusively; sending or sharing it is
// exactly as safe as sending or sharing T and A.
unsafe impl<T: Send, A: RawAllocator + Send> Send for RawBuf<T, A> {}
unsafe impl<T: Sync, A: RawAllocator + Sync> Sync for RawBuf<T, A> {}
