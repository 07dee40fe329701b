// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Whole-vector duplication, transfer and exchange.
//!
//! These are the operations that must respect the allocator's
//! [`Propagation`](rampart_alloc::Propagation) policy: a block may only
//! ever be freed by an allocator equal to the one that produced it, so
//! adopting a buffer and adopting an allocator have to travel together.

use core::mem;
use core::ptr;

use rampart_alloc::RawAllocator;

use crate::error::VectorError;
use crate::raw_buf::RawBuf;
use crate::vector::Vector;

impl<T, A: RawAllocator> Vector<T, A> {
    /// Duplicates the vector, cloning every element.
    ///
    /// The new allocator comes from [`RawAllocator::fork`]; the new
    /// capacity is the source length, not the source capacity. If a clone
    /// panics, everything built so far is destroyed and the fresh buffer
    /// is released; the source is never touched.
    pub fn try_clone(&self) -> Result<Self, VectorError>
    where
        T: Clone,
    {
        let mut out = Vector::new_in(self.buf.allocator().fork());
        if self.len > 0 {
            out.reallocate(self.len)?;
            out.extend_from_slice(self.as_slice())?;
        }
        Ok(out)
    }

    /// Replaces the contents with clones of `source`'s elements.
    ///
    /// Current elements are destroyed first. With an unequal allocator
    /// and a propagating policy the old buffer is released and the
    /// source's allocator is adopted before reallocating; otherwise the
    /// buffer is reused when the source fits.
    pub fn assign_from(&mut self, source: &Self) -> Result<(), VectorError>
    where
        T: Clone,
    {
        if ptr::eq(self, source) {
            return Ok(());
        }

        self.clear();
        if self.buf.allocator().propagation().on_copy_assign
            && self.buf.allocator() != source.buf.allocator()
        {
            // The old block belongs to the old allocator; release it
            // before the new allocator takes over.
            self.buf = RawBuf::dangling(source.buf.allocator().clone());
        }
        if source.len > self.capacity() {
            self.reallocate(source.len)?;
        }
        self.extend_from_slice(source.as_slice())
    }

    /// Takes `source`'s contents, leaving it empty and usable.
    ///
    /// With a propagating policy or equal allocators this adopts the
    /// source's buffer in O(1); no element is moved, cloned or dropped
    /// beyond the destination's own. Otherwise it falls back to an
    /// element-wise bitwise move into owned storage; on allocation
    /// failure in that fallback the destination has already been cleared
    /// (basic guarantee), while the source is still intact.
    pub fn take_from(&mut self, source: &mut Self) -> Result<(), VectorError> {
        if ptr::eq(self, source) {
            return Ok(());
        }

        let propagate = self.buf.allocator().propagation().on_move_assign;
        if propagate {
            self.clear();
            let replacement = RawBuf::dangling(source.buf.allocator().clone());
            // Block and allocator travel together.
            self.buf = mem::replace(&mut source.buf, replacement);
        } else if self.buf.allocator() == source.buf.allocator() {
            self.clear();
            let (block, cap) = source.buf.surrender();
            // SAFETY: the allocators compare equal, so ours may free the
            // adopted block; our previous block holds no live elements.
            unsafe { self.buf.adopt_block(block, cap) };
        } else {
            self.clear();
            if source.len > self.capacity() {
                self.reallocate(source.len)?;
            }
            // SAFETY: both buffers cover `source.len` slots; the source
            // forgets the moved elements below.
            unsafe {
                ptr::copy_nonoverlapping(source.buf.ptr(), self.buf.ptr(), source.len);
            }
        }

        self.len = source.len;
        source.len = 0;
        Ok(())
    }

    /// Exchanges contents with `other` in O(1).
    ///
    /// Allocator instances are exchanged only under a propagating swap
    /// policy; without it the two vectors must already share equal
    /// allocators.
    pub fn swap_with(&mut self, other: &mut Self) {
        if ptr::eq(self, other) {
            return;
        }

        if self.buf.allocator().propagation().on_swap {
            mem::swap(&mut self.buf, &mut other.buf);
        } else {
            debug_assert!(
                self.buf.allocator() == other.buf.allocator(),
                "swap_with without propagation requires equal allocators"
            );
            self.buf.swap_blocks(&mut other.buf);
        }
        mem::swap(&mut self.len, &mut other.len);
    }
}
