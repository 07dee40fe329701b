// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Positional mutation: append, insert, remove and bulk edits.
//!
//! Positions are indices. Inserting at `len` is the amortized O(1) fast
//! path; anywhere else shifts the tail with `ptr::copy`. Out-of-range
//! positions are reported as errors, never silently accepted.

use core::ops::Range;
use core::ptr;

use rampart_alloc::RawAllocator;

use crate::error::VectorError;
use crate::guards::{BuildGuard, GapGuard};
use crate::vector::Vector;

impl<T, A: RawAllocator> Vector<T, A> {
    /// Appends `value`.
    pub fn push(&mut self, value: T) -> Result<(), VectorError> {
        let required = self.required_len(1)?;
        self.ensure_capacity(required)?;
        // SAFETY: slot `len` is raw and within capacity.
        unsafe { ptr::write(self.buf.ptr().add(self.len), value) };
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was live; ownership moves to the caller.
        Some(unsafe { ptr::read(self.buf.ptr().add(self.len)) })
    }

    /// Inserts `value` at `index`, shifting everything after it right.
    ///
    /// `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), VectorError> {
        if index > self.len {
            return Err(VectorError::OutOfBounds {
                index,
                len: self.len,
            });
        }
        if index == self.len {
            return self.push(value);
        }

        let required = self.required_len(1)?;
        self.ensure_capacity(required)?;
        // SAFETY: capacity covers len + 1; the tail shifts into raw slots
        // and the freed slot receives the new value.
        unsafe {
            let base = self.buf.ptr();
            ptr::copy(base.add(index), base.add(index + 1), self.len - index);
            ptr::write(base.add(index), value);
        }
        self.len += 1;
        Ok(())
    }

    /// Inserts clones of `values` at `index`, in order.
    ///
    /// An empty slice is a no-op. If a clone panics, the already cloned
    /// elements are destroyed and the original sequence is restored
    /// before the panic continues.
    pub fn insert_from_slice(&mut self, index: usize, values: &[T]) -> Result<(), VectorError>
    where
        T: Clone,
    {
        self.open_gap_with(index, values.len(), |gap| {
            for value in values {
                // SAFETY: one fill per reserved gap slot.
                unsafe { gap.fill(value.clone()) };
            }
        })
    }

    /// Inserts `count` clones of `value` at `index`.
    pub fn insert_fill(&mut self, index: usize, count: usize, value: &T) -> Result<(), VectorError>
    where
        T: Clone,
    {
        self.open_gap_with(index, count, |gap| {
            for _ in 0..count {
                // SAFETY: one fill per reserved gap slot.
                unsafe { gap.fill(value.clone()) };
            }
        })
    }

    /// Opens a `count`-slot gap at `index`, lets `fill` populate it, and
    /// commits. The guard unwinds the shift if `fill` panics.
    fn open_gap_with(
        &mut self,
        index: usize,
        count: usize,
        fill: impl FnOnce(&mut GapGuard<T>),
    ) -> Result<(), VectorError> {
        if index > self.len {
            return Err(VectorError::OutOfBounds {
                index,
                len: self.len,
            });
        }
        if count == 0 {
            return Ok(());
        }

        let required = self.required_len(count)?;
        self.ensure_capacity(required)?;

        let tail_len = self.len - index;
        // SAFETY: capacity covers len + count; the tail moves into raw
        // slots and the gap is tracked by the guard until committed.
        unsafe {
            let base = self.buf.ptr();
            ptr::copy(base.add(index), base.add(index + count), tail_len);
            let mut gap = GapGuard::new(base, index, count, tail_len);
            fill(&mut gap);
            gap.disarm();
        }
        self.len += count;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the tail
    /// left.
    pub fn remove(&mut self, index: usize) -> Result<T, VectorError> {
        if index >= self.len {
            return Err(VectorError::OutOfBounds {
                index,
                len: self.len,
            });
        }
        // SAFETY: slot `index` is live; the tail closes over it.
        unsafe {
            let base = self.buf.ptr();
            let value = ptr::read(base.add(index));
            ptr::copy(base.add(index + 1), base.add(index), self.len - index - 1);
            self.len -= 1;
            Ok(value)
        }
    }

    /// Destroys the elements in `range` and closes the gap.
    ///
    /// `start == end` is a no-op.
    pub fn erase(&mut self, range: Range<usize>) -> Result<(), VectorError> {
        let Range { start, end } = range;
        if start > end || end > self.len {
            return Err(VectorError::InvalidRange {
                start,
                end,
                len: self.len,
            });
        }
        if start == end {
            return Ok(());
        }

        let erased = end - start;
        let old_len = self.len;
        // Only the prefix counts as live while the range drops; a
        // panicking element Drop then leaks the tail instead of
        // double-dropping it.
        self.len = start;
        // SAFETY: [start, end) is live and is dropped exactly once; the
        // tail then closes the gap.
        unsafe {
            let base = self.buf.ptr();
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(start), erased));
            ptr::copy(base.add(end), base.add(start), old_len - end);
        }
        self.len = old_len - erased;
        Ok(())
    }

    /// Destroys every element past `new_len`. Capacity is unchanged.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let removed = self.len - new_len;
        // Length drops first so an unwinding element Drop cannot expose
        // the dead tail.
        self.len = new_len;
        // SAFETY: the former tail [new_len, new_len + removed) was live.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.ptr().add(new_len),
                removed,
            ));
        }
    }

    /// Destroys every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Grows or shrinks to exactly `new_len` elements, filling new slots
    /// with clones of `value`.
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), VectorError>
    where
        T: Clone,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }

        self.reserve(new_len)?;
        let additional = new_len - self.len;
        // SAFETY: capacity covers new_len; the guard owns the partially
        // built tail until committed.
        unsafe {
            let mut guard = BuildGuard::new(self.buf.ptr().add(self.len));
            for _ in 1..additional {
                guard.construct(value.clone());
            }
            guard.construct(value);
            guard.disarm();
        }
        self.len = new_len;
        Ok(())
    }

    /// Appends clones of `values`, in order.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), VectorError>
    where
        T: Clone,
    {
        if values.is_empty() {
            return Ok(());
        }
        let required = self.required_len(values.len())?;
        self.ensure_capacity(required)?;
        // SAFETY: capacity covers the whole run; the guard owns it until
        // committed.
        unsafe {
            let mut guard = BuildGuard::new(self.buf.ptr().add(self.len));
            for value in values {
                guard.construct(value.clone());
            }
            guard.disarm();
        }
        self.len += values.len();
        Ok(())
    }

    /// Appends everything `iter` yields.
    ///
    /// If growth fails mid-iteration, elements already consumed from the
    /// iterator stay appended; dropping them would lose data the iterator
    /// no longer holds.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), VectorError>
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let required = self.required_len(lower)?;
        self.ensure_capacity(required)?;
        for value in iter {
            self.push(value)?;
        }
        Ok(())
    }

    /// Replaces the contents with clones of `values`.
    ///
    /// Reallocates only if the current capacity cannot hold them.
    pub fn assign_from_slice(&mut self, values: &[T]) -> Result<(), VectorError>
    where
        T: Clone,
    {
        self.clear();
        if values.len() > self.capacity() {
            self.reallocate(values.len())?;
        }
        self.extend_from_slice(values)
    }
}
