// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Allocator-parameterized dynamic array with strong failure guarantees.
//!
//! [`Vector<T, A>`] is contiguous growable storage over any
//! [`RawAllocator`](rampart_alloc::RawAllocator): O(1) indexed access,
//! amortized O(1) append, geometric (factor 2) growth, and `Result`-based
//! failure reporting throughout: allocation failure is an error value,
//! not a panic.
//!
//! # Guarantees
//!
//! Every mutating operation either fully succeeds or leaves the vector
//! observably unchanged, including when an element's `Clone` panics
//! mid-operation (replacements built so far are destroyed and the
//! original layout restored before the panic continues). The documented
//! exceptions: the cross-allocator [`take_from`](Vector::take_from)
//! fallback and a failing [`try_extend`](Vector::try_extend), which keep
//! the vector valid but changed.
//!
//! # Example
//!
//! ```rust
//! use rampart_vec::{Vector, VectorError};
//!
//! fn example() -> Result<(), VectorError> {
//!     let mut vec = Vector::try_from_slice(&[4, 8, 1, 5, 0, 3])?;
//!
//!     vec.insert(2, 9)?;
//!     assert_eq!(vec, [4, 8, 9, 1, 5, 0, 3]);
//!
//!     vec.erase(1..3)?;
//!     assert_eq!(vec, [4, 1, 5, 0, 3]);
//!
//!     let kept = vec.capacity();
//!     vec.clear();
//!     assert_eq!(vec.capacity(), kept);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Allocator awareness
//!
//! The allocator lives inside the vector by value. Duplication derives a
//! new instance via `fork`, and assignment/swap consult the allocator's
//! propagation policy; see [`try_clone`](Vector::try_clone),
//! [`assign_from`](Vector::assign_from), [`take_from`](Vector::take_from)
//! and [`swap_with`](Vector::swap_with).

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod cmp;
mod coordinate;
mod error;
mod guards;
mod mutation;
mod raw_buf;
mod vector;

#[cfg(test)]
mod tests;

pub use error::VectorError;
pub use vector::Vector;

// The allocator boundary, re-exported for downstream convenience.
pub use rampart_alloc::{AllocError, Global, Propagation, RawAllocator};
