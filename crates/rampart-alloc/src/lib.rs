// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Pluggable allocator capability trait for rampart containers.
//!
//! This crate defines the boundary between a container and the memory it
//! lives in: [`RawAllocator`] hands out and takes back raw blocks, and
//! nothing else. Element construction and destruction are the container's
//! business.
//!
//! # Core pieces
//!
//! - [`RawAllocator`]: fallible `allocate`/`deallocate` over a [`Layout`],
//!   plus the two policy hooks containers consult when they are copied,
//!   moved or swapped: [`RawAllocator::fork`] and
//!   [`RawAllocator::propagation`].
//! - [`Global`]: the default backend, delegating to the global Rust
//!   allocator.
//! - [`AllocError`]: the failure value; allocation never panics and is
//!   never retried.
//!
//! # Propagation
//!
//! Allocators compare with `==` to decide whether two instances can free
//! each other's blocks. [`Propagation`] configures what a container does
//! with its allocator instance on copy-assignment, move-assignment and
//! swap; [`Propagation::ADOPT`] and [`Propagation::REBUILD`] cover the two
//! common policies.
//!
//! # Example
//!
//! ```rust
//! use core::alloc::Layout;
//! use rampart_alloc::{Global, RawAllocator};
//!
//! let alloc = Global;
//! let layout = Layout::array::<u64>(8).unwrap();
//!
//! let block = alloc.allocate(layout).expect("allocation failed");
//! unsafe { alloc.deallocate(block, layout) };
//! ```
//!
//! # Test utilities
//!
//! With the `test_utils` feature the crate ships instrumented allocators
//! for failure injection and observation: [`CountingAlloc`],
//! [`FailingAlloc`] and [`TaggedAlloc`]. They share their state through
//! `Rc` and are meant for single-threaded tests only.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod error;
mod global;
mod traits;

#[cfg(any(test, feature = "test_utils"))]
mod instrumented;

#[cfg(test)]
mod tests;

pub use error::AllocError;
pub use global::Global;
pub use traits::{Propagation, RawAllocator};

#[cfg(any(test, feature = "test_utils"))]
pub use instrumented::{CountingAlloc, FailingAlloc, TaggedAlloc};

// Re-exported so trait implementors do not need a direct core path.
pub use core::alloc::Layout;
