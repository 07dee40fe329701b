// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Allocator-aware contiguous containers with strong failure guarantees.</em></p>
//!
//! ---
//!
//! Rampart is a small container library built around one idea: memory can
//! run out, and a container should report that instead of aborting your
//! process. Every allocating operation returns a `Result`, every failing
//! operation leaves the container observably unchanged, and the allocator
//! is a value you choose per container.
//!
//! # Features
//!
//! - **Fallible everywhere** — allocation failure is an error value, not a panic
//! - **Strong guarantees** — failed operations roll back, even across panicking clones
//! - **Pluggable allocators** — bring your own [`RawAllocator`], with propagation policies
//! - **`no_std` compatible** — only `alloc` is required
//!
//! # Quick Start
//!
//! ```rust
//! use rampart::{Vector, VectorError};
//!
//! fn main() -> Result<(), VectorError> {
//!     let mut vec = Vector::try_from_slice(&[1, 2, 9])?;
//!     vec.remove(1)?;
//!     assert_eq!(vec, [1, 9]);
//!
//!     vec.reserve(100)?;
//!     assert_eq!(vec.capacity(), 100);
//!     Ok(())
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

/// The allocator boundary: trait, default backend, policies.
pub mod alloc {
    pub use rampart_alloc::{AllocError, Global, Propagation, RawAllocator};

    #[cfg(feature = "test_utils")]
    pub use rampart_alloc::{CountingAlloc, FailingAlloc, TaggedAlloc};
}

/// The containers.
pub mod vec {
    pub use rampart_vec::{Vector, VectorError};
}

pub use rampart_alloc::{AllocError, Global, Propagation, RawAllocator};
pub use rampart_vec::{Vector, VectorError};
