// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;

use crate::{CountingAlloc, FailingAlloc, Propagation, RawAllocator, TaggedAlloc};

fn probe_layout() -> Layout {
    Layout::array::<u32>(8).unwrap()
}

// =============================================================================
// CountingAlloc
// =============================================================================

#[test]
fn test_counting_tracks_roundtrips() {
    let alloc = CountingAlloc::new();
    let layout = probe_layout();

    let a = alloc.allocate(layout).unwrap();
    let b = alloc.allocate(layout).unwrap();
    assert_eq!(alloc.allocations(), 2);
    assert_eq!(alloc.live(), 2);

    unsafe {
        alloc.deallocate(a, layout);
        alloc.deallocate(b, layout);
    }
    assert_eq!(alloc.deallocations(), 2);
    assert_eq!(alloc.live(), 0);
}

#[test]
fn test_counting_clones_share_counters() {
    let alloc = CountingAlloc::new();
    let clone = alloc.clone();
    let layout = probe_layout();

    let block = clone.allocate(layout).unwrap();
    assert_eq!(alloc.allocations(), 1);

    unsafe { alloc.deallocate(block, layout) };
    assert_eq!(clone.deallocations(), 1);
}

#[test]
fn test_counting_equality_is_shared_state() {
    let alloc = CountingAlloc::new();
    assert_eq!(alloc, alloc.clone());
    assert_ne!(alloc, CountingAlloc::new());
}

// =============================================================================
// FailingAlloc
// =============================================================================

#[test]
fn test_failing_exhausts_budget() {
    let alloc = FailingAlloc::new(2);
    let layout = probe_layout();

    let a = alloc.allocate(layout).unwrap();
    let b = alloc.allocate(layout).unwrap();
    assert_eq!(alloc.remaining(), 0);

    let err = alloc.allocate(layout).unwrap_err();
    assert_eq!(err.size, layout.size());
    assert_eq!(err.align, layout.align());

    unsafe {
        alloc.deallocate(a, layout);
        alloc.deallocate(b, layout);
    }
}

#[test]
fn test_failing_budget_is_shared_and_resettable() {
    let alloc = FailingAlloc::new(0);
    let clone = alloc.clone();
    let layout = probe_layout();

    assert!(clone.allocate(layout).is_err());

    alloc.set_budget(1);
    let block = clone.allocate(layout).unwrap();
    assert!(alloc.allocate(layout).is_err());

    unsafe { clone.deallocate(block, layout) };
}

// =============================================================================
// TaggedAlloc
// =============================================================================

#[test]
fn test_tagged_equality_compares_ids() {
    let a = TaggedAlloc::new(1);
    let b = TaggedAlloc::new(1);
    let c = TaggedAlloc::new(2);

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.fork().id(), 1);
}

#[test]
fn test_tagged_propagation_is_configurable() {
    let adopt = TaggedAlloc::new(1);
    let rebuild = TaggedAlloc::new(1).with_propagation(Propagation::REBUILD);

    assert_eq!(adopt.propagation(), Propagation::ADOPT);
    assert_eq!(rebuild.propagation(), Propagation::REBUILD);
    // Policy does not take part in equality.
    assert_eq!(adopt, rebuild);
}
