//! Fixed-capacity heap allocator with first-, best- and worst-fit placement.
//!
//! This crate provides a heap over a contiguous, statically sized byte arena.
//! Clients request, release and resize variable-sized payloads and get raw
//! addresses inside the arena back; the allocator additionally offers a block
//! census, fragmentation statistics, a structural integrity audit and
//! human-/machine-readable dumps of the current layout. The design favors
//! being easy to reason about over being fast: one block chain, one linear
//! scan per operation, eager coalescing.
//!
//! # Usage
//! The single-threaded core is [`Heap`]; pick the arena size via the const
//! parameter:
//! ```
//! use fitalloc::{Heap, Status, Strategy};
//!
//! let mut heap = Heap::<4096>::new();
//! heap.set_strategy(Strategy::Best);
//!
//! let ptr = heap.allocate(100).expect("fresh heap has room");
//! assert_eq!(heap.last_status(), Status::Success);
//! assert!(heap.validate_pointer(ptr.as_ptr()));
//!
//! heap.free(ptr.as_ptr());
//! assert_eq!(heap.alloc_count(), 0);
//! assert!(heap.check_integrity());
//! ```
//! For use from several threads there is [`Allocator`], a thin shim that
//! serializes every operation behind a single lock, and [`HEAP`], a
//! ready-made process-wide instance with the reference capacity.
//!
//! # How the arena is managed
//! Every allocation is a *block*: a fixed-width header record followed by
//! the payload bytes handed to the caller. The headers form an intrusive
//! singly linked chain in address order, and a water-mark tracks how far the
//! chain has grown into the arena:
//!
//! ```text
//! |HHHH pppp pppp|HHHH pppp|HHHH pppp pppp pppp|............|
//!  ^--- used ---- ^--- free ^--- used ---------  ^ water-mark
//! ```
//!
//! 1.  An allocation rounds its request up to the alignment grid (header
//!     included) and scans the chain for a free block that fits, using the
//!     current [`Strategy`]. An oversized candidate is split: the head
//!     becomes the allocation, the tail a new free block.
//! 2.  If nothing fits, a fresh block is placed at the water-mark — the
//!     chain never grows while a usable hole exists.
//! 3.  Freeing releases the block and immediately merges it with free
//!     neighbours on both sides, so two adjacent free blocks never survive
//!     an operation.
//! 4.  Resizing prefers staying in place: it shrinks by splitting, grows by
//!     absorbing a free successor, and only as a last resort relocates the
//!     payload to a freshly allocated block.
//!
//! Outcomes are reported twice: as the return value of the operation and as
//! a most-recent-[`Status`] readable afterwards, which keeps the call sites
//! of the pointer-based API free of error plumbing.
//!
//! # What this crate is not
//! There is no operating-system memory acquisition (the arena size is fixed
//! at compile time), no size-class buckets, no thread-local caching and no
//! use-after-free detection beyond the structural audit. Only payload
//! addresses previously returned by the allocator are meaningful inputs.

mod heap;
mod report;
mod status;

pub use heap::{BlockInfo, Blocks, Heap, Strategy, HEADER_SIZE, MIN_BLOCK_SIZE};
pub use status::Status;

use core::ptr::NonNull;
use std::io;
use std::path::Path;

/// Capacity of the default [`HEAP`] instance, in bytes.
pub const HEAP_CAPACITY: usize = 640_000;

/// The alignment unit. Block sizes, header addresses and payload addresses
/// are all multiples of this.
pub const ALIGNMENT: usize = 16;

/// A [`Heap`] behind a single process-wide exclusion.
///
/// Every public operation acquires one spin lock for the duration of the
/// call, releases it on all exits and reads the status channel under the
/// same lock, so operations are linearizable in lock-acquisition order.
/// There is exactly one lock and no nesting, hence no deadlock.
///
/// ```
/// static ALLOCATOR: fitalloc::Allocator<4096> = fitalloc::Allocator::new();
///
/// let ptr = ALLOCATOR.allocate(64).expect("fresh heap has room");
/// ALLOCATOR.free(ptr.as_ptr());
/// assert_eq!(ALLOCATOR.last_status(), fitalloc::Status::Success);
/// ```
pub struct Allocator<const N: usize> {
    heap: spin::Mutex<Heap<N>>,
}

impl<const N: usize> Allocator<N> {
    /// Create a new allocator. A `const fn`, so it can initialize a
    /// `static` directly.
    ///
    /// # Panics
    /// Panics under the same conditions as [`Heap::new()`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            heap: spin::Mutex::new(Heap::new()),
        }
    }

    /// See [`Heap::allocate()`].
    pub fn allocate(&self, requested: usize) -> Option<NonNull<u8>> {
        self.heap.lock().allocate(requested)
    }

    /// See [`Heap::free()`].
    pub fn free(&self, ptr: *mut u8) {
        self.heap.lock().free(ptr);
    }

    /// See [`Heap::resize()`].
    pub fn resize(&self, ptr: *mut u8, requested: usize) -> Option<NonNull<u8>> {
        self.heap.lock().resize(ptr, requested)
    }

    /// See [`Heap::set_strategy()`].
    pub fn set_strategy(&self, strategy: Strategy) {
        self.heap.lock().set_strategy(strategy);
    }

    /// See [`Heap::strategy()`].
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.heap.lock().strategy()
    }

    /// See [`Heap::last_status()`].
    #[must_use]
    pub fn last_status(&self) -> Status {
        self.heap.lock().last_status()
    }

    /// See [`Heap::check_integrity()`].
    pub fn check_integrity(&self) -> bool {
        self.heap.lock().check_integrity()
    }

    /// See [`Heap::validate_pointer()`].
    #[must_use]
    pub fn validate_pointer(&self, ptr: *const u8) -> bool {
        self.heap.lock().validate_pointer(ptr)
    }

    /// See [`Heap::defragment()`].
    pub fn defragment(&self) {
        self.heap.lock().defragment();
    }

    /// See [`Heap::reset()`].
    pub fn reset(&self) {
        self.heap.lock().reset();
    }

    /// See [`Heap::used()`].
    #[must_use]
    pub fn used(&self) -> usize {
        self.heap.lock().used()
    }

    /// See [`Heap::capacity()`].
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// See [`Heap::alloc_count()`].
    #[must_use]
    pub fn alloc_count(&self) -> usize {
        self.heap.lock().alloc_count()
    }

    /// See [`Heap::free_block_count()`].
    #[must_use]
    pub fn free_block_count(&self) -> usize {
        self.heap.lock().free_block_count()
    }

    /// See [`Heap::used_heap_size()`].
    #[must_use]
    pub fn used_heap_size(&self) -> usize {
        self.heap.lock().used_heap_size()
    }

    /// See [`Heap::free_heap_size()`].
    #[must_use]
    pub fn free_heap_size(&self) -> usize {
        self.heap.lock().free_heap_size()
    }

    /// See [`Heap::fragmentation_ratio()`].
    #[must_use]
    pub fn fragmentation_ratio(&self) -> f64 {
        self.heap.lock().fragmentation_ratio()
    }

    /// See [`Heap::print_heap()`].
    pub fn print_heap(&self) {
        self.heap.lock().print_heap();
    }

    /// See [`Heap::save_heap_state()`].
    pub fn save_heap_state<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        self.heap.lock().save_heap_state(path)
    }

    /// See [`Heap::export_heap_json()`].
    pub fn export_heap_json<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        self.heap.lock().export_heap_json(path)
    }

    /// Lock the underlying heap for a sequence of operations, e.g. to walk
    /// the block census with [`Heap::blocks()`] while no other thread can
    /// reshape the chain.
    pub fn lock(&self) -> spin::MutexGuard<'_, Heap<N>> {
        self.heap.lock()
    }
}

impl<const N: usize> Default for Allocator<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// The default process-wide allocator: a 640,000-byte arena behind the
/// [`Allocator`] shim. Callers porting code that shared the historical
/// global heap state use this instance; everything else is better served by
/// an own [`Heap`].
pub static HEAP: Allocator<HEAP_CAPACITY> = Allocator::new();
