//! The status channel of the allocator.
//!
//! Every public operation records its outcome in a most-recent-status slot,
//! which callers read through [`Heap::last_status()`](crate::Heap::last_status).
//! This mirrors the classic two-channel reporting of C allocators: a sentinel
//! return value (a `None` payload pointer or a `false` predicate) signals
//! *that* something failed, the status value says *what* failed.

/// Outcome of the most recently completed allocator operation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The operation fulfilled its contract.
    #[default]
    Success,
    /// Generic allocation-time failure, e.g. a zero-size request.
    Error,
    /// No free block fits and extending the arena would exceed its capacity.
    OutOfMemory,
    /// A null pointer or an already-free block was passed to a free operation.
    InvalidFree,
    /// An alignment violation, reported by the integrity audit or defensively
    /// from the allocation path.
    AlignmentError,
    /// A split was requested with infeasible parameters.
    InvalidOperation,
    /// A structural violation: a cycle, an out-of-range block, a pointer
    /// outside the arena or an adjacent pair of free blocks.
    HeapError,
    /// Positive result of the integrity audit.
    HeapOk,
}
