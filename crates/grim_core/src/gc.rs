//! Garbage collection infrastructure - base types.

/// Handle to a heap-allocated cell.
///
/// Handles are slot indices, never addresses, so a handle stays valid to
/// decode no matter which tag bits are packed around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);
