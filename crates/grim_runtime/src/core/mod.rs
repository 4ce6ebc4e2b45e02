//! Core runtime infrastructure.
//!
//! This module contains the heap and the value-type dispatch that needs it:
//! - `Heap` and `Cell` - Garbage-collected cells and their lifecycle
//! - `ValueExt` - Type resolution through heap cell tags

pub mod heap;
pub mod value;

pub use heap::{Cell, Finalizer, Heap, HeapStats};
pub use value::ValueExt;
