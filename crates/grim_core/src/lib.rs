//! Core types for the Grim runtime.
//!
//! This crate contains the fundamental types that do not need the heap:
//! - `Value` - Tagged machine word carrying immediates and heap references
//! - `ValueType` - Semantic type enumerator produced by tag dispatch
//! - `ObjectId` - Handle to a heap-allocated cell

pub mod gc;
pub mod value;

pub use gc::ObjectId;
pub use value::{FIXNUM_MAX, FIXNUM_MIN, Value, ValueType};
