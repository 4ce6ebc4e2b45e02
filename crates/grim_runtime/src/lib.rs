//! Grim runtime: the managed heap and the numeric tower built on it.

#![allow(clippy::new_without_default)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::unnecessary_cast)]

pub mod config;
pub mod core;
pub mod errors;
pub mod numeric;
mod util;

mod builtins;
pub mod builtins_registry;

// Re-exports from core/
pub use crate::core::value::{pack_symbol_cell, symbol_name};
pub use crate::core::{Cell, Finalizer, Heap, HeapStats, ValueExt};

// Re-exports from util/
pub use util::{Appendable, render};

pub use builtins::{builtin_add, builtin_sub};
pub use builtins_registry::{BuiltinFn, BuiltinProvider, BuiltinRegistry, StdBuiltinProvider};
pub use config::HeapConfig;
pub use errors::{NumericError, NumericResult};
pub use grim_core::{FIXNUM_MAX, FIXNUM_MIN, ObjectId, Value, ValueType};
