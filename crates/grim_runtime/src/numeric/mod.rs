//! The numeric tower: fixnum/bigint integers, rationals, floats and complex
//! numbers, each kept in canonical form.

pub mod checked;
pub mod complex;
pub mod digits;
pub mod float;
pub mod generic;
pub mod hash;
pub mod integer;
pub mod rational;
pub mod scinot;

pub use complex::{components, imag_part, pack_complex, pack_polar, real_part};
pub use float::{float_value, is_float, pack_float, read_float, to_double};
pub use generic::{NumericKind, add, eqv, is_exact, is_number, negate, nonnegative, numeric_kind, sub};
pub use grim_core::{FIXNUM_MAX, FIXNUM_MIN};
pub use hash::hash_value;
pub use integer::{
    extract_integer, integer_sign, is_extractable, is_integer, normalize, pack_bigint, pack_integer,
    read_integer, to_bigint,
};
pub use rational::{denominator, is_rational_cell, numerator, pack_rational, to_ratio};
pub use scinot::pack_scinot;
