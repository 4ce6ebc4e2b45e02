//! Boxed double-precision floats.

use super::digits;
use crate::core::{Cell, Heap};
use crate::errors::messages::{INVALID_FLOAT, NOT_A_FLOAT, NOT_A_REAL};
use grim_core::Value;
use num_traits::ToPrimitive;

pub fn pack_float(heap: &mut Heap, x: f64) -> Value {
    Value::heap(heap.alloc(Cell::Float(x)))
}

#[inline]
pub fn is_float(heap: &Heap, v: Value) -> bool {
    matches!(heap.cell(v), Some(Cell::Float(_)))
}

pub fn float_value(heap: &Heap, v: Value) -> f64 {
    match heap.cell(v) {
        Some(Cell::Float(x)) => *x,
        _ => panic!("{}", NOT_A_FLOAT),
    }
}

/// Parse a decimal float literal. Placeholders become zeros and `_` is
/// dropped; parsing never consults the host locale.
pub fn read_float(heap: &mut Heap, text: &str) -> Value {
    let normalized = digits::normalize_float(text);
    let parsed = std::str::from_utf8(&normalized)
        .ok()
        .and_then(|s| s.parse::<f64>().ok());
    match parsed {
        Some(x) => pack_float(heap, x),
        None => panic!("{} {:?}", INVALID_FLOAT, text),
    }
}

/// Nearest double to any real number.
pub fn to_double(heap: &Heap, v: Value) -> f64 {
    if v.is_fixnum() {
        return v.as_fixnum() as f64;
    }
    match heap.cell(v) {
        Some(Cell::Float(x)) => *x,
        Some(Cell::Bigint(n)) => {
            n.to_f64().unwrap_or(if n.sign() == num_bigint::Sign::Minus {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            })
        }
        Some(Cell::Rational(r)) => r.to_f64().unwrap_or_else(|| {
            let n = r.numer().to_f64().unwrap_or(f64::NAN);
            let d = r.denom().to_f64().unwrap_or(f64::NAN);
            n / d
        }),
        _ => panic!("{}", NOT_A_REAL),
    }
}
