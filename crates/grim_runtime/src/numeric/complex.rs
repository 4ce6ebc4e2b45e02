//! Complex numbers as pairs of real components.

use super::float::{is_float, pack_float, to_double};
use super::generic::{NumericKind, negate, numeric_kind};
use super::integer::ZERO;
use crate::core::{Cell, Heap};
use crate::errors::messages::{NOT_A_COMPLEX, NOT_A_NUMBER, NOT_A_REAL};
use grim_core::Value;

/// Whether `v` is a provably zero imaginary part: exact 0 or a float zero.
fn is_zero_component(heap: &Heap, v: Value) -> bool {
    if v.is_fixnum() {
        return v.as_fixnum() == 0;
    }
    matches!(heap.cell(v), Some(Cell::Float(x)) if *x == 0.0)
}

fn is_real(heap: &Heap, v: Value) -> bool {
    matches!(
        numeric_kind(heap, v),
        Some(NumericKind::Integer | NumericKind::Float | NumericKind::Rational)
    )
}

/// Build `real + imag·i`, or return `real` itself when `imag` is zero.
///
/// When exactly one component is a float the other is coerced, so both
/// components of a Complex cell always share one exactness.
pub fn pack_complex(heap: &mut Heap, real: Value, imag: Value) -> Value {
    assert!(is_real(heap, real), "{}", NOT_A_REAL);
    if is_zero_component(heap, imag) {
        return real;
    }
    assert!(is_real(heap, imag), "{}", NOT_A_REAL);

    let (real, imag) = match (is_float(heap, real), is_float(heap, imag)) {
        (true, false) => {
            let x = to_double(heap, imag);
            (real, pack_float(heap, x))
        }
        (false, true) => {
            let x = to_double(heap, real);
            (pack_float(heap, x), imag)
        }
        _ => (real, imag),
    };
    Value::heap(heap.alloc(Cell::Complex { real, imag }))
}

/// Complex number from a magnitude and an angle in degrees. Always inexact.
pub fn pack_polar(heap: &mut Heap, magnitude: Value, angle_degrees: Value) -> Value {
    let m = to_double(heap, magnitude);
    let theta = to_double(heap, angle_degrees).to_radians();
    let real = pack_float(heap, m * theta.cos());
    let imag = pack_float(heap, m * theta.sin());
    pack_complex(heap, real, imag)
}

/// Components of a Complex cell.
pub fn components(heap: &Heap, v: Value) -> (Value, Value) {
    match heap.cell(v) {
        Some(Cell::Complex { real, imag }) => (*real, *imag),
        _ => panic!("{}", NOT_A_COMPLEX),
    }
}

/// Components of any number; a real has an exact zero imaginary part.
pub(crate) fn as_components(heap: &Heap, v: Value) -> (Value, Value) {
    match numeric_kind(heap, v) {
        Some(NumericKind::Complex) => components(heap, v),
        Some(_) => (v, ZERO),
        None => panic!("{}", NOT_A_NUMBER),
    }
}

pub fn real_part(heap: &Heap, v: Value) -> Value {
    as_components(heap, v).0
}

pub fn imag_part(heap: &Heap, v: Value) -> Value {
    as_components(heap, v).1
}

pub fn negate_complex(heap: &mut Heap, v: Value) -> Value {
    let (real, imag) = components(heap, v);
    let real = negate(heap, real);
    let imag = negate(heap, imag);
    pack_complex(heap, real, imag)
}
