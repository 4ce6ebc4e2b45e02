//! Type-indexed operations across the four numeric kinds.

use super::complex::{as_components, components, negate_complex, pack_complex};
use super::float::{float_value, pack_float, to_double};
use super::integer::{add_integers, bigint_ref, integer_nonnegative, negate_integer};
use super::rational::{add_rationals, negate_rational, ratio_ref, rational_nonnegative};
use crate::core::{Cell, Heap};
use crate::errors::messages::{NOT_A_NUMBER, NOT_A_REAL};
use grim_core::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Integer,
    Float,
    Rational,
    Complex,
}

/// Numeric kind of `v`, or `None` for non-numbers.
#[inline]
pub fn numeric_kind(heap: &Heap, v: Value) -> Option<NumericKind> {
    if v.is_fixnum() {
        return Some(NumericKind::Integer);
    }
    match heap.cell(v)? {
        Cell::Float(_) => Some(NumericKind::Float),
        Cell::Bigint(_) => Some(NumericKind::Integer),
        Cell::Rational(_) => Some(NumericKind::Rational),
        Cell::Complex { .. } => Some(NumericKind::Complex),
        Cell::Symbol(_) => None,
    }
}

#[inline]
pub fn is_number(heap: &Heap, v: Value) -> bool {
    numeric_kind(heap, v).is_some()
}

fn kind_of(heap: &Heap, v: Value) -> NumericKind {
    match numeric_kind(heap, v) {
        Some(kind) => kind,
        None => panic!("{}: {:?}", NOT_A_NUMBER, v),
    }
}

/// Sum of two numbers. Complex beats Float beats Rational beats Integer:
/// the result takes the highest kind of the two operands, then collapses to
/// canonical form.
pub fn add(heap: &mut Heap, a: Value, b: Value) -> Value {
    use NumericKind::*;

    // Fixnum pair: skip the dispatch table entirely.
    if a.is_fixnum() && b.is_fixnum() {
        return add_integers(heap, a, b);
    }

    match (kind_of(heap, a), kind_of(heap, b)) {
        (Complex, _) | (_, Complex) => {
            let (ar, ai) = as_components(heap, a);
            let (br, bi) = as_components(heap, b);
            let real = add(heap, ar, br);
            let imag = add(heap, ai, bi);
            pack_complex(heap, real, imag)
        }
        (Float, _) | (_, Float) => {
            let sum = to_double(heap, a) + to_double(heap, b);
            pack_float(heap, sum)
        }
        (Rational, _) | (_, Rational) => add_rationals(heap, a, b),
        (Integer, Integer) => add_integers(heap, a, b),
    }
}

pub fn sub(heap: &mut Heap, a: Value, b: Value) -> Value {
    let negated = negate(heap, b);
    add(heap, a, negated)
}

/// Additive inverse. Always returns a fresh value; the operand's cell is
/// never touched, so other holders of it keep seeing the old number.
pub fn negate(heap: &mut Heap, v: Value) -> Value {
    match kind_of(heap, v) {
        NumericKind::Integer => negate_integer(heap, v),
        NumericKind::Float => {
            let x = float_value(heap, v);
            pack_float(heap, -x)
        }
        NumericKind::Rational => negate_rational(heap, v),
        NumericKind::Complex => negate_complex(heap, v),
    }
}

/// Sign test for real numbers. Complex numbers have no order.
pub fn nonnegative(heap: &Heap, v: Value) -> bool {
    match kind_of(heap, v) {
        NumericKind::Integer => integer_nonnegative(heap, v),
        NumericKind::Float => float_value(heap, v) >= 0.0,
        NumericKind::Rational => rational_nonnegative(heap, v),
        NumericKind::Complex => panic!("{}", NOT_A_REAL),
    }
}

pub fn is_exact(heap: &Heap, v: Value) -> bool {
    match kind_of(heap, v) {
        NumericKind::Integer | NumericKind::Rational => true,
        NumericKind::Float => false,
        NumericKind::Complex => {
            let (real, imag) = components(heap, v);
            is_exact(heap, real) && is_exact(heap, imag)
        }
    }
}

/// Equivalence used by equality and hashing routines.
///
/// Numbers are eqv when they have the same kind and value; floats compare
/// by bit pattern, so a NaN is eqv to itself and `0.0` is not eqv to
/// `-0.0`. Everything else compares by identity.
pub fn eqv(heap: &Heap, a: Value, b: Value) -> bool {
    if a == b {
        return true;
    }
    let (Some(ka), Some(kb)) = (numeric_kind(heap, a), numeric_kind(heap, b)) else {
        return false;
    };
    if ka != kb {
        return false;
    }
    match ka {
        // Canonical form: two equal integers are either the same fixnum word
        // or two bigints.
        NumericKind::Integer => {
            !a.is_fixnum() && !b.is_fixnum() && bigint_ref(heap, a) == bigint_ref(heap, b)
        }
        NumericKind::Float => float_value(heap, a).to_bits() == float_value(heap, b).to_bits(),
        NumericKind::Rational => ratio_ref(heap, a) == ratio_ref(heap, b),
        NumericKind::Complex => {
            let (ar, ai) = components(heap, a);
            let (br, bi) = components(heap, b);
            eqv(heap, ar, br) && eqv(heap, ai, bi)
        }
    }
}
