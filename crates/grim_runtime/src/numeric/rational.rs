//! Exact fractions.
//!
//! A Rational cell always holds a reduced fraction with a denominator
//! greater than one; anything that reduces to a whole number is an integer.

use super::integer::{extract_integer, is_extractable, is_integer, pack_bigint, pack_integer, to_bigint};
use crate::core::{Cell, Heap};
use crate::errors::messages::{NOT_AN_INTEGER, NOT_A_RATIONAL, ZERO_DENOMINATOR};
use grim_core::Value;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::Signed;

/// Build `numerator / denominator` in canonical form. Both arguments must
/// be canonical integers and the denominator must not be zero.
pub fn pack_rational(heap: &mut Heap, numerator: Value, denominator: Value) -> Value {
    assert!(is_integer(heap, numerator), "{}", NOT_AN_INTEGER);
    assert!(is_integer(heap, denominator), "{}", NOT_AN_INTEGER);

    if is_extractable(heap, denominator) {
        let den = extract_integer(heap, denominator);
        assert!(den != 0, "{}", ZERO_DENOMINATOR);
        if den == 1 {
            return numerator;
        }
    }

    // Fixnum over fixnum that divides evenly: skip the fraction entirely.
    if numerator.is_fixnum() && denominator.is_fixnum() {
        let (n, d) = (numerator.as_fixnum(), denominator.as_fixnum());
        let g = n.gcd(&d);
        if d / g == 1 || d / g == -1 {
            return pack_integer(heap, n / g * (d / g));
        }
    }

    let ratio = BigRational::new(to_bigint(heap, numerator), to_bigint(heap, denominator));
    pack_ratio(heap, ratio)
}

/// Store an already reduced fraction, collapsing whole numbers.
pub(crate) fn pack_ratio(heap: &mut Heap, ratio: BigRational) -> Value {
    if ratio.is_integer() {
        let (numer, _) = ratio.into_raw();
        return pack_bigint(heap, numer);
    }
    Value::heap(heap.alloc_rational(ratio))
}

#[inline]
pub fn is_rational_cell(heap: &Heap, v: Value) -> bool {
    matches!(heap.cell(v), Some(Cell::Rational(_)))
}

pub(crate) fn ratio_ref(heap: &Heap, v: Value) -> &BigRational {
    match heap.cell(v) {
        Some(Cell::Rational(r)) => r,
        _ => panic!("{}", NOT_A_RATIONAL),
    }
}

/// Promote an integer or rational to fraction form.
pub fn to_ratio(heap: &Heap, v: Value) -> BigRational {
    if is_integer(heap, v) {
        return BigRational::from_integer(to_bigint(heap, v));
    }
    ratio_ref(heap, v).clone()
}

/// Numerator in lowest terms. An integer is its own numerator.
pub fn numerator(heap: &mut Heap, v: Value) -> Value {
    if is_integer(heap, v) {
        return v;
    }
    let numer = ratio_ref(heap, v).numer().clone();
    pack_bigint(heap, numer)
}

/// Positive denominator in lowest terms. An integer has denominator 1.
pub fn denominator(heap: &mut Heap, v: Value) -> Value {
    if is_integer(heap, v) {
        return super::integer::ONE;
    }
    let denom = ratio_ref(heap, v).denom().clone();
    pack_bigint(heap, denom)
}

/// Exact sum where at least one side is a Rational cell. The result is
/// reduced, and collapses to an integer when the denominators cancel.
pub fn add_rationals(heap: &mut Heap, a: Value, b: Value) -> Value {
    let sum = to_ratio(heap, a) + to_ratio(heap, b);
    pack_ratio(heap, sum)
}

pub fn negate_rational(heap: &mut Heap, v: Value) -> Value {
    let negated = -ratio_ref(heap, v);
    pack_ratio(heap, negated)
}

pub fn rational_nonnegative(heap: &Heap, v: Value) -> bool {
    !ratio_ref(heap, v).is_negative()
}

/// `base^exponent` as an exact integer magnitude.
pub(crate) fn big_pow(base: u32, exponent: u32) -> BigInt {
    BigInt::from(base).pow(exponent)
}
