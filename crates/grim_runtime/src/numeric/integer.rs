//! Exact integers: fixnums and bigints under one canonical form.
//!
//! An integer inside `FIXNUM_MIN..=FIXNUM_MAX` is always an immediate fixnum;
//! a Bigint cell always holds a value outside that range. Every constructor
//! in this module goes through `pack_integer` or `pack_bigint`, which
//! restore that invariant.

use super::digits::{self, DigitClass};
use crate::core::{Cell, Heap};
use crate::errors::messages::{INVALID_DIGIT, NOT_AN_INTEGER, NOT_EXTRACTABLE, UNSUPPORTED_BASE};
use grim_core::Value;
use num_bigint::{BigInt, Sign};
use num_traits::{Signed, ToPrimitive};

pub const ZERO: Value = Value::from_i32(0);
pub const ONE: Value = Value::from_i32(1);

pub fn pack_integer(heap: &mut Heap, n: i64) -> Value {
    match Value::fixnum(n) {
        Some(v) => v,
        None => Value::heap(heap.alloc_bigint(BigInt::from(n))),
    }
}

/// Canonicalizing constructor from an arbitrary-precision integer.
pub fn pack_bigint(heap: &mut Heap, n: BigInt) -> Value {
    if let Some(v) = n.to_i64().and_then(Value::fixnum) {
        return v;
    }
    Value::heap(heap.alloc_bigint(n))
}

/// Whether `v` is an integer of either representation.
#[inline]
pub fn is_integer(heap: &Heap, v: Value) -> bool {
    v.is_fixnum() || matches!(heap.cell(v), Some(Cell::Bigint(_)))
}

pub(crate) fn bigint_ref(heap: &Heap, v: Value) -> &BigInt {
    match heap.cell(v) {
        Some(Cell::Bigint(n)) => n,
        _ => panic!("{}", NOT_AN_INTEGER),
    }
}

pub fn is_extractable(heap: &Heap, v: Value) -> bool {
    if v.is_fixnum() {
        return true;
    }
    bigint_ref(heap, v).to_i64().is_some()
}

pub fn extract_integer(heap: &Heap, v: Value) -> i64 {
    if v.is_fixnum() {
        return v.as_fixnum();
    }
    match bigint_ref(heap, v).to_i64() {
        Some(n) => n,
        None => panic!("{}", NOT_EXTRACTABLE),
    }
}

/// Demote a Bigint cell whose value fits a fixnum.
pub fn normalize(heap: &Heap, v: Value) -> Value {
    if v.is_fixnum() {
        return v;
    }
    bigint_ref(heap, v)
        .to_i64()
        .and_then(Value::fixnum)
        .unwrap_or(v)
}

pub fn to_bigint(heap: &Heap, v: Value) -> BigInt {
    if v.is_fixnum() {
        BigInt::from(v.as_fixnum())
    } else {
        bigint_ref(heap, v).clone()
    }
}

/// Parse a numeral in `base`.
///
/// `_` and `.` are ignored and `#` reads as an unknown trailing zero. Short
/// numerals are accumulated natively; longer ones go through
/// arbitrary-precision parsing and are demoted if they fit after all.
/// Digit syntax is the reader's job: an invalid digit is fatal.
pub fn read_integer(heap: &mut Heap, text: &str, base: u32) -> Value {
    assert!(digits::is_supported_base(base), "{}: {}", UNSUPPORTED_BASE, base);
    let (negative, body) = digits::split_sign(text);
    assert!(digits::validate(body, base), "{} in {:?}", INVALID_DIGIT, text);

    if digits::significant_digits(body) <= digits::safe_digits(base) {
        let mut value: i64 = 0;
        for c in body.bytes() {
            if let DigitClass::Digit(d) = digits::classify(c) {
                value = value * base as i64 + d as i64;
            }
        }
        return pack_integer(heap, if negative { -value } else { value });
    }

    let normalized = digits::normalize_integer(body);
    let magnitude = match BigInt::parse_bytes(&normalized, base) {
        Some(n) => n,
        None => panic!("{} in {:?}", INVALID_DIGIT, text),
    };
    log::trace!("read {} significant digits as bigint", normalized.len());
    pack_bigint(heap, if negative { -magnitude } else { magnitude })
}

/// Integer addition: native when both are fixnums and the sum stays in
/// range, arbitrary precision otherwise.
pub fn add_integers(heap: &mut Heap, a: Value, b: Value) -> Value {
    if a.is_fixnum() && b.is_fixnum() {
        // Two fixnums never overflow the native word.
        if let Some(v) = Value::fixnum(a.as_fixnum() + b.as_fixnum()) {
            return v;
        }
        log::trace!("fixnum sum overflow, promoting");
    }
    let sum = to_bigint(heap, a) + to_bigint(heap, b);
    pack_bigint(heap, sum)
}

pub fn negate_integer(heap: &mut Heap, v: Value) -> Value {
    if v.is_fixnum() {
        return pack_integer(heap, -v.as_fixnum());
    }
    let negated = -bigint_ref(heap, v);
    pack_bigint(heap, negated)
}

pub fn integer_sign(heap: &Heap, v: Value) -> Sign {
    if v.is_fixnum() {
        return match v.as_fixnum() {
            0 => Sign::NoSign,
            n if n < 0 => Sign::Minus,
            _ => Sign::Plus,
        };
    }
    bigint_ref(heap, v).sign()
}

pub fn integer_nonnegative(heap: &Heap, v: Value) -> bool {
    if v.is_fixnum() {
        return v.as_fixnum() >= 0;
    }
    !bigint_ref(heap, v).is_negative()
}
