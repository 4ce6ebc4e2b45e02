//! Validating front doors to the numeric tower.
//!
//! The tower itself trusts its callers and treats bad input as fatal. These
//! wrappers check the same preconditions first and report a `NumericError`
//! instead, for callers that handle untrusted values.

use super::digits;
use super::generic::{NumericKind, is_exact, nonnegative, numeric_kind};
use super::integer::{extract_integer, is_extractable, is_integer, read_integer};
use super::rational::pack_rational;
use super::float::pack_float;
use crate::core::{Heap, ValueExt};
use crate::errors::{NumericError, NumericResult};
use grim_core::Value;

/// Kind of `v`, or `NotANumber` naming `op`.
pub fn expect_number(heap: &Heap, v: Value, op: &'static str) -> NumericResult<NumericKind> {
    numeric_kind(heap, v).ok_or_else(|| NumericError::NotANumber {
        op,
        found: v.type_of(heap),
    })
}

pub fn expect_integer(heap: &Heap, v: Value, op: &'static str) -> NumericResult<()> {
    if is_integer(heap, v) {
        Ok(())
    } else {
        Err(NumericError::NotAnInteger {
            op,
            found: v.type_of(heap),
        })
    }
}

pub fn try_extract_integer(heap: &Heap, v: Value) -> NumericResult<i64> {
    expect_integer(heap, v, "extract-integer")?;
    if !is_extractable(heap, v) {
        return Err(NumericError::NotExtractable);
    }
    Ok(extract_integer(heap, v))
}

pub fn try_pack_rational(heap: &mut Heap, numerator: Value, denominator: Value) -> NumericResult<Value> {
    expect_integer(heap, numerator, "make-rational")?;
    expect_integer(heap, denominator, "make-rational")?;
    if denominator == super::integer::ZERO {
        return Err(NumericError::ZeroDenominator);
    }
    Ok(pack_rational(heap, numerator, denominator))
}

pub fn try_read_integer(heap: &mut Heap, text: &str, base: u32) -> NumericResult<Value> {
    if !digits::is_supported_base(base) {
        return Err(NumericError::UnsupportedBase(base));
    }
    let (_, body) = digits::split_sign(text);
    if !digits::validate(body, base) {
        return Err(NumericError::InvalidDigit {
            text: text.to_string(),
            base,
        });
    }
    Ok(read_integer(heap, text, base))
}

pub fn try_read_float(heap: &mut Heap, text: &str) -> NumericResult<Value> {
    let normalized = digits::normalize_float(text);
    let parsed = std::str::from_utf8(&normalized)
        .ok()
        .and_then(|s| s.parse::<f64>().ok());
    match parsed {
        Some(x) => Ok(pack_float(heap, x)),
        None => Err(NumericError::InvalidFloat(text.to_string())),
    }
}

pub fn try_nonnegative(heap: &Heap, v: Value) -> NumericResult<bool> {
    match expect_number(heap, v, "nonnegative?")? {
        NumericKind::Complex => Err(NumericError::NotAReal { op: "nonnegative?" }),
        _ => Ok(nonnegative(heap, v)),
    }
}

pub fn try_is_exact(heap: &Heap, v: Value) -> NumericResult<bool> {
    expect_number(heap, v, "exact?")?;
    Ok(is_exact(heap, v))
}
