//! Scientific-notation constructor used by the decimal reader.

use super::float::{pack_float, to_double};
use super::integer::{is_integer, pack_bigint, to_bigint};
use super::rational::{big_pow, pack_rational};
use crate::core::Heap;
use crate::errors::messages::{EXPONENT_TOO_LARGE, NOT_AN_INTEGER};
use grim_core::Value;

/// `scale × base^exponent`.
///
/// Inexact requests produce a float. Exact requests stay exact: a
/// non-negative exponent yields an integer, a negative one a reduced
/// fraction.
pub fn pack_scinot(heap: &mut Heap, scale: Value, base: u32, exponent: i64, exact: bool) -> Value {
    assert!(is_integer(heap, scale), "{}", NOT_AN_INTEGER);

    if !exact {
        let s = to_double(heap, scale);
        return pack_float(heap, s * (base as f64).powf(exponent as f64));
    }
    if exponent == 0 {
        return scale;
    }

    let power = match u32::try_from(exponent.unsigned_abs()) {
        Ok(p) => big_pow(base, p),
        Err(_) => panic!("{}: {}", EXPONENT_TOO_LARGE, exponent),
    };
    if exponent < 0 {
        let denominator = pack_bigint(heap, power);
        pack_rational(heap, scale, denominator)
    } else {
        let product = to_bigint(heap, scale) * power;
        pack_bigint(heap, product)
    }
}
