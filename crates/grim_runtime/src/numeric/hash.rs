//! Hashing consistent with `eqv`.

use super::generic::{NumericKind, numeric_kind};
use super::complex::components;
use super::float::float_value;
use super::integer::bigint_ref;
use super::rational::ratio_ref;
use crate::core::Heap;
use ahash::RandomState;
use grim_core::Value;
use num_bigint::BigInt;
use std::hash::{BuildHasher, Hash, Hasher};

// Fixed keys so hashes are stable across runs.
const K0: u64 = 0x243f_6a88_85a3_08d3;
const K1: u64 = 0x1319_8a2e_0370_7344;
const K2: u64 = 0xa409_3822_299f_31d0;

pub fn hash_value(heap: &Heap, v: Value, seed: u64) -> u64 {
    let mut hasher = RandomState::with_seeds(K0, K1, K2, K0 ^ K1).build_hasher();
    hasher.write_u64(seed);
    feed(heap, v, &mut hasher);
    hasher.finish()
}

fn feed_bigint<H: Hasher>(n: &BigInt, state: &mut H) {
    let (sign, digits) = n.to_u64_digits();
    (sign as u8).hash(state);
    digits.hash(state);
}

fn feed<H: Hasher>(heap: &Heap, v: Value, state: &mut H) {
    let Some(kind) = numeric_kind(heap, v) else {
        // Non-numbers are eqv only to themselves.
        state.write_u8(0xff);
        state.write_u64(v.to_bits());
        return;
    };
    state.write_u8(kind as u8);
    match kind {
        NumericKind::Integer if v.is_fixnum() => state.write_i64(v.as_fixnum()),
        NumericKind::Integer => feed_bigint(bigint_ref(heap, v), state),
        NumericKind::Float => state.write_u64(float_value(heap, v).to_bits()),
        NumericKind::Rational => {
            let r = ratio_ref(heap, v);
            feed_bigint(r.numer(), state);
            feed_bigint(r.denom(), state);
        }
        NumericKind::Complex => {
            let (real, imag) = components(heap, v);
            feed(heap, real, state);
            feed(heap, imag, state);
        }
    }
}
