//! Digit classification and the per-base safe-digit table used by the
//! number readers.

use smallvec::SmallVec;

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

/// Unknown-trailing-zero placeholder.
pub const PLACEHOLDER: u8 = b'#';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitClass {
    /// Separator that carries no value (`_`, `.`).
    Ignore,
    Digit(u32),
    Invalid,
}

#[inline]
pub fn classify(c: u8) -> DigitClass {
    match c {
        b'.' | b'_' => DigitClass::Ignore,
        PLACEHOLDER => DigitClass::Digit(0),
        b'0'..=b'9' => DigitClass::Digit((c - b'0') as u32),
        b'a'..=b'z' => DigitClass::Digit((c - b'a') as u32 + 10),
        b'A'..=b'Z' => DigitClass::Digit((c - b'A') as u32 + 10),
        _ => DigitClass::Invalid,
    }
}

/// Largest digit count whose every numeral fits an `i64` accumulator.
const fn safe_digit_count(base: u32) -> usize {
    let base = base as i64;
    let mut limit = i64::MAX;
    let mut count = 0;
    while limit >= base {
        limit /= base;
        count += 1;
    }
    count
}

const fn build_safe_digits() -> [usize; MAX_BASE as usize + 1] {
    let mut table = [0; MAX_BASE as usize + 1];
    let mut base = MIN_BASE;
    while base <= MAX_BASE {
        table[base as usize] = safe_digit_count(base);
        base += 1;
    }
    table
}

static SAFE_DIGITS: [usize; MAX_BASE as usize + 1] = build_safe_digits();

#[inline]
pub fn is_supported_base(base: u32) -> bool {
    (MIN_BASE..=MAX_BASE).contains(&base)
}

/// Digits that can be accumulated natively without overflow in `base`.
#[inline]
pub fn safe_digits(base: u32) -> usize {
    SAFE_DIGITS[base as usize]
}

/// Split an optional leading sign off a numeral.
pub fn split_sign(text: &str) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

/// Number of value-carrying digits, placeholders included.
pub fn significant_digits(digits: &str) -> usize {
    digits
        .bytes()
        .filter(|&c| classify(c) != DigitClass::Ignore)
        .count()
}

/// Whether `digits` holds at least one digit and only characters valid in
/// `base`.
pub fn validate(digits: &str, base: u32) -> bool {
    let mut any = false;
    for c in digits.bytes() {
        match classify(c) {
            DigitClass::Ignore => {}
            DigitClass::Digit(d) if d < base => any = true,
            _ => return false,
        }
    }
    any
}

/// Drop separators and turn placeholders into zeros, producing a numeral
/// an arbitrary-precision parser accepts.
pub fn normalize_integer(digits: &str) -> SmallVec<[u8; 64]> {
    digits
        .bytes()
        .filter_map(|c| match classify(c) {
            DigitClass::Ignore => None,
            _ if c == PLACEHOLDER => Some(b'0'),
            _ => Some(c),
        })
        .collect()
}

/// Float flavour of `normalize_integer`: the decimal point is kept, only
/// `_` is dropped.
pub fn normalize_float(text: &str) -> SmallVec<[u8; 64]> {
    text.bytes()
        .filter_map(|c| match c {
            b'_' => None,
            PLACEHOLDER => Some(b'0'),
            _ => Some(c),
        })
        .collect()
}
