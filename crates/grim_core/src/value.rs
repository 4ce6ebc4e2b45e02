//! Runtime value representation.
//!
//! Every runtime value travels as a single 64-bit word. The low bits hold a
//! discriminant: bit 0 set means "fixnum", otherwise the low nibble selects
//! one of the immediate kinds or a heap reference (all four bits clear).

use crate::gc::ObjectId;
use std::fmt;

// Direct tags
pub const INDIRECT_TAG: u8 = 0b0000;
pub const FIXNUM_TAG: u8 = 0b0001;
pub const CHARACTER_TAG: u8 = 0b0010;
pub const SYMBOL_TAG: u8 = 0b0100;
pub const UNDEFINED_TAG: u8 = 0b0110;
pub const FALSE_TAG: u8 = 0b1000;
pub const TRUE_TAG: u8 = 0b1010;
pub const NIL_TAG: u8 = 0b1100;

pub const DIRECT_TAG_MASK: u64 = 0x0f;
const REF_SHIFT: u32 = 4;
const CHAR_SHIFT: u32 = 8;

// Cell tags, stored as the first byte of every heap cell
pub const FLOAT_CELL: u8 = 0x00;
pub const BIGINT_CELL: u8 = 0x01;
pub const RATIONAL_CELL: u8 = 0x02;
pub const COMPLEX_CELL: u8 = 0x03;
pub const SYMBOL_CELL: u8 = 0x04;

/// Largest integer stored as a fixnum. One bit of the word is reserved for
/// the fixnum discriminant.
pub const FIXNUM_MAX: i64 = i64::MAX / 2;
/// Smallest integer stored as a fixnum.
pub const FIXNUM_MIN: i64 = i64::MIN / 2;

/// Semantic type of a value, after resolving heap cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Integer,
    Float,
    Rational,
    Complex,
    Character,
    Symbol,
    Boolean,
    Nil,
    Undefined,
}

impl ValueType {
    /// Type of an immediate from its direct tag. Heap references need the
    /// cell tag and resolve to `None` here.
    pub fn from_direct_tag(tag: u8) -> Option<ValueType> {
        match tag {
            FIXNUM_TAG => Some(ValueType::Integer),
            CHARACTER_TAG => Some(ValueType::Character),
            SYMBOL_TAG => Some(ValueType::Symbol),
            FALSE_TAG | TRUE_TAG => Some(ValueType::Boolean),
            NIL_TAG => Some(ValueType::Nil),
            INDIRECT_TAG => None,
            _ => Some(ValueType::Undefined),
        }
    }

    /// Type of a heap cell from its stored tag byte.
    pub fn from_cell_tag(tag: u8) -> ValueType {
        match tag {
            FLOAT_CELL => ValueType::Float,
            BIGINT_CELL => ValueType::Integer,
            RATIONAL_CELL => ValueType::Rational,
            COMPLEX_CELL => ValueType::Complex,
            SYMBOL_CELL => ValueType::Symbol,
            _ => ValueType::Undefined,
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            ValueType::Integer | ValueType::Float | ValueType::Rational | ValueType::Complex
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueType::Integer => "integer",
            ValueType::Float => "float",
            ValueType::Rational => "rational",
            ValueType::Complex => "complex",
            ValueType::Character => "character",
            ValueType::Symbol => "symbol",
            ValueType::Boolean => "boolean",
            ValueType::Nil => "nil",
            ValueType::Undefined => "undefined",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Value(u64);

impl Default for Value {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

impl Value {
    pub const UNDEFINED: Value = Value(UNDEFINED_TAG as u64);
    pub const FALSE: Value = Value(FALSE_TAG as u64);
    pub const TRUE: Value = Value(TRUE_TAG as u64);
    pub const NIL: Value = Value(NIL_TAG as u64);

    #[inline(always)]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[inline(always)]
    pub const fn to_bits(self) -> u64 {
        self.0
    }

    /// Encode `n` as a fixnum, or `None` when it falls outside
    /// `FIXNUM_MIN..=FIXNUM_MAX`.
    #[inline(always)]
    pub const fn fixnum(n: i64) -> Option<Self> {
        if n >= FIXNUM_MIN && n <= FIXNUM_MAX {
            Some(Self(((n as u64) << 1) | FIXNUM_TAG as u64))
        } else {
            None
        }
    }

    /// Every `i32` fits the fixnum range.
    #[inline(always)]
    pub const fn from_i32(n: i32) -> Self {
        Self((((n as i64) as u64) << 1) | FIXNUM_TAG as u64)
    }

    #[inline(always)]
    pub const fn from_bool(b: bool) -> Self {
        if b { Self::TRUE } else { Self::FALSE }
    }

    #[inline(always)]
    pub const fn from_char(c: char) -> Self {
        Self(((c as u64) << CHAR_SHIFT) | CHARACTER_TAG as u64)
    }

    /// Reference to a heap cell.
    #[inline(always)]
    pub const fn heap(id: ObjectId) -> Self {
        Self((id.0 as u64) << REF_SHIFT)
    }

    /// Symbol reference. The symbol tag is packed over the cell handle, so
    /// the collector does not recognise the word as a heap reference.
    #[inline(always)]
    pub const fn symbol(id: ObjectId) -> Self {
        Self(((id.0 as u64) << REF_SHIFT) | SYMBOL_TAG as u64)
    }

    /// Discriminant of the word: `FIXNUM_TAG` when the integer bit is set,
    /// otherwise the low nibble.
    #[inline(always)]
    pub const fn direct_tag(self) -> u8 {
        if self.0 & FIXNUM_TAG as u64 != 0 {
            FIXNUM_TAG
        } else {
            (self.0 & DIRECT_TAG_MASK) as u8
        }
    }

    /// Type of an immediate; `None` for heap references.
    pub fn immediate_type(self) -> Option<ValueType> {
        ValueType::from_direct_tag(self.direct_tag())
    }

    #[inline(always)]
    pub const fn is_fixnum(self) -> bool {
        self.0 & FIXNUM_TAG as u64 != 0
    }

    #[inline(always)]
    pub const fn is_heap(self) -> bool {
        self.direct_tag() == INDIRECT_TAG
    }

    #[inline(always)]
    pub const fn is_immediate(self) -> bool {
        !self.is_heap()
    }

    #[inline(always)]
    pub const fn is_symbol(self) -> bool {
        self.direct_tag() == SYMBOL_TAG
    }

    #[inline(always)]
    pub const fn is_char(self) -> bool {
        self.direct_tag() == CHARACTER_TAG
    }

    #[inline(always)]
    pub const fn is_bool(self) -> bool {
        matches!(self.direct_tag(), FALSE_TAG | TRUE_TAG)
    }

    #[inline(always)]
    pub const fn is_nil(self) -> bool {
        self.0 == Self::NIL.0
    }

    #[inline(always)]
    pub const fn is_undefined(self) -> bool {
        self.0 == Self::UNDEFINED.0
    }

    /// Payload of a fixnum. The arithmetic shift restores the sign bit.
    #[inline(always)]
    pub const fn as_fixnum(self) -> i64 {
        (self.0 as i64) >> 1
    }

    #[inline(always)]
    pub const fn as_bool(self) -> bool {
        self.0 == Self::TRUE.0
    }

    #[inline(always)]
    pub fn as_char(self) -> char {
        char::from_u32((self.0 >> CHAR_SHIFT) as u32).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    #[inline(always)]
    pub const fn as_obj_id(self) -> ObjectId {
        ObjectId((self.0 >> REF_SHIFT) as usize)
    }

    #[inline(always)]
    pub const fn as_symbol_id(self) -> ObjectId {
        ObjectId((self.0 >> REF_SHIFT) as usize)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direct_tag() {
            FIXNUM_TAG => write!(f, "Fixnum({})", self.as_fixnum()),
            CHARACTER_TAG => write!(f, "Char({:?})", self.as_char()),
            SYMBOL_TAG => write!(f, "Symbol(id={:?})", self.as_symbol_id()),
            FALSE_TAG | TRUE_TAG => write!(f, "Bool({})", self.as_bool()),
            NIL_TAG => write!(f, "Nil"),
            INDIRECT_TAG => write!(f, "Heap(id={:?})", self.as_obj_id()),
            _ => write!(f, "Undefined"),
        }
    }
}
