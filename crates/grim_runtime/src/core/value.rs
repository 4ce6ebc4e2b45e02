//! Value-type dispatch over immediates and heap cells.

use super::heap::{Cell, Heap};
use crate::errors::messages::NOT_A_SYMBOL;
use grim_core::{Value, ValueType};

pub trait ValueExt {
    /// Semantic type. Total: every word maps to some `ValueType`.
    fn type_of(&self, heap: &Heap) -> ValueType;
    /// Tag byte of the referenced cell, `None` for immediates.
    fn cell_tag(&self, heap: &Heap) -> Option<u8>;
    fn is_number(&self, heap: &Heap) -> bool;
    fn type_name(&self, heap: &Heap) -> &'static str;
}

impl ValueExt for Value {
    #[inline]
    fn type_of(&self, heap: &Heap) -> ValueType {
        match self.immediate_type() {
            Some(ty) => ty,
            None => ValueType::from_cell_tag(heap.get(self.as_obj_id()).tag()),
        }
    }

    #[inline]
    fn cell_tag(&self, heap: &Heap) -> Option<u8> {
        heap.cell(*self).map(Cell::tag)
    }

    #[inline]
    fn is_number(&self, heap: &Heap) -> bool {
        self.type_of(heap).is_numeric()
    }

    fn type_name(&self, heap: &Heap) -> &'static str {
        self.type_of(heap).name()
    }
}

/// Allocate a symbol cell and return a symbol reference to it.
///
/// The cell is permanent: the returned word carries the symbol tag over the
/// handle, which the collector does not treat as a reference.
pub fn pack_symbol_cell(heap: &mut Heap, name: &str) -> Value {
    Value::symbol(heap.alloc_permanent(Cell::Symbol(name.into())))
}

/// Name stored in the cell behind a symbol reference.
pub fn symbol_name(heap: &Heap, v: Value) -> &str {
    assert!(v.is_symbol(), "{}", NOT_A_SYMBOL);
    match heap.get(v.as_symbol_id()) {
        Cell::Symbol(name) => name,
        _ => panic!("{}", NOT_A_SYMBOL),
    }
}
