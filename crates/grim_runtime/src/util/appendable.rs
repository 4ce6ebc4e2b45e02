use crate::core::{Cell, Heap};
use crate::numeric::nonnegative;
use grim_core::Value;
use num_bigint::BigInt;

pub trait Appendable {
    fn append_str(&mut self, s: &str);
    fn append_i64(&mut self, i: i64);
    fn append_f64(&mut self, f: f64);
    fn append_bigint(&mut self, n: &BigInt);
    fn append_bool(&mut self, b: bool);
    fn append_nil(&mut self);
    fn append_value(&mut self, v: Value, heap: &Heap);
}

impl Appendable for String {
    fn append_str(&mut self, s: &str) {
        self.push_str(s);
    }
    fn append_i64(&mut self, i: i64) {
        let mut buf = itoa::Buffer::new();
        self.push_str(buf.format(i));
    }
    fn append_f64(&mut self, f: f64) {
        if f.is_nan() {
            self.push_str("+nan.0");
        } else if f.is_infinite() {
            self.push_str(if f > 0.0 { "+inf.0" } else { "-inf.0" });
        } else {
            let mut buf = ryu::Buffer::new();
            self.push_str(buf.format_finite(f));
        }
    }
    fn append_bigint(&mut self, n: &BigInt) {
        use std::fmt::Write;
        write!(self, "{}", n).ok();
    }
    fn append_bool(&mut self, b: bool) {
        self.push_str(if b { "#t" } else { "#f" });
    }
    fn append_nil(&mut self) {
        self.push_str("()");
    }
    fn append_value(&mut self, v: Value, heap: &Heap) {
        if v.is_fixnum() {
            self.append_i64(v.as_fixnum());
        } else if v.is_bool() {
            self.append_bool(v.as_bool());
        } else if v.is_nil() {
            self.append_nil();
        } else if v.is_char() {
            self.push_str("#\\");
            self.push(v.as_char());
        } else if v.is_symbol() {
            self.push_str("#<symbol>");
        } else if let Some(cell) = heap.cell(v) {
            match cell {
                Cell::Float(x) => self.append_f64(*x),
                Cell::Bigint(n) => self.append_bigint(n),
                Cell::Rational(r) => {
                    self.append_bigint(r.numer());
                    self.push('/');
                    self.append_bigint(r.denom());
                }
                Cell::Complex { real, imag } => {
                    self.append_value(*real, heap);
                    let imag_nan = matches!(heap.cell(*imag), Some(Cell::Float(x)) if x.is_nan());
                    if !imag_nan && nonnegative(heap, *imag) {
                        self.push('+');
                    }
                    self.append_value(*imag, heap);
                    self.push('i');
                }
                Cell::Symbol(name) => self.push_str(name),
            }
        } else {
            self.push_str("#<undefined>");
        }
    }
}

/// Printed representation of `v`.
pub fn render(heap: &Heap, v: Value) -> String {
    let mut out = String::new();
    out.append_value(v, heap);
    out
}
