use grim_runtime::numeric::{
    add, denominator, eqv, extract_integer, is_exact, numerator, pack_integer, pack_rational,
    to_double,
};
use grim_runtime::{Heap, Value, ValueExt, ValueType, render};
use proptest::prelude::*;

fn ratio(heap: &mut Heap, n: i64, d: i64) -> Value {
    let n = pack_integer(heap, n);
    let d = pack_integer(heap, d);
    pack_rational(heap, n, d)
}

fn parts(heap: &mut Heap, v: Value) -> (i64, i64) {
    let n = numerator(heap, v);
    let d = denominator(heap, v);
    (extract_integer(heap, n), extract_integer(heap, d))
}

#[test]
fn whole_fractions_collapse() {
    let mut heap = Heap::new();
    assert_eq!(ratio(&mut heap, 2, 1), Value::fixnum(2).unwrap());
    assert_eq!(ratio(&mut heap, 4, 2), Value::fixnum(2).unwrap());
    assert_eq!(ratio(&mut heap, 6, -3), Value::fixnum(-2).unwrap());
    assert_eq!(heap.live_count(), 0);
}

#[test]
fn fractions_are_reduced() {
    let mut heap = Heap::new();
    let half = ratio(&mut heap, 1, 2);
    assert_eq!(half.type_of(&heap), ValueType::Rational);
    assert_eq!(parts(&mut heap, half), (1, 2));

    let reduced = ratio(&mut heap, 2, 4);
    assert_eq!(parts(&mut heap, reduced), (1, 2));
    assert_eq!(render(&heap, reduced), "1/2");
}

#[test]
fn sign_moves_to_the_numerator() {
    let mut heap = Heap::new();
    let a = ratio(&mut heap, 1, -2);
    assert_eq!(parts(&mut heap, a), (-1, 2));
    let b = ratio(&mut heap, -1, 2);
    assert_eq!(parts(&mut heap, b), (-1, 2));
    let c = ratio(&mut heap, -3, -6);
    assert_eq!(parts(&mut heap, c), (1, 2));
}

#[test]
fn integers_have_unit_denominator() {
    let mut heap = Heap::new();
    let seven = pack_integer(&mut heap, 7);
    assert_eq!(parts(&mut heap, seven), (7, 1));
}

#[test]
fn bigint_components() {
    let mut heap = Heap::new();
    let big = pack_integer(&mut heap, i64::MAX);
    let three = pack_integer(&mut heap, 3);
    let r = pack_rational(&mut heap, three, big);
    assert_eq!(render(&heap, r), format!("3/{}", i64::MAX));
    let d = denominator(&mut heap, r);
    assert!(d.is_heap());
}

#[test]
#[should_panic(expected = "Zero denominator")]
fn zero_denominator_is_fatal() {
    let mut heap = Heap::new();
    ratio(&mut heap, 1, 0);
}

#[test]
#[should_panic(expected = "Not an integer")]
fn non_integer_component_is_fatal() {
    let mut heap = Heap::new();
    let half = ratio(&mut heap, 1, 2);
    let one = pack_integer(&mut heap, 1);
    pack_rational(&mut heap, half, one);
}

#[test]
fn addition_reduces_the_sum() {
    let mut heap = Heap::new();
    let third = ratio(&mut heap, 1, 3);
    let sixth = ratio(&mut heap, 1, 6);
    let sum = add(&mut heap, third, sixth);
    assert_eq!(parts(&mut heap, sum), (1, 2));
}

#[test]
fn addition_collapses_to_integer() {
    let mut heap = Heap::new();
    let a = ratio(&mut heap, 1, 2);
    let b = ratio(&mut heap, 1, 2);
    assert_eq!(add(&mut heap, a, b), Value::fixnum(1).unwrap());
}

#[test]
fn integer_operand_is_promoted() {
    let mut heap = Heap::new();
    let half = ratio(&mut heap, 1, 2);
    let two = pack_integer(&mut heap, 2);
    let sum = add(&mut heap, two, half);
    assert_eq!(parts(&mut heap, sum), (5, 2));
    assert!(is_exact(&heap, sum));
}

#[test]
fn converts_to_double() {
    let mut heap = Heap::new();
    let quarter = ratio(&mut heap, 1, 4);
    assert_eq!(to_double(&heap, quarter), 0.25);
}

proptest! {
    #[test]
    fn common_factor_does_not_matter(
        n in -10_000i64..10_000,
        d in 1i64..10_000,
        k in prop_oneof![-1_000i64..-1, 1i64..1_000],
    ) {
        let mut heap = Heap::new();
        let plain = ratio(&mut heap, n, d);
        let scaled = ratio(&mut heap, n * k, d * k);
        prop_assert!(eqv(&heap, plain, scaled));
        prop_assert_eq!(parts(&mut heap, plain), parts(&mut heap, scaled));
    }

    #[test]
    fn unit_denominator_collapses(n in any::<i64>()) {
        let mut heap = Heap::new();
        let r = ratio(&mut heap, n, 1);
        let expected = pack_integer(&mut heap, n);
        prop_assert!(eqv(&heap, r, expected));
        prop_assert_eq!(r.type_of(&heap), ValueType::Integer);
    }

    #[test]
    fn addition_commutes(
        a in -1_000i64..1_000, b in 1i64..1_000,
        c in -1_000i64..1_000, d in 1i64..1_000,
    ) {
        let mut heap = Heap::new();
        let x = ratio(&mut heap, a, b);
        let y = ratio(&mut heap, c, d);
        let xy = add(&mut heap, x, y);
        let yx = add(&mut heap, y, x);
        prop_assert!(eqv(&heap, xy, yx));
    }
}
