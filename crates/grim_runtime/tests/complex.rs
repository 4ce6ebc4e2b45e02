use grim_runtime::numeric::{
    add, components, eqv, float_value, imag_part, is_exact, is_float, negate, pack_complex,
    pack_float, pack_integer, pack_polar, pack_rational, real_part, to_double,
};
use grim_runtime::{Heap, Value, ValueExt, ValueType, render};
use proptest::prelude::*;

fn int(heap: &mut Heap, n: i64) -> Value {
    pack_integer(heap, n)
}

#[test]
fn exact_zero_imaginary_collapses() {
    let mut heap = Heap::new();
    let one = int(&mut heap, 1);
    let zero = int(&mut heap, 0);
    assert_eq!(pack_complex(&mut heap, one, zero), one);
}

#[test]
fn float_zero_imaginary_collapses() {
    let mut heap = Heap::new();
    let pi = pack_float(&mut heap, 3.1415);
    let zero = pack_float(&mut heap, 0.0);
    let v = pack_complex(&mut heap, pi, zero);
    assert_eq!(v, pi);
    assert_eq!(float_value(&heap, v), 3.1415);

    let negative_zero = pack_float(&mut heap, -0.0);
    assert_eq!(pack_complex(&mut heap, pi, negative_zero), pi);
}

#[test]
fn nonzero_imaginary_builds_a_cell() {
    let mut heap = Heap::new();
    let one = int(&mut heap, 1);
    let c = pack_complex(&mut heap, one, one);
    assert_eq!(c.type_of(&heap), ValueType::Complex);
    assert_eq!(components(&heap, c), (one, one));

    let re = pack_float(&mut heap, 0.0);
    let im = pack_float(&mut heap, -1.0);
    let c = pack_complex(&mut heap, re, im);
    assert_eq!(c.type_of(&heap), ValueType::Complex);
}

#[test]
fn mixed_exactness_is_coerced_to_float() {
    let mut heap = Heap::new();
    let one = int(&mut heap, 1);
    let im = pack_float(&mut heap, 2.5);
    let c = pack_complex(&mut heap, one, im);
    let (re, im) = components(&heap, c);
    assert!(is_float(&heap, re));
    assert!(is_float(&heap, im));
    assert_eq!(float_value(&heap, re), 1.0);
    assert!(!is_exact(&heap, c));
}

#[test]
fn exact_components_stay_exact() {
    let mut heap = Heap::new();
    let one = int(&mut heap, 1);
    let two = int(&mut heap, 2);
    let half = pack_rational(&mut heap, one, two);
    let c = pack_complex(&mut heap, half, two);
    assert!(is_exact(&heap, c));
    assert_eq!(render(&heap, c), "1/2+2i");
}

#[test]
fn parts_of_a_real_number() {
    let mut heap = Heap::new();
    let five = int(&mut heap, 5);
    assert_eq!(real_part(&heap, five), five);
    assert_eq!(imag_part(&heap, five), Value::fixnum(0).unwrap());
}

#[test]
fn parts_of_a_complex_number() {
    let mut heap = Heap::new();
    let three = int(&mut heap, 3);
    let four = int(&mut heap, -4);
    let c = pack_complex(&mut heap, three, four);
    assert_eq!(real_part(&heap, c), three);
    assert_eq!(imag_part(&heap, c), four);
    assert_eq!(render(&heap, c), "3-4i");
}

#[test]
fn negation_is_componentwise() {
    let mut heap = Heap::new();
    let three = int(&mut heap, 3);
    let four = int(&mut heap, 4);
    let c = pack_complex(&mut heap, three, four);
    let n = negate(&mut heap, c);
    assert_eq!(render(&heap, n), "-3-4i");
    assert_eq!(render(&heap, c), "3+4i");
}

#[test]
fn cancelling_imaginary_parts_collapse() {
    let mut heap = Heap::new();
    let one = int(&mut heap, 1);
    let two = int(&mut heap, 2);
    let minus_two = int(&mut heap, -2);
    let zero = int(&mut heap, 0);
    let a = pack_complex(&mut heap, one, two);
    let b = pack_complex(&mut heap, zero, minus_two);
    assert_eq!(add(&mut heap, a, b), one);
}

#[test]
fn real_plus_complex() {
    let mut heap = Heap::new();
    let one = int(&mut heap, 1);
    let ten = int(&mut heap, 10);
    let c = pack_complex(&mut heap, one, one);
    let sum = add(&mut heap, ten, c);
    assert_eq!(render(&heap, sum), "11+1i");

    let x = pack_float(&mut heap, 0.5);
    let sum = add(&mut heap, c, x);
    assert_eq!(render(&heap, sum), "1.5+1.0i");
}

#[test]
fn polar_form_uses_degrees() {
    let mut heap = Heap::new();
    let two = int(&mut heap, 2);
    let right = int(&mut heap, 90);
    let c = pack_polar(&mut heap, two, right);
    let (re, im) = components(&heap, c);
    assert!(to_double(&heap, re).abs() < 1e-12);
    assert!((to_double(&heap, im) - 2.0).abs() < 1e-12);

    let zero = int(&mut heap, 0);
    let v = pack_polar(&mut heap, two, zero);
    assert_eq!(v.type_of(&heap), ValueType::Float);
    assert_eq!(float_value(&heap, v), 2.0);
}

#[test]
#[should_panic(expected = "Not a real number")]
fn complex_component_is_fatal() {
    let mut heap = Heap::new();
    let one = int(&mut heap, 1);
    let c = pack_complex(&mut heap, one, one);
    pack_complex(&mut heap, c, one);
}

#[test]
#[should_panic(expected = "Not a real number")]
fn non_number_real_part_is_fatal_even_with_zero_imaginary() {
    let mut heap = Heap::new();
    let zero = int(&mut heap, 0);
    pack_complex(&mut heap, Value::NIL, zero);
}

proptest! {
    #[test]
    fn exactness_is_the_conjunction(a in -100i64..100, b in 1i64..100, inexact_real in any::<bool>()) {
        let mut heap = Heap::new();
        let re = if inexact_real { pack_float(&mut heap, a as f64) } else { pack_integer(&mut heap, a) };
        let im = pack_integer(&mut heap, b);
        let expected = is_exact(&heap, re) && is_exact(&heap, im);
        let c = pack_complex(&mut heap, re, im);
        prop_assert_eq!(is_exact(&heap, c), expected);
    }

    #[test]
    fn zero_of_same_exactness_collapses(a in any::<i64>(), x in -1e9f64..1e9) {
        let mut heap = Heap::new();
        let exact = pack_integer(&mut heap, a);
        let zero = pack_integer(&mut heap, 0);
        prop_assert_eq!(pack_complex(&mut heap, exact, zero), exact);

        let inexact = pack_float(&mut heap, x);
        let fzero = pack_float(&mut heap, 0.0);
        let collapsed = pack_complex(&mut heap, inexact, fzero);
        prop_assert!(eqv(&heap, collapsed, inexact));
    }
}
