use crate::core::Heap;
use crate::errors::NumericResult;
use crate::numeric::checked::expect_number;
use crate::numeric::{add, integer::ZERO, negate, sub};
use grim_core::Value;

fn check_numbers(heap: &Heap, op: &'static str, args: &[Value]) -> NumericResult<()> {
    for &arg in args {
        expect_number(heap, arg, op)?;
    }
    Ok(())
}

/// `(+ n ...)`. The empty sum is 0.
pub fn builtin_add(heap: &mut Heap, args: &[Value]) -> NumericResult<Value> {
    check_numbers(heap, "+", args)?;
    Ok(args.iter().fold(ZERO, |acc, &x| add(heap, acc, x)))
}

/// `(- n ...)`. With one argument this is negation, as in Scheme; with none
/// it is 0.
pub fn builtin_sub(heap: &mut Heap, args: &[Value]) -> NumericResult<Value> {
    check_numbers(heap, "-", args)?;
    match args {
        [] => Ok(ZERO),
        [x] => Ok(negate(heap, *x)),
        [first, rest @ ..] => Ok(rest.iter().fold(*first, |acc, &x| sub(heap, acc, x))),
    }
}
