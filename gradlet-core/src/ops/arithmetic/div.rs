use crate::ops::arithmetic::mul::mul_op;
use crate::ops::arithmetic::pow::pow_op;
use crate::value::Value;

/// Computes `a / b` as `a * b^-1`.
///
/// A zero divisor is not rejected: the result and the gradients follow IEEE
/// semantics (`±inf` or `NaN`) and propagate through later operations.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_op(b, -1.0))
}

impl_binary_op!(Div, div, DivAssign, div_assign, div_op);

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
