use crate::autograd::BackwardOp;
use crate::value::Value;

/// Computes `a * b`.
///
/// Backward: `a.grad += b * g` and `b.grad += a * g`. When `a` and `b` are
/// the same node both terms land on it, giving `2a * g`.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let data = a.data() * b.data();
    Value::from_op(
        data,
        BackwardOp::Mul {
            lhs: a.clone(),
            rhs: b.clone(),
        },
    )
}

impl_binary_op!(Mul, mul, MulAssign, mul_assign, mul_op);

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
