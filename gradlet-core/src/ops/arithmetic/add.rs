use crate::autograd::BackwardOp;
use crate::value::Value;

/// Computes `a + b`.
///
/// Backward: both operands receive the output gradient unchanged.
pub fn add_op(a: &Value, b: &Value) -> Value {
    let data = a.data() + b.data();
    Value::from_op(
        data,
        BackwardOp::Add {
            lhs: a.clone(),
            rhs: b.clone(),
        },
    )
}

impl_binary_op!(Add, add, AddAssign, add_assign, add_op);

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
