use crate::ops::arithmetic::add::add_op;
use crate::ops::arithmetic::neg::neg_op;
use crate::value::Value;

/// Computes `a - b` as `a + (-b)`.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}

impl_binary_op!(Sub, sub, SubAssign, sub_assign, sub_op);

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
