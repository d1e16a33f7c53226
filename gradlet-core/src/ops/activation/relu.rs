use crate::autograd::BackwardOp;
use crate::value::Value;

/// Computes `max(0, a)`.
///
/// Backward: the gradient passes through where `a > 0` and is blocked
/// elsewhere, including at `a == 0`.
pub fn relu_op(a: &Value) -> Value {
    let input = a.data();
    let data = if input < 0.0 { 0.0 } else { input };
    Value::from_op(data, BackwardOp::Relu { input: a.clone() })
}

impl Value {
    /// Rectified linear unit. See [`relu_op`].
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
