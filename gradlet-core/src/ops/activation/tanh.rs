use crate::autograd::BackwardOp;
use crate::value::Value;

/// Computes `tanh(a)`.
///
/// Backward: `a.grad += (1 - t²) * g` where `t` is the output value.
pub fn tanh_op(a: &Value) -> Value {
    let data = a.data().tanh();
    Value::from_op(data, BackwardOp::Tanh { input: a.clone() })
}

impl Value {
    /// Hyperbolic tangent. See [`tanh_op`].
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
