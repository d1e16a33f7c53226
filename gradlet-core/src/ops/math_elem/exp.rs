use crate::autograd::BackwardOp;
use crate::value::Value;

/// Computes `e^a`.
///
/// Backward: `a.grad += e^a * g`, reusing the output value.
pub fn exp_op(a: &Value) -> Value {
    let data = a.data().exp();
    Value::from_op(data, BackwardOp::Exp { input: a.clone() })
}

impl Value {
    /// Natural exponential. See [`exp_op`].
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
