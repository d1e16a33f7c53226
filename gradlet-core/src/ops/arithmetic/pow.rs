use crate::autograd::BackwardOp;
use crate::value::Value;
use num_traits::Pow;

/// Computes `a^exponent` for a constant real exponent.
///
/// Backward: `a.grad += exponent * a^(exponent - 1) * g`.
pub fn pow_op(a: &Value, exponent: f64) -> Value {
    let data = a.data().powf(exponent);
    Value::from_op(
        data,
        BackwardOp::Pow {
            base: a.clone(),
            exponent,
        },
    )
}

impl Value {
    /// Raises this node to a constant power. See [`pow_op`].
    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }
}

impl Pow<f64> for &Value {
    type Output = Value;

    fn pow(self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
