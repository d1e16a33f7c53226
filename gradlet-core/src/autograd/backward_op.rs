use crate::value::Value;

/// The backward step of a differentiable scalar operation.
///
/// Every non-leaf [`Value`] stores the variant of the operation that
/// produced it, together with handles to its operands. During `backward()`
/// the variant computes the local derivative of the output with respect to
/// each operand and accumulates `local * grad_output` into the operand's
/// `grad`.
///
/// Derived operations (`sub`, `neg`, `div`) are compositions of these
/// primitives and therefore have no variant of their own.
#[derive(Debug, Clone)]
pub enum BackwardOp {
    Add { lhs: Value, rhs: Value },
    Mul { lhs: Value, rhs: Value },
    Pow { base: Value, exponent: f64 },
    Tanh { input: Value },
    Exp { input: Value },
    Relu { input: Value },
}

impl BackwardOp {
    /// Returns the operands of the forward operation, in order.
    ///
    /// The same node may appear twice (`a * a`).
    pub fn inputs(&self) -> Vec<&Value> {
        match self {
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs } => vec![lhs, rhs],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Tanh { input } | BackwardOp::Exp { input } | BackwardOp::Relu { input } => {
                vec![input]
            }
        }
    }

    /// Consumes the op and returns its operand handles.
    pub(crate) fn into_inputs(self) -> Vec<Value> {
        match self {
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs } => vec![lhs, rhs],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Tanh { input } | BackwardOp::Exp { input } | BackwardOp::Relu { input } => {
                vec![input]
            }
        }
    }

    /// Accumulates the contribution of this operation into its operands' gradients.
    ///
    /// # Arguments
    /// * `grad_output`: the fully accumulated gradient of the output node.
    /// * `output_data`: the forward value of the output node, reused by
    ///   `tanh` and `exp` whose derivatives are functions of their output.
    pub fn backward(&self, grad_output: f64, output_data: f64) {
        match self {
            BackwardOp::Add { lhs, rhs } => {
                lhs.acc_grad(grad_output);
                rhs.acc_grad(grad_output);
            }
            BackwardOp::Mul { lhs, rhs } => {
                // Read both operands before writing either; lhs and rhs may be the same node.
                let (lhs_data, rhs_data) = (lhs.data(), rhs.data());
                lhs.acc_grad(rhs_data * grad_output);
                rhs.acc_grad(lhs_data * grad_output);
            }
            BackwardOp::Pow { base, exponent } => {
                let local = exponent * base.data().powf(exponent - 1.0);
                base.acc_grad(local * grad_output);
            }
            BackwardOp::Tanh { input } => {
                input.acc_grad((1.0 - output_data * output_data) * grad_output);
            }
            BackwardOp::Exp { input } => {
                input.acc_grad(output_data * grad_output);
            }
            BackwardOp::Relu { input } => {
                let local = if input.data() > 0.0 { 1.0 } else { 0.0 };
                input.acc_grad(local * grad_output);
            }
        }
    }

    /// Diagnostic tag of the operation.
    pub fn label(&self) -> String {
        match self {
            BackwardOp::Add { .. } => "+".to_string(),
            BackwardOp::Mul { .. } => "*".to_string(),
            BackwardOp::Pow { exponent, .. } => format!("**{}", exponent),
            BackwardOp::Tanh { .. } => "tanh".to_string(),
            BackwardOp::Exp { .. } => "exp".to_string(),
            BackwardOp::Relu { .. } => "ReLU".to_string(),
        }
    }
}
