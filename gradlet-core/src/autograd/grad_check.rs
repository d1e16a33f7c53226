use crate::value::Value;
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Output+: {output_plus}, Output-: {output_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        output_plus: f64,
        output_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Finite-difference step must be positive and finite, got {0}")]
    InvalidEpsilon(f64),
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` is called once on fresh leaves built from `inputs` and
/// differentiated with `backward()`. It is then called twice per input with
/// that input shifted by `±epsilon`, and the slope
/// `(f(x + ε) - f(x - ε)) / 2ε` is compared with the analytical gradient.
///
/// Values are accepted if they are within `tolerance` of each other, either
/// absolutely or relatively.
///
/// # Errors
/// Returns the first failing input as a `GradCheckError`.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Value,
{
    if !(epsilon > 0.0 && epsilon.is_finite()) {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }

    let leaves: Vec<Value> = inputs.iter().copied().map(Value::new).collect();
    let output = func(&leaves);
    output.backward();

    let evaluate = |shifted: &[f64]| -> f64 {
        let shifted_leaves: Vec<Value> = shifted.iter().copied().map(Value::new).collect();
        func(&shifted_leaves).data()
    };

    for (input_index, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let mut shifted = inputs.to_vec();
        shifted[input_index] = inputs[input_index] + epsilon;
        let output_plus = evaluate(&shifted);
        shifted[input_index] = inputs[input_index] - epsilon;
        let output_minus = evaluate(&shifted);

        let numerical_grad = (output_plus - output_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                output_plus,
                output_minus,
            });
        }

        debug!(
            "check_grad: input {} analytical={} numerical={}",
            input_index, analytical_grad, numerical_grad
        );

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
