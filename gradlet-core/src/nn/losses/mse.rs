// gradlet-core/src/nn/losses/mse.rs

use crate::error::GradletError;
use crate::value::Value;
use std::str::FromStr;

/// Specifies the reduction to apply to the summed squared errors:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = GradletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(GradletError::InvalidArgument(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Squared error between predictions and targets, reduced to one node.
///
/// The loss is built from ordinary graph operations
/// (`Σ (pred - target)^2`, then `/ n` for `Mean`), so `backward()` on the
/// result reaches every prediction.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Computes the loss.
    ///
    /// # Errors
    /// * `ShapeMismatch` if the slices differ in length.
    /// * `EmptyInput` if they are empty.
    pub fn calculate(&self, predictions: &[Value], targets: &[Value]) -> Result<Value, GradletError> {
        if predictions.len() != targets.len() {
            return Err(GradletError::ShapeMismatch {
                expected: targets.len(),
                actual: predictions.len(),
                operation: "MSELoss calculate".to_string(),
            });
        }
        if predictions.is_empty() {
            return Err(GradletError::EmptyInput("MSELoss calculate".to_string()));
        }

        let total: Value = predictions
            .iter()
            .zip(targets)
            .map(|(pred, target)| (pred - target).pow(2.0))
            .sum();

        Ok(match self.reduction {
            Reduction::Mean => total / predictions.len() as f64,
            Reduction::Sum => total,
        })
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
