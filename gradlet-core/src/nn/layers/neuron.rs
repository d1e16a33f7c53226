use crate::error::GradletError;
use crate::nn::activation::Activation;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::value::Value;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use std::fmt;

/// A single unit computing `act(b + Σ wᵢxᵢ)`.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `nin` inputs.
    ///
    /// Weights are drawn uniformly from `[-1, 1)`, the bias starts at 0.
    pub fn new<R: Rng + ?Sized>(nin: usize, activation: Activation, rng: &mut R) -> Self {
        let dist = Uniform::new(-1.0, 1.0);
        let weights = (0..nin)
            .map(|i| {
                Parameter::new(
                    Value::new(dist.sample(rng)),
                    Some(format!("weight.{}", i)),
                )
            })
            .collect();
        Neuron {
            weights,
            bias: Parameter::new(Value::new(0.0), Some("bias".to_string())),
            activation,
        }
    }

    /// Builds a neuron from explicit weights and bias.
    pub fn from_weights(weights: &[f64], bias: f64, activation: Activation) -> Self {
        Neuron {
            weights: weights
                .iter()
                .enumerate()
                .map(|(i, &w)| Parameter::new(Value::new(w), Some(format!("weight.{}", i))))
                .collect(),
            bias: Parameter::new(Value::new(bias), Some("bias".to_string())),
            activation,
        }
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }
}

impl Module for Neuron {
    type Output = Value;

    fn forward(&self, input: &[Value]) -> Result<Value, GradletError> {
        if input.len() != self.weights.len() {
            return Err(GradletError::ShapeMismatch {
                expected: self.weights.len(),
                actual: input.len(),
                operation: "Neuron::forward".to_string(),
            });
        }
        let act = self
            .weights
            .iter()
            .zip(input)
            .fold(self.bias.value().clone(), |acc, (w, x)| acc + w.value() * x);
        Ok(self.activation.apply(act))
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.weights.iter().chain(std::iter::once(&self.bias)).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        self.parameters()
            .into_iter()
            .map(|p| (p.name().unwrap_or("param").to_string(), p))
            .collect()
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Neuron({})", self.activation, self.weights.len())
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
