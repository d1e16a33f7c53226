use crate::error::GradletError;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// Nonlinearity applied to a neuron's weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    /// Identity; used for output layers.
    Linear,
    #[default]
    Relu,
    Tanh,
}

impl Activation {
    pub fn apply(self, x: Value) -> Value {
        match self {
            Activation::Linear => x,
            Activation::Relu => x.relu(),
            Activation::Tanh => x.tanh(),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Activation::Linear => "Linear",
            Activation::Relu => "ReLU",
            Activation::Tanh => "Tanh",
        };
        f.write_str(name)
    }
}

impl FromStr for Activation {
    type Err = GradletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" | "identity" => Ok(Activation::Linear),
            "relu" => Ok(Activation::Relu),
            "tanh" => Ok(Activation::Tanh),
            _ => Err(GradletError::InvalidArgument(format!(
                "Unsupported activation: {}",
                s
            ))),
        }
    }
}
