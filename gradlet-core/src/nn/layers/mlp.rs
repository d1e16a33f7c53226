use crate::error::GradletError;
use crate::nn::activation::Activation;
use crate::nn::layers::layer::Layer;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::value::Value;
use log::debug;
use rand::Rng;
use std::fmt;

/// A multi-layer perceptron: a chain of fully connected [`Layer`]s.
///
/// Every layer but the last applies the hidden activation; the last layer is
/// linear so that the caller decides how to squash the output.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates a network with `nin` inputs and one layer per entry of
    /// `nouts`. For example, `&[16, 16, 1]` creates a 3-layer network.
    ///
    /// # Errors
    /// `InvalidArgument` if `nin` is zero, `nouts` is empty or contains a
    /// zero-width layer.
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        nouts: &[usize],
        hidden_activation: Activation,
        rng: &mut R,
    ) -> Result<Self, GradletError> {
        if nin == 0 {
            return Err(GradletError::InvalidArgument(
                "Mlp needs at least one input feature".to_string(),
            ));
        }
        if nouts.is_empty() {
            return Err(GradletError::InvalidArgument(
                "Mlp needs at least one layer".to_string(),
            ));
        }
        if let Some(i) = nouts.iter().position(|&n| n == 0) {
            return Err(GradletError::InvalidArgument(format!(
                "Mlp layer {} has zero neurons",
                i
            )));
        }

        let mut layers = Vec::with_capacity(nouts.len());
        let mut size_prev = nin;
        for (i, &nout) in nouts.iter().enumerate() {
            let activation = if i + 1 == nouts.len() {
                Activation::Linear
            } else {
                hidden_activation
            };
            layers.push(Layer::new(size_prev, nout, activation, rng));
            size_prev = nout;
        }

        let mlp = Mlp { layers };
        debug!("Created {} with {} parameters", mlp, mlp.num_parameters());
        Ok(mlp)
    }

    pub fn from_layers(layers: Vec<Layer>) -> Self {
        Mlp { layers }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    type Output = Vec<Value>;

    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, GradletError> {
        let mut out = input.to_vec();
        for layer in &self.layers {
            out = layer.forward(&out)?;
        }
        Ok(out)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (i, layer) in self.layers.iter().enumerate() {
            for (name, param) in layer.named_parameters() {
                params.push((format!("layers.{}.{}", i, name), param));
            }
        }
        params
    }
}

impl fmt::Display for Mlp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MLP of [")?;
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", layer)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
