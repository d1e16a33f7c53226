use crate::error::GradletError;
use crate::nn::activation::Activation;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// `nout` independent neurons reading the same input.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        nout: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Self {
        Layer {
            neurons: (0..nout)
                .map(|_| Neuron::new(nin, activation, rng))
                .collect(),
        }
    }

    pub fn from_neurons(neurons: Vec<Neuron>) -> Self {
        Layer { neurons }
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Number of outputs.
    pub fn nout(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    type Output = Vec<Value>;

    /// One output per neuron, in order.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, GradletError> {
        self.neurons.iter().map(|n| n.forward(input)).collect()
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (i, neuron) in self.neurons.iter().enumerate() {
            for (name, param) in neuron.named_parameters() {
                params.push((format!("neurons.{}.{}", i, name), param));
            }
        }
        params
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Layer of [")?;
        for (i, neuron) in self.neurons.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", neuron)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::{check_values_near, values};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_forward_one_output_per_neuron() {
        let layer = Layer::from_neurons(vec![
            Neuron::from_weights(&[1.0, 1.0], 0.0, Activation::Linear),
            Neuron::from_weights(&[1.0, -1.0], 0.0, Activation::Relu),
            Neuron::from_weights(&[0.0, 0.0], 0.0, Activation::Tanh),
        ]);
        let out = layer.forward(&values(&[2.0, 3.0])).expect("forward");
        check_values_near(&out, &[5.0, 0.0, 0.0], 1e-12);
    }

    #[test]
    fn test_shared_input_receives_every_contribution() {
        let layer = Layer::from_neurons(vec![
            Neuron::from_weights(&[2.0], 0.0, Activation::Linear),
            Neuron::from_weights(&[3.0], 0.0, Activation::Linear),
        ]);
        let x = values(&[1.0]);
        let out = layer.forward(&x).expect("forward");
        let total: Value = out.iter().sum();
        total.backward();
        assert_eq!(x[0].grad(), 5.0);
    }

    #[test]
    fn test_parameters_and_names() {
        let mut rng = StdRng::seed_from_u64(3);
        let layer = Layer::new(3, 4, Activation::Relu, &mut rng);
        assert_eq!(layer.nout(), 4);
        assert_eq!(layer.num_parameters(), 16);
        let named = layer.named_parameters();
        assert_eq!(named[0].0, "neurons.0.weight.0");
        assert_eq!(named[15].0, "neurons.3.bias");
    }

    #[test]
    fn test_shape_mismatch_propagates() {
        let mut rng = StdRng::seed_from_u64(3);
        let layer = Layer::new(2, 2, Activation::Relu, &mut rng);
        assert!(matches!(
            layer.forward(&values(&[1.0, 2.0, 3.0])),
            Err(GradletError::ShapeMismatch { expected: 2, actual: 3, .. })
        ));
    }

    #[test]
    fn test_display() {
        let layer = Layer::from_neurons(vec![
            Neuron::from_weights(&[1.0, 1.0], 0.0, Activation::Relu),
            Neuron::from_weights(&[1.0, 1.0], 0.0, Activation::Relu),
        ]);
        assert_eq!(layer.to_string(), "Layer of [ReLUNeuron(2), ReLUNeuron(2)]");
    }
}
