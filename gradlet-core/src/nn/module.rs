use crate::error::GradletError;
use crate::nn::Parameter;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// A module owns trainable [`Parameter`]s and maps a slice of input nodes to
/// its output. Every forward call builds new graph nodes on top of the
/// shared parameter leaves.
pub trait Module: std::fmt::Debug {
    /// What a forward pass produces: one node for a neuron, one per neuron
    /// for a layer.
    type Output;

    /// Performs a forward pass of the module.
    ///
    /// # Errors
    /// Returns `GradletError::ShapeMismatch` if `input` does not have the
    /// number of features the module was built for.
    fn forward(&self, input: &[Value]) -> Result<Self::Output, GradletError>;

    /// Returns all learnable parameters of the module, sub-modules included,
    /// in a stable order.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Returns all learnable parameters along with hierarchical names
    /// (e.g. `"layers.0.neurons.3.bias"`).
    fn named_parameters(&self) -> Vec<(String, &Parameter)>;

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    /// Total number of scalar parameters.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct MockModule {
        scale: Parameter,
    }

    impl Module for MockModule {
        type Output = Vec<Value>;

        fn forward(&self, input: &[Value]) -> Result<Vec<Value>, GradletError> {
            Ok(input.iter().map(|x| x * &*self.scale).collect())
        }

        fn parameters(&self) -> Vec<&Parameter> {
            vec![&self.scale]
        }

        fn named_parameters(&self) -> Vec<(String, &Parameter)> {
            let name = self.scale.name().unwrap_or("param").to_string();
            vec![(name, &self.scale)]
        }
    }

    #[test]
    fn test_default_zero_grad() {
        let module = MockModule {
            scale: Parameter::new(Value::new(2.0), Some("scale".to_string())),
        };
        let out = module.forward(&[Value::new(3.0)]).expect("forward");
        out[0].backward();
        assert_eq!(module.scale.grad(), 3.0);
        module.zero_grad();
        assert_eq!(module.scale.grad(), 0.0);
        assert_eq!(module.num_parameters(), 1);
    }

    #[test]
    fn test_mock_module_named_parameters() {
        let named = MockModule {
            scale: Parameter::new(Value::new(1.0), Some("custom".to_string())),
        };
        assert_eq!(named.named_parameters()[0].0, "custom");

        let unnamed = MockModule {
            scale: Parameter::new_unnamed(Value::new(1.0)),
        };
        assert_eq!(unnamed.named_parameters()[0].0, "param");
        assert_eq!(unnamed.named_parameters()[0].1.name(), None);
    }
}
