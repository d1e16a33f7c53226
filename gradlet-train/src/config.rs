use gradlet_core::nn::Activation;
use gradlet_core::GradletError;
use log::warn;

/// Hyperparameters of a training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    /// Number of generated training examples.
    pub n_samples: usize,
    /// Seed for data generation and weight initialization.
    pub seed: u64,
    /// Width of each hidden layer. The output layer always has one linear neuron.
    pub hidden: Vec<usize>,
    pub hidden_activation: Activation,
    pub learning_rate: f64,
    pub momentum: f64,
    pub epochs: usize,
    /// Log the loss every `log_every` epochs (epoch 0 included).
    pub log_every: usize,
    /// Decision boundary `x1 + x2 > threshold` of the generated labels.
    pub threshold: f64,
    /// Examples per update. `None` uses the whole dataset for every step.
    pub batch_size: Option<usize>,
    /// Rescale the gradient vector to this L2 norm before each step.
    pub max_grad_norm: Option<f64>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            n_samples: 100,
            seed: 42,
            hidden: vec![4],
            hidden_activation: Activation::Relu,
            learning_rate: 0.1,
            momentum: 0.0,
            epochs: 100,
            log_every: 10,
            threshold: 1.0,
            batch_size: None,
            max_grad_norm: None,
        }
    }
}

impl TrainConfig {
    /// Checks the configuration before any model is built.
    ///
    /// # Errors
    /// `GradletError::InvalidArgument` naming the first offending field.
    pub fn validate(&self) -> Result<(), GradletError> {
        let invalid = |msg: String| Err(GradletError::InvalidArgument(msg));
        if self.n_samples == 0 {
            return invalid("n_samples must be positive".to_string());
        }
        if self.hidden.iter().any(|&w| w == 0) {
            return invalid(format!("hidden layer widths must be positive, got {:?}", self.hidden));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return invalid(format!("learning_rate must be positive, got {}", self.learning_rate));
        }
        if !(0.0..1.0).contains(&self.momentum) {
            return invalid(format!("momentum must be in [0, 1), got {}", self.momentum));
        }
        if self.log_every == 0 {
            return invalid("log_every must be positive".to_string());
        }
        if !self.threshold.is_finite() {
            return invalid(format!("threshold must be finite, got {}", self.threshold));
        }
        if self.batch_size == Some(0) {
            return invalid("batch_size must be positive".to_string());
        }
        if let Some(max_norm) = self.max_grad_norm {
            if !(max_norm > 0.0) {
                return invalid(format!("max_grad_norm must be positive, got {}", max_norm));
            }
        }
        if self.epochs == 0 {
            warn!("TrainConfig: epochs is 0, the model will not be trained");
        }
        if !(0.0..2.0).contains(&self.threshold) {
            warn!(
                "TrainConfig: threshold {} puts every generated example in one class",
                self.threshold
            );
        }
        Ok(())
    }

    /// Layer widths passed to `Mlp::new`: the hidden widths followed by the
    /// single output neuron.
    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes = self.hidden.clone();
        sizes.push(1);
        sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = TrainConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.layer_sizes(), vec![4, 1]);
        assert_eq!(config.hidden_activation, Activation::Relu);
    }

    #[test]
    fn test_invalid_fields() {
        let cases = [
            TrainConfig { n_samples: 0, ..Default::default() },
            TrainConfig { hidden: vec![4, 0], ..Default::default() },
            TrainConfig { learning_rate: 0.0, ..Default::default() },
            TrainConfig { learning_rate: f64::NAN, ..Default::default() },
            TrainConfig { momentum: 1.0, ..Default::default() },
            TrainConfig { log_every: 0, ..Default::default() },
            TrainConfig { batch_size: Some(0), ..Default::default() },
            TrainConfig { max_grad_norm: Some(-1.0), ..Default::default() },
            TrainConfig { threshold: f64::INFINITY, ..Default::default() },
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(GradletError::InvalidArgument(_))),
                "{:?} should be rejected",
                config
            );
        }
    }

    #[test]
    fn test_no_hidden_layers_is_valid() {
        let config = TrainConfig { hidden: Vec::new(), ..Default::default() };
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.layer_sizes(), vec![1]);
    }
}
