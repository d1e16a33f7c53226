use crate::config::TrainConfig;
use gradlet_core::nn::{MSELoss, Mlp, Module, Reduction};
use gradlet_core::optim::{clip_grad_norm_, Optimizer, SgdOptimizer};
use gradlet_core::{GradletError, Value};
use gradlet_data::{half_plane, DataLoader, Dataset, Sample, SequentialSampler, VecDataset};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Loss history of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport {
    /// Mean loss of each epoch, measured before that epoch's updates.
    pub losses: Vec<f64>,
}

impl TrainReport {
    pub fn initial_loss(&self) -> Option<f64> {
        self.losses.first().copied()
    }

    pub fn final_loss(&self) -> Option<f64> {
        self.losses.last().copied()
    }
}

/// The network's verdict on one example.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// `tanh` of the network output, in `(-1, 1)`.
    pub output: f64,
    /// `1.0` if `output > 0`, else `-1.0`.
    pub label: f64,
}

/// Fits an [`Mlp`] to a generated half-plane dataset.
///
/// The network output is squashed with `tanh` and compared with the `±1`
/// targets by mean squared error.
pub struct Trainer {
    config: TrainConfig,
    mlp: Mlp,
    optimizer: SgdOptimizer,
    loader: DataLoader<VecDataset<Sample>, SequentialSampler>,
    loss_fn: MSELoss,
}

impl Trainer {
    /// Validates `config`, generates the dataset and builds the network.
    pub fn new(config: TrainConfig) -> Result<Self, GradletError> {
        config.validate()?;
        let dataset = half_plane(config.n_samples, config.threshold, config.seed);
        let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(1));
        let mlp = Mlp::new(2, &config.layer_sizes(), config.hidden_activation, &mut rng)?;
        Self::from_parts(config, mlp, dataset)
    }

    /// Builds a trainer around an existing network and dataset.
    pub fn from_parts(
        config: TrainConfig,
        mlp: Mlp,
        dataset: VecDataset<Sample>,
    ) -> Result<Self, GradletError> {
        config.validate()?;
        if dataset.is_empty() {
            return Err(GradletError::EmptyInput("Trainer dataset".to_string()));
        }
        let optimizer = SgdOptimizer::new(mlp.parameters().into_iter().cloned(), config.learning_rate)?
            .with_momentum(config.momentum)?;
        let batch_size = config.batch_size.unwrap_or(dataset.len());
        let loader = DataLoader::new(dataset, batch_size, SequentialSampler::new(), false, None);
        info!("{} ({} parameters)", mlp, mlp.num_parameters());
        Ok(Trainer {
            config,
            mlp,
            optimizer,
            loader,
            loss_fn: MSELoss::new(Reduction::Mean),
        })
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    pub fn mlp(&self) -> &Mlp {
        &self.mlp
    }

    pub fn dataset(&self) -> &VecDataset<Sample> {
        &self.loader.dataset
    }

    /// Builds the graph of `tanh(mlp(x))` for one example.
    fn forward_example(&self, sample: &Sample) -> Result<Value, GradletError> {
        let out = self.mlp.forward(&sample.input_values())?;
        out.into_iter()
            .next()
            .map(|o| o.tanh())
            .ok_or_else(|| GradletError::EmptyInput("Mlp output".to_string()))
    }

    /// Builds the mean squared error of a batch as a single graph node.
    pub fn batch_loss(&self, batch: &[Sample]) -> Result<Value, GradletError> {
        let predictions = batch
            .iter()
            .map(|s| self.forward_example(s))
            .collect::<Result<Vec<Value>, GradletError>>()?;
        let targets: Vec<Value> = batch.iter().map(|s| Value::new(s.target)).collect();
        self.loss_fn.calculate(&predictions, &targets)
    }

    /// Runs one pass over the dataset and returns its mean loss.
    ///
    /// Every batch gets a fresh graph: zero grads, loss, backward, one SGD
    /// step. The graph is dropped before the next batch.
    pub fn train_epoch(&mut self) -> Result<f64, GradletError> {
        self.loader.reset();
        let mut total = 0.0;
        let mut batches = 0usize;
        while let Some(batch) = self.loader.next() {
            let batch = batch?;
            self.optimizer.zero_grad();
            let loss = self.batch_loss(&batch)?;
            loss.backward();
            if let Some(max_norm) = self.config.max_grad_norm {
                let norm = clip_grad_norm_(self.mlp.parameters(), max_norm, 2.0)?;
                debug!("gradient norm before clipping: {}", norm);
            }
            self.optimizer.step()?;
            total += loss.data();
            batches += 1;
        }
        Ok(total / batches.max(1) as f64)
    }

    /// Trains for `config.epochs` epochs, logging every `config.log_every`.
    pub fn fit(&mut self) -> Result<TrainReport, GradletError> {
        let mut losses = Vec::with_capacity(self.config.epochs);
        for epoch in 0..self.config.epochs {
            let loss = self.train_epoch()?;
            if epoch % self.config.log_every == 0 {
                info!("Epoch {} Loss: {}", epoch, loss);
            }
            losses.push(loss);
        }
        Ok(TrainReport { losses })
    }

    /// Classifies one point.
    pub fn predict(&self, features: &[f64]) -> Result<Prediction, GradletError> {
        let output = self
            .forward_example(&Sample::new(features.to_vec(), 0.0))?
            .data();
        let label = if output > 0.0 { 1.0 } else { -1.0 };
        Ok(Prediction { output, label })
    }

    /// Fraction of training examples whose predicted label matches the target.
    pub fn accuracy(&self) -> Result<f64, GradletError> {
        let samples = self.dataset().as_slice();
        let mut correct = 0usize;
        for sample in samples {
            if self.predict(&sample.features)?.label == sample.target {
                correct += 1;
            }
        }
        Ok(correct as f64 / samples.len() as f64)
    }
}

#[cfg(test)]
#[path = "trainer_test.rs"]
mod tests;
