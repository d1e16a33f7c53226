use crate::error::GradletError;
use crate::nn::parameter::Parameter;
use crate::optim::optimizer_trait::Optimizer;
use log::{debug, warn};

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Plain SGD updates each parameter as `data -= lr * grad`. Momentum and
/// weight decay are opt-in through the builder methods.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Parameter>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    // One buffer per parameter, same order as `params`.
    momentum_buffers: Vec<Option<f64>>,
}

fn validate_lr(lr: f64) -> Result<(), GradletError> {
    if !lr.is_finite() || lr < 0.0 {
        return Err(GradletError::InvalidArgument(format!(
            "Invalid learning rate: {}",
            lr
        )));
    }
    Ok(())
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Arguments
    ///
    /// * `params`: the parameters to optimize. Clones of a module's
    ///   parameters share its nodes.
    /// * `lr`: The learning rate.
    ///
    /// # Errors
    /// `InvalidArgument` if `lr` is negative or not finite.
    pub fn new(params: impl IntoIterator<Item = Parameter>, lr: f64) -> Result<Self, GradletError> {
        validate_lr(lr)?;
        let params: Vec<Parameter> = params.into_iter().collect();
        if params.is_empty() {
            warn!("SgdOptimizer created with no parameters");
        }
        let momentum_buffers = vec![None; params.len()];
        Ok(SgdOptimizer {
            params,
            lr,
            momentum: 0.0,
            weight_decay: 0.0,
            momentum_buffers,
        })
    }

    /// Enables momentum: `buf = momentum * buf + grad`, `data -= lr * buf`.
    ///
    /// # Errors
    /// `InvalidArgument` unless `0 <= momentum < 1`.
    pub fn with_momentum(mut self, momentum: f64) -> Result<Self, GradletError> {
        if !(0.0..1.0).contains(&momentum) {
            return Err(GradletError::InvalidArgument(format!(
                "Invalid momentum value: {}",
                momentum
            )));
        }
        self.momentum = momentum;
        Ok(self)
    }

    /// Adds an L2 penalty: the effective gradient is `grad + weight_decay * data`.
    ///
    /// # Errors
    /// `InvalidArgument` if `weight_decay` is negative or not finite.
    pub fn with_weight_decay(mut self, weight_decay: f64) -> Result<Self, GradletError> {
        if !weight_decay.is_finite() || weight_decay < 0.0 {
            return Err(GradletError::InvalidArgument(format!(
                "Invalid weight_decay value: {}",
                weight_decay
            )));
        }
        self.weight_decay = weight_decay;
        Ok(self)
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn weight_decay(&self) -> f64 {
        self.weight_decay
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), GradletError> {
        for (param, buffer) in self.params.iter().zip(self.momentum_buffers.iter_mut()) {
            let mut d_p = param.grad();
            if self.weight_decay != 0.0 {
                d_p += self.weight_decay * param.data();
            }
            if self.momentum != 0.0 {
                let buf = match *buffer {
                    Some(prev) => self.momentum * prev + d_p,
                    None => d_p,
                };
                *buffer = Some(buf);
                d_p = buf;
            }
            param.sub_data(self.lr * d_p);
        }
        debug!(
            "SGD step: {} parameters updated with lr={}",
            self.params.len(),
            self.lr
        );
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }

    fn lr(&self) -> f64 {
        self.lr
    }

    fn set_lr(&mut self, lr: f64) -> Result<(), GradletError> {
        validate_lr(lr)?;
        self.lr = lr;
        Ok(())
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
